use std::sync::Arc;

use esgchart_core::{EsgConnector, EsgError};

/// Environment variable that switches every demo to the fixture connector.
pub const USE_MOCK_ENV: &str = "ESGCHART_DEMOS_USE_MOCK";

/// Return a connector for demos.
///
/// Uses the fixture connector when `ESGCHART_DEMOS_USE_MOCK` is set, otherwise
/// the live Yahoo connector behind a process-lifetime cache.
///
/// # Errors
/// Returns an error if the Yahoo middleware stack fails validation.
pub fn get_connector() -> Result<Arc<dyn EsgConnector>, EsgError> {
    if std::env::var(USE_MOCK_ENV).is_ok() {
        println!("--- (Using Mock Connector for CI) ---");
        Ok(Arc::new(esgchart_mock::MockConnector::new()))
    } else {
        esgchart_yahoo::YahooConnector::cached().build()
    }
}

/// First command-line argument, or `default`.
#[must_use]
pub fn ticker_arg(default: &str) -> String {
    std::env::args().nth(1).unwrap_or_else(|| default.to_string())
}
