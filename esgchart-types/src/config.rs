//! Configuration types shared across the orchestrator, connectors, and middleware.

use std::time::Duration;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Calendar date used as the default "recent data" cutoff.
pub const DEFAULT_DATE_FLOOR: NaiveDate = match NaiveDate::from_ymd_opt(2020, 1, 1) {
    Some(d) => d,
    None => panic!("2020-01-01 is a valid date"),
};

/// Which slice of the time axis a lookup should return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DateView {
    /// Every observation the upstream returned.
    #[default]
    All,
    /// Only observations on or after the configured date floor.
    SinceFloor,
}

impl DateView {
    /// Map the user-facing "restrict to recent data" toggle onto a view.
    #[must_use]
    pub const fn from_restrict_flag(restrict: bool) -> Self {
        if restrict { Self::SinceFloor } else { Self::All }
    }
}

/// How long cached ESG charts live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum CacheLifetime {
    /// Entries live as long as the connector stack that owns the cache; never evicted by age.
    #[default]
    Process,
    /// Entries expire once they are older than the given duration.
    Session(Duration),
}

/// Configuration for the ticker-keyed ESG chart cache.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Lifetime policy stated at construction.
    pub lifetime: CacheLifetime,
    /// Optional upper bound on the number of cached tickers. `None` means unbounded.
    pub max_entries: Option<u64>,
}

impl CacheConfig {
    /// Unbounded cache kept for the whole process.
    #[must_use]
    pub const fn process() -> Self {
        Self {
            lifetime: CacheLifetime::Process,
            max_entries: None,
        }
    }

    /// Cache whose entries expire after `ttl`.
    #[must_use]
    pub const fn session(ttl: Duration) -> Self {
        Self {
            lifetime: CacheLifetime::Session(ttl),
            max_entries: None,
        }
    }
}

/// Global configuration for the `EsgScope` pipeline and the Yahoo connector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EsgConfig {
    /// Fixed URL prefix; the ticker is appended verbatim to form the request URL.
    pub endpoint_prefix: String,
    /// Tickers used by the sequential sample batch.
    pub sample_tickers: Vec<String>,
    /// Cutoff date applied when a lookup asks for [`DateView::SinceFloor`].
    pub date_floor: NaiveDate,
    /// Upper bound for a single upstream call.
    pub provider_timeout: Duration,
    /// User agent sent with upstream requests.
    pub user_agent: String,
}

impl EsgConfig {
    /// Default upstream endpoint prefix.
    pub const DEFAULT_ENDPOINT_PREFIX: &'static str =
        "https://query2.finance.yahoo.com/v1/finance/esgChart?symbol=";

    /// Default browser-like user agent; the upstream host rejects bare clients.
    pub const DEFAULT_USER_AGENT: &'static str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";

    /// The date floor as a UTC instant at midnight.
    #[must_use]
    pub fn date_floor_instant(&self) -> DateTime<Utc> {
        self.date_floor.and_time(NaiveTime::MIN).and_utc()
    }
}

impl Default for EsgConfig {
    fn default() -> Self {
        Self {
            endpoint_prefix: Self::DEFAULT_ENDPOINT_PREFIX.to_string(),
            sample_tickers: ["AAPL", "MSFT", "TSLA", "AMZN", "GOOGL"]
                .into_iter()
                .map(str::to_string)
                .collect(),
            date_floor: DEFAULT_DATE_FLOOR,
            provider_timeout: Duration::from_secs(10),
            user_agent: Self::DEFAULT_USER_AGENT.to_string(),
        }
    }
}
