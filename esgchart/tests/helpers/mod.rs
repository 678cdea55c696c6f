// Re-export helpers so tests can `use helpers::*;`
pub mod mock_connector;

pub use mock_connector::MockConnector;

use esgchart_core::{EsgChart, ScorePoint, Series, Ticker};

/// Common symbol constants used across tests.
pub const AAPL: &str = "AAPL";
pub const MSFT: &str = "MSFT";
pub const INVALID: &str = "ZZZZINVALID";

/// Construct a UTC `DateTime` at midnight for readability in tests.
pub fn dt(y: i32, m: u32, d: u32) -> chrono::DateTime<chrono::Utc> {
    chrono::NaiveDate::from_ymd_opt(y, m, d)
        .expect("invalid date")
        .and_hms_opt(0, 0, 0)
        .expect("invalid time components")
        .and_utc()
}

/// Score point with every dimension populated except where `None` is given.
pub fn pt(
    ts: chrono::DateTime<chrono::Utc>,
    esg: Option<f64>,
    governance: Option<f64>,
    environment: Option<f64>,
    social: Option<f64>,
) -> ScorePoint {
    ScorePoint {
        timestamp: ts,
        esg_score: esg,
        governance_score: governance,
        environment_score: environment,
        social_score: social,
    }
}

pub fn ticker(s: &str) -> Ticker {
    Ticker::new(s).expect("valid test ticker")
}

/// Assemble a chart from company and peer points.
pub fn chart(
    symbol: &str,
    peer_group: &str,
    company: Vec<ScorePoint>,
    peer: Vec<ScorePoint>,
) -> EsgChart {
    EsgChart {
        ticker: ticker(symbol),
        peer_group: peer_group.to_string(),
        company: Series::company(company),
        peer: Series::peer_group(peer_group, peer),
    }
}
