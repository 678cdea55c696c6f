use chrono::{DateTime, Utc};
use esgchart_core::{EsgChart, ScorePoint, Series, Ticker};

// 2019-11-01, 2019-12-01, 2020-01-01, 2020-02-01, 2020-03-01 (UTC)
const MONTHS: [i64; 5] = [
    1_572_566_400,
    1_575_158_400,
    1_577_836_800,
    1_580_515_200,
    1_583_020_800,
];

fn at(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap_or_default()
}

fn point(secs: i64, esg: Option<f64>, g: f64, e: f64, s: f64) -> ScorePoint {
    ScorePoint {
        timestamp: at(secs),
        esg_score: esg,
        governance_score: Some(g),
        environment_score: Some(e),
        social_score: Some(s),
    }
}

fn chart(ticker: &str, peer_group: &str, company: Vec<ScorePoint>, peer: Vec<ScorePoint>) -> Option<EsgChart> {
    Some(EsgChart {
        ticker: Ticker::new(ticker).ok()?,
        peer_group: peer_group.to_string(),
        company: Series::company(company),
        peer: Series::peer_group(peer_group, peer),
    })
}

fn ramp(base: f64, step: f64, g: f64, e: f64, s: f64) -> Vec<ScorePoint> {
    MONTHS
        .iter()
        .zip(0u32..)
        .map(|(secs, i)| {
            let drift = step * f64::from(i);
            point(*secs, Some(base + drift), g + drift / 4.0, e + drift / 4.0, s + drift / 2.0)
        })
        .collect()
}

/// Deterministic ESG chart fixture for a ticker, if one exists.
pub fn by_ticker(t: &str) -> Option<EsgChart> {
    match t {
        "AAPL" => chart(
            "AAPL",
            "Technology Hardware",
            ramp(16.6, 0.1, 9.2, 0.6, 6.8),
            ramp(18.1, 0.05, 8.0, 2.3, 7.4),
        ),
        "MSFT" => chart(
            "MSFT",
            "Software & Services",
            ramp(15.0, -0.1, 7.5, 1.2, 6.3),
            ramp(17.9, 0.0, 8.1, 2.0, 7.8),
        ),
        "TSLA" => {
            let mut company = ramp(31.3, 0.2, 10.1, 3.3, 17.9);
            if let Some(first) = company.first_mut() {
                first.esg_score = None;
            }
            chart("TSLA", "Automobiles", company, ramp(28.4, 0.1, 8.8, 6.0, 13.6))
        }
        _ => None,
    }
}
