use std::sync::Arc;

use esgchart::{DateView, EsgScope};
use esgchart_mock::MockConnector as FixtureConnector;

use crate::helpers::{INVALID, MockConnector, chart};

#[tokio::test]
async fn one_entry_per_sample_in_configured_order() {
    let scope = EsgScope::builder()
        .with_connector(Arc::new(FixtureConnector::new()))
        .sample_tickers(["AAPL", INVALID, "FAIL", "MSFT", ""])
        .build()
        .unwrap();

    let batch = scope.lookup_samples(DateView::All).await;

    let order: Vec<&str> = batch.entries.iter().map(|e| e.ticker.as_str()).collect();
    assert_eq!(order, vec!["AAPL", INVALID, "FAIL", "MSFT", ""]);
    assert_eq!(batch.successes().count(), 2);

    let failures: Vec<&str> = batch.failures().map(|(t, _)| t).collect();
    assert_eq!(failures, vec![INVALID, "FAIL", ""]);
    assert!(batch.entries[1].result.as_ref().unwrap_err().is_not_found());
    assert!(batch.entries[2].result.as_ref().unwrap_err().is_transport());
}

#[tokio::test]
async fn default_samples_cover_five_tickers() {
    let scope = EsgScope::builder()
        .with_connector(Arc::new(FixtureConnector::new()))
        .build()
        .unwrap();

    let batch = scope.lookup_samples(DateView::SinceFloor).await;
    assert_eq!(batch.len(), 5);
    // AMZN and GOOGL have no fixtures
    assert_eq!(batch.successes().count(), 3);
}

#[tokio::test]
async fn each_sample_is_fetched_exactly_once() {
    let c = MockConnector::builder()
        .with_chart_fn(|t| Ok(chart(t.as_str(), "Peers", vec![], vec![])))
        .build();
    let scope = EsgScope::builder()
        .with_connector(c.clone())
        .sample_tickers(["A", "B", "C"])
        .build()
        .unwrap();

    let batch = scope.lookup_samples(DateView::All).await;
    assert_eq!(batch.successes().count(), 3);
    assert_eq!(c.calls(), 3);
}

#[tokio::test]
async fn empty_sample_list_yields_empty_batch() {
    let scope = EsgScope::builder()
        .with_connector(Arc::new(FixtureConnector::new()))
        .sample_tickers(Vec::<String>::new())
        .build()
        .unwrap();
    assert!(scope.lookup_samples(DateView::All).await.is_empty());
}
