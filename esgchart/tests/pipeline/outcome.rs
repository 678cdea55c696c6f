use std::sync::Arc;

use esgchart::{DateView, EsgError, EsgScope, Outcome};
use esgchart_mock::MockConnector as FixtureConnector;

use crate::helpers::{AAPL, INVALID, MockConnector};

#[tokio::test]
async fn no_coverage_is_a_hard_stop_with_user_message() {
    let c = MockConnector::builder().returns_not_found().build();
    let scope = EsgScope::builder()
        .with_connector(c.clone())
        .build()
        .unwrap();

    let outcome = scope.render_outcome(INVALID, DateView::All).await;

    assert!(outcome.report().is_none(), "no partial tables");
    assert_eq!(outcome.message(), Some("Data doesn't exist for ZZZZINVALID"));
    assert!(outcome.error().is_some_and(EsgError::is_not_found));
    assert_eq!(c.calls(), 1);
}

#[tokio::test]
async fn transport_failure_surfaces_identically_but_is_distinguishable() {
    let scope = EsgScope::builder()
        .with_connector(Arc::new(FixtureConnector::new()))
        .build()
        .unwrap();

    let failed = scope.render_outcome("FAIL", DateView::All).await;
    let missing = scope.render_outcome(INVALID, DateView::All).await;

    assert_eq!(failed.message(), Some("Data doesn't exist for FAIL"));
    assert!(failed.error().is_some_and(EsgError::is_transport));
    assert!(missing.error().is_some_and(EsgError::is_not_found));
}

#[tokio::test]
async fn empty_input_never_reaches_the_connector() {
    let c = MockConnector::builder().returns_not_found().build();
    let scope = EsgScope::builder()
        .with_connector(c.clone())
        .build()
        .unwrap();

    let outcome = scope.render_outcome("", DateView::All).await;

    assert!(matches!(outcome.error(), Some(EsgError::InvalidArg(_))));
    assert_eq!(c.calls(), 0);
}

#[tokio::test]
async fn covered_ticker_renders_report() {
    let scope = EsgScope::builder()
        .with_connector(Arc::new(FixtureConnector::new()))
        .build()
        .unwrap();

    match scope.render_outcome(AAPL, DateView::SinceFloor).await {
        Outcome::Report(r) => {
            assert_eq!(r.ticker.as_str(), AAPL);
            assert_eq!(r.peer_group, "Technology Hardware");
        }
        other => panic!("expected report, got {other:?}"),
    }
}
