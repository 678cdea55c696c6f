use std::time::Duration;

use esgchart::{CacheConfig, ConnectorBuilder, DateView, EsgError, EsgScope};

use crate::helpers::{AAPL, MockConnector, chart, ticker};

#[test]
fn build_without_connectors_is_invalid() {
    let err = EsgScope::builder().build().err().expect("build should fail");
    assert!(matches!(err, EsgError::InvalidArg(_)));
}

#[tokio::test]
async fn connector_without_capability_is_unsupported() {
    let c = MockConnector::builder().without_esg().build();
    let scope = EsgScope::builder().with_connector(c).build().unwrap();
    let err = scope.fetch(&ticker(AAPL)).await.unwrap_err();
    assert!(matches!(err, EsgError::Unsupported { .. }));
}

#[tokio::test]
async fn falls_through_not_found_to_next_connector() {
    let missing = MockConnector::builder()
        .name("missing")
        .returns_not_found()
        .build();
    let ok = MockConnector::builder()
        .name("ok")
        .returns_chart_ok(chart(AAPL, "Peers", vec![], vec![]))
        .build();
    let scope = EsgScope::builder()
        .with_connector(missing.clone())
        .with_connector(ok.clone())
        .build()
        .unwrap();

    let got = scope.fetch(&ticker(AAPL)).await.unwrap();
    assert_eq!(got.peer_group, "Peers");
    assert_eq!((missing.calls(), ok.calls()), (1, 1));
}

#[tokio::test]
async fn transport_failure_wins_over_not_found() {
    let broken = MockConnector::builder()
        .name("broken")
        .returns_error(EsgError::connector("broken", "connection reset"))
        .build();
    let missing = MockConnector::builder()
        .name("missing")
        .returns_not_found()
        .build();
    let scope = EsgScope::builder()
        .with_connector(broken)
        .with_connector(missing)
        .build()
        .unwrap();

    let err = scope.fetch(&ticker(AAPL)).await.unwrap_err();
    assert!(err.is_transport());
}

#[tokio::test]
async fn all_not_found_is_not_found() {
    let a = MockConnector::builder().name("a").returns_not_found().build();
    let b = MockConnector::builder().name("b").returns_not_found().build();
    let scope = EsgScope::builder()
        .with_connector(a)
        .with_connector(b)
        .build()
        .unwrap();

    let err = scope.fetch(&ticker("ZZZZINVALID")).await.unwrap_err();
    assert_eq!(err, EsgError::not_found("esg chart for ZZZZINVALID"));
}

#[tokio::test(start_paused = true)]
async fn slow_connector_times_out_as_transport_error() {
    let slow = MockConnector::builder()
        .name("slow")
        .delay_ms(5_000)
        .returns_chart_ok(chart(AAPL, "Peers", vec![], vec![]))
        .build();
    let scope = EsgScope::builder()
        .with_connector(slow)
        .provider_timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    let err = scope.fetch(&ticker(AAPL)).await.unwrap_err();
    match err {
        EsgError::Connector { connector, msg } => {
            assert_eq!(connector, "slow");
            assert!(msg.contains("timed out"), "msg = {msg}");
        }
        other => panic!("expected timeout connector error, got {other:?}"),
    }
}

#[tokio::test]
async fn cached_connector_fetches_each_ticker_once() {
    let raw = MockConnector::builder()
        .returns_chart_ok(chart(AAPL, "Peers", vec![], vec![]))
        .build();
    let cached = ConnectorBuilder::new(raw.clone())
        .with_cache(&CacheConfig::process())
        .build()
        .unwrap();
    let scope = EsgScope::builder().with_connector(cached).build().unwrap();

    scope.lookup(&ticker(AAPL), DateView::All).await.unwrap();
    scope
        .lookup(&ticker(AAPL), DateView::SinceFloor)
        .await
        .unwrap();
    assert_eq!(raw.calls(), 1);
}
