use esgchart::{DateView, EsgScope};
use proptest::prelude::*;

use crate::helpers::{MockConnector, chart, dt, pt, ticker};

fn score() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![Just(None), (0.0f64..60.0).prop_map(Some)]
}

fn points() -> impl Strategy<Value = Vec<esgchart::ScorePoint>> {
    prop::collection::vec(
        (0i64..1_500, score(), score(), score(), score()),
        0..12,
    )
    .prop_map(|mut raw| {
        let base = dt(2019, 6, 1);
        raw.sort_by_key(|r| r.0);
        raw.into_iter()
            .map(|(d, e, g, en, s)| pt(base + chrono::Duration::days(d), e, g, en, s))
            .collect()
    })
}

proptest! {
    #[test]
    fn lookup_tables_respect_pipeline_bounds(company in points(), peer in points()) {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .unwrap();
        let c = MockConnector::builder()
            .returns_chart_ok(chart("PROP", "Peers", company.clone(), peer.clone()))
            .build();
        let scope = EsgScope::builder().with_connector(c).build().unwrap();
        let t = ticker("PROP");

        let all = rt.block_on(scope.lookup(&t, DateView::All)).unwrap();
        prop_assert_eq!(all.company.len(), company.len());
        prop_assert_eq!(all.peer.len(), peer.len());
        prop_assert!(all.long.len() <= 4 * (company.len() + peer.len()));

        let recent = rt.block_on(scope.lookup(&t, DateView::SinceFloor)).unwrap();
        let cutoff = scope.config().date_floor_instant();
        prop_assert!(recent.long.iter().all(|r| r.timestamp >= cutoff));
        prop_assert_eq!(recent.long.since(cutoff), recent.long.clone());
        prop_assert_eq!(recent.company, all.company.since(cutoff));
    }
}
