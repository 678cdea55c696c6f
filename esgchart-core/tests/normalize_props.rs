use chrono::{DateTime, Utc};
use esgchart_core::{NormalizedTable, ScorePoint, Series, SeriesType, normalize};
use proptest::prelude::*;

fn arb_ts() -> impl Strategy<Value = DateTime<Utc>> {
    (-2_000_000_000i64..2_000_000_000i64).prop_map(|s| DateTime::from_timestamp(s, 0).unwrap())
}

fn arb_score() -> impl Strategy<Value = Option<f64>> {
    proptest::option::of(0.0f64..100.0)
}

fn arb_point() -> impl Strategy<Value = ScorePoint> {
    (arb_ts(), arb_score(), arb_score(), arb_score(), arb_score()).prop_map(
        |(timestamp, esg_score, governance_score, environment_score, social_score)| ScorePoint {
            timestamp,
            esg_score,
            governance_score,
            environment_score,
            social_score,
        },
    )
}

proptest! {
    #[test]
    fn normalize_preserves_row_count_and_order(points in proptest::collection::vec(arb_point(), 0..200)) {
        let series = Series::company(points.clone());
        let table = normalize(&series);

        prop_assert_eq!(table.len(), points.len());
        let got: Vec<_> = table.iter().map(|r| r.timestamp).collect();
        let want: Vec<_> = points.iter().map(|p| p.timestamp).collect();
        prop_assert_eq!(got, want);
    }

    #[test]
    fn normalize_keeps_nulls_and_stamps_series_type(points in proptest::collection::vec(arb_point(), 0..100)) {
        let series = Series::peer_group("Technology Hardware", points.clone());
        let table = normalize(&series);

        for (row, p) in table.iter().zip(points.iter()) {
            prop_assert_eq!(row.series_type, SeriesType::PeerGroup);
            prop_assert_eq!(row.esg_score, p.esg_score);
            prop_assert_eq!(row.governance_score, p.governance_score);
            prop_assert_eq!(row.environment_score, p.environment_score);
            prop_assert_eq!(row.social_score, p.social_score);
        }
    }
}

#[test]
fn empty_series_yields_empty_table_with_full_column_set() {
    let table = normalize(&Series::company(vec![]));
    assert!(table.is_empty());
    assert_eq!(
        table.columns(),
        &[
            "timestamp",
            "series_type",
            "esgScore",
            "governanceScore",
            "environmentScore",
            "socialScore"
        ]
    );
    assert_eq!(table, NormalizedTable::default());
}

#[test]
fn unsorted_source_order_is_kept() {
    let late = DateTime::from_timestamp(1_600_000_000, 0).unwrap();
    let early = DateTime::from_timestamp(1_500_000_000, 0).unwrap();
    let table = normalize(&Series::company(vec![
        ScorePoint::empty(late),
        ScorePoint::empty(early),
    ]));
    let ts: Vec<_> = table.iter().map(|r| r.timestamp).collect();
    assert_eq!(ts, vec![late, early]);
}
