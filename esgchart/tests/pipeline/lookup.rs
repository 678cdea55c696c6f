use std::sync::Arc;

use chrono::NaiveDate;
use esgchart::{DateView, EsgScope, ScoreDimension, SeriesType};
use esgchart_mock::MockConnector as FixtureConnector;

use crate::helpers::{AAPL, MockConnector, chart, dt, pt, ticker};

#[tokio::test]
async fn single_company_point_melts_into_four_rows() {
    let c = MockConnector::builder()
        .returns_chart_ok(chart(
            AAPL,
            "Technology Hardware",
            vec![pt(dt(2020, 1, 1), Some(20.0), Some(5.0), Some(8.0), Some(7.0))],
            vec![],
        ))
        .build();
    let scope = EsgScope::builder().with_connector(c).build().unwrap();

    let report = scope.lookup(&ticker(AAPL), DateView::All).await.unwrap();

    assert_eq!(report.long.len(), 4);
    assert!(report.long.iter().all(|r| r.series_type == SeriesType::Company));
    assert!(report.long.iter().all(|r| r.timestamp == dt(2020, 1, 1)));
    assert!(report.peer.is_empty());
}

#[tokio::test]
async fn null_esg_score_drops_only_that_dimension() {
    let c = MockConnector::builder()
        .returns_chart_ok(chart(
            AAPL,
            "Technology Hardware",
            vec![pt(dt(2020, 1, 1), None, Some(5.0), Some(8.0), Some(7.0))],
            vec![],
        ))
        .build();
    let scope = EsgScope::builder().with_connector(c).build().unwrap();

    let report = scope.lookup(&ticker(AAPL), DateView::All).await.unwrap();

    assert_eq!(report.long.len(), 3);
    assert!(
        report
            .long
            .iter()
            .all(|r| r.score_dimension != ScoreDimension::Esg)
    );
    // the normalized table keeps the null
    assert_eq!(report.company.len(), 1);
    assert_eq!(report.company.rows()[0].esg_score, None);
}

#[tokio::test]
async fn since_floor_filters_every_table() {
    let c = MockConnector::builder()
        .returns_chart_ok(chart(
            AAPL,
            "Technology Hardware",
            vec![
                pt(dt(2019, 12, 31), Some(21.0), Some(5.0), Some(8.0), Some(7.0)),
                pt(dt(2020, 1, 2), Some(20.0), Some(5.0), Some(8.0), Some(7.0)),
            ],
            vec![pt(dt(2019, 12, 31), Some(22.0), None, None, None)],
        ))
        .build();
    let scope = EsgScope::builder().with_connector(c).build().unwrap();

    let report = scope
        .lookup(&ticker(AAPL), DateView::SinceFloor)
        .await
        .unwrap();

    assert_eq!(report.company.len(), 1);
    assert_eq!(report.company.rows()[0].timestamp, dt(2020, 1, 2));
    assert!(report.peer.is_empty());
    assert_eq!(report.long.len(), 4);
    assert!(report.long.iter().all(|r| r.timestamp == dt(2020, 1, 2)));
    assert_eq!(report.view, DateView::SinceFloor);
}

#[tokio::test]
async fn custom_date_floor_is_honoured() {
    let scope = EsgScope::builder()
        .with_connector(Arc::new(FixtureConnector::new()))
        .date_floor(NaiveDate::from_ymd_opt(2020, 3, 1).unwrap())
        .build()
        .unwrap();

    let report = scope
        .lookup(&ticker(AAPL), DateView::SinceFloor)
        .await
        .unwrap();
    assert_eq!(report.company.len(), 1);
    assert_eq!(report.peer.len(), 1);
    assert_eq!(report.long.len(), 8);
}

#[tokio::test]
async fn fixture_lookup_all_and_since_floor() {
    let scope = EsgScope::builder()
        .with_connector(Arc::new(FixtureConnector::new()))
        .build()
        .unwrap();

    let all = scope.lookup(&ticker(AAPL), DateView::All).await.unwrap();
    assert_eq!(all.company.len(), 5);
    assert_eq!(all.peer.len(), 5);
    assert_eq!(all.long.len(), 40);

    let recent = scope
        .lookup(&ticker(AAPL), DateView::SinceFloor)
        .await
        .unwrap();
    assert_eq!(recent.company.len(), 3);
    assert_eq!(recent.long.len(), 24);

    let tsla = scope.lookup(&ticker("TSLA"), DateView::All).await.unwrap();
    assert_eq!(tsla.long.len(), 39, "one null esg score is dropped");
}

#[tokio::test]
async fn headings_name_ticker_and_peer_group() {
    let scope = EsgScope::builder()
        .with_connector(Arc::new(FixtureConnector::new()))
        .build()
        .unwrap();
    let report = scope.lookup(&ticker("MSFT"), DateView::All).await.unwrap();
    assert_eq!(report.company_heading(), "ESG Ratings for MSFT");
    assert_eq!(report.peer_heading(), "ESG Ratings for Software & Services");
}

#[tokio::test]
async fn chart_series_per_dimension_from_report() {
    let scope = EsgScope::builder()
        .with_connector(Arc::new(FixtureConnector::new()))
        .build()
        .unwrap();
    let report = scope.lookup(&ticker("TSLA"), DateView::All).await.unwrap();

    let esg = report.long.chart_series(ScoreDimension::Esg);
    assert_eq!(esg.len(), 2);
    assert_eq!(esg[0].series_type, SeriesType::Company);
    assert_eq!(esg[0].points.len(), 4);
    assert_eq!(esg[1].series_type, SeriesType::PeerGroup);
    assert_eq!(esg[1].points.len(), 5);

    let social = report.long.chart_series(ScoreDimension::Social);
    assert_eq!(social[0].points.len(), 5);
}
