use httpmock::Method::POST;
use serde_json::json;
use tradevolt_rs::analysis::{
    self, Country, FluctuationRequest, PerformanceRequest, SeriesPoint,
};

use crate::common;

#[tokio::test]
async fn performance_sends_iso_dates_and_omits_unknown_country() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/performance/analysis").json_body(json!({
            "market": "KOSPI",
            "start_date": "2024-01-01",
            "end_date": "2024-06-30",
            "top_n": 3
        }));
        then.status(200).json_body(json!({
            "top_performers": [
                {"ticker": "042700", "name": "한미반도체", "performance": 152.3}
            ],
            "bottom_performers": [
                {"ticker": "247540", "name": "에코프로비엠", "performance": -41.2}
            ]
        }));
    });
    let client = common::client_for(&server);

    let req = PerformanceRequest::new("KOSPI", common::date("2024-01-01"), common::date("2024-06-30"))
        .top_n(3);
    let report = analysis::performance(&client, &req).await.unwrap();

    mock.assert();
    assert_eq!(report.top_performers[0].name, "한미반도체");
    assert!(report.bottom_performers[0].performance < 0.0);
}

#[tokio::test]
async fn comparison_points_can_be_aligned() {
    let server = common::setup_server();
    server.mock(|when, then| {
        when.method(POST).path("/api/stock/compare").json_body(json!({
            "tickers": ["AAPL", "005930.KS"],
            "start_date": "2024-01-01",
            "end_date": "2024-01-05"
        }));
        then.status(200).json_body(json!({
            "data": [
                {"date": "2024-01-02", "AAPL": 0.0},
                {"date": "2024-01-03", "AAPL": -0.75, "005930.KS": 0.0},
                {"date": "2024-01-04", "AAPL": -2.01}
            ],
            "series": [
                {"dataKey": "AAPL", "name": "AAPL"},
                {"dataKey": "005930.KS", "name": "삼성전자"}
            ]
        }));
    });
    let client = common::client_for(&server);

    let cmp = analysis::compare(
        &client,
        &["AAPL".to_string(), "005930.KS".to_string()],
        common::date("2024-01-01"),
        common::date("2024-01-05"),
    )
    .await
    .unwrap();

    assert_eq!(cmp.series[1].name, "삼성전자");
    assert!(!cmp.data[0].values.contains_key("005930.KS"));

    let aligned = cmp.aligned();
    assert_eq!(aligned.len(), 3);
    assert!(aligned[0].values.contains_key("005930.KS"));
    assert_eq!(aligned[0].value("005930.KS"), None);
    assert_eq!(aligned[2].value("005930.KS"), Some(0.0));
    assert_eq!(aligned[2].value("AAPL"), Some(-2.01));
}

#[test]
fn align_series_carries_last_value_forward() {
    let points: Vec<SeriesPoint> = serde_json::from_value(json!([
        {"date": "d1", "a": 1.0, "b": null},
        {"date": "d2", "a": null},
        {"date": "d3", "b": 5.0, "extra": 9.0},
        {"date": "d4"}
    ]))
    .unwrap();

    let out = analysis::align_series(&points, &["a", "b"]);

    let dates: Vec<&str> = out.iter().map(|p| p.date.as_str()).collect();
    assert_eq!(dates, ["d1", "d2", "d3", "d4"]);
    assert_eq!(out[0].value("b"), None);
    assert_eq!(out[1].value("a"), Some(1.0));
    assert_eq!(out[2].value("a"), Some(1.0));
    assert_eq!(out[2].value("extra"), Some(9.0));
    assert_eq!(out[3].value("a"), Some(1.0));
    assert_eq!(out[3].value("b"), Some(5.0));
}

#[test]
fn series_point_rejects_non_numeric_values() {
    let res: Result<SeriesPoint, _> =
        serde_json::from_value(json!({"date": "2024-01-02", "AAPL": "1.5"}));
    assert!(res.is_err());
}

#[tokio::test]
async fn fluctuation_unwraps_found_stocks() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/stocks/fluctuation-analysis")
            .json_body(json!({
                "country": "KR",
                "market": "KOSDAQ",
                "start_date": "2023-01-01",
                "end_date": "2023-12-31",
                "decline_period": 10,
                "decline_rate": -30.0,
                "rebound_period": 20,
                "rebound_rate": 20.0
            }));
        then.status(200).json_body(json!({
            "found_stocks": [{
                "ticker": "086520",
                "name": "에코프로",
                "occurrence_count": 2,
                "recent_trough_date": "2023-11-01",
                "recent_trough_price": 520000.0,
                "recent_rebound_date": "2023-11-20",
                "recent_rebound_performance": 31.5,
                "events": [
                    {
                        "ticker": "086520",
                        "name": "에코프로",
                        "trough_date": "2023-11-01",
                        "trough_price": 520000.0,
                        "rebound_date": "2023-11-20",
                        "rebound_price": 683800.0,
                        "rebound_performance": 31.5
                    }
                ]
            }]
        }));
    });
    let client = common::client_for(&server);

    let req = FluctuationRequest::new(
        Country::Korea,
        "KOSDAQ",
        common::date("2023-01-01"),
        common::date("2023-12-31"),
    )
    .decline(10, -30.0);
    let found = analysis::fluctuation(&client, &req).await.unwrap();

    mock.assert();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].occurrence_count, 2);
    assert!(found[0].events.iter().all(|e| e.is_well_ordered()));
}

#[test]
fn fluctuation_event_order_check() {
    let event: analysis::FluctuationEvent = serde_json::from_value(json!({
        "ticker": "A",
        "name": "A",
        "trough_date": "2023-05-10",
        "trough_price": 1.0,
        "rebound_date": "2023-05-10",
        "rebound_price": 1.3,
        "rebound_performance": 30.0
    }))
    .unwrap();
    assert!(!event.is_well_ordered());
}
