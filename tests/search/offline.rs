use httpmock::Method::GET;
use serde_json::json;
use tradevolt_rs::search::{self, SearchMarket};

use crate::common;

#[tokio::test]
async fn short_queries_never_reach_the_network() {
    let server = common::setup_server();
    let any = server.mock(|when, then| {
        when.method(GET).path("/api/search-stocks");
        then.status(200).json_body(json!([{"code": "005930", "name": "삼성전자"}]));
    });
    let client = common::client_for(&server);

    for q in ["", "   ", "삼", " a ", "\t7\n"] {
        let items = search::search_stocks(&client, q, SearchMarket::Kor)
            .await
            .unwrap();
        assert!(items.is_empty(), "query {q:?} should short-circuit");
    }
    assert!(search::search_korean(&client, "a", 10).await.unwrap().is_empty());
    assert!(
        search::search_overseas(&client, " ", &[SearchMarket::Nasdaq], 10)
            .await
            .unwrap()
            .is_empty()
    );

    any.assert_hits(0);
}

#[tokio::test]
async fn two_characters_are_enough() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/search-stocks")
            .query_param("query", "삼성")
            .query_param("market", "KOSPI");
        then.status(200).json_body(json!([
            {"code": "005930", "name": "삼성전자"},
            {"code": "006400", "name": "삼성SDI"}
        ]));
    });
    let client = common::client_for(&server);

    let items = search::search_stocks(&client, "  삼성 ", SearchMarket::Kospi)
        .await
        .unwrap();

    mock.assert();
    assert_eq!(items.len(), 2);
    assert_eq!(items[1].code, "006400");
    assert_eq!(items[0].market, None);
}

#[tokio::test]
async fn overseas_search_sends_market_list_and_limit() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/stocks/overseas")
            .query_param("query", "apple")
            .query_param("markets", "NASDAQ,NYSE")
            .query_param("limit", "5");
        then.status(200)
            .json_body(json!([{"code": "AAPL", "name": "Apple Inc.", "market": "NASDAQ"}]));
    });
    let client = common::client_for(&server);

    let items = search::search_overseas(
        &client,
        "apple",
        &[SearchMarket::Nasdaq, SearchMarket::Nyse],
        5,
    )
    .await
    .unwrap();

    mock.assert();
    assert_eq!(items[0].market.as_deref(), Some("NASDAQ"));
}

#[tokio::test]
async fn korean_search_sends_limit() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/stocks/korean")
            .query_param("query", "005930")
            .query_param("limit", "20");
        then.status(200).json_body(json!([{"code": "005930", "name": "삼성전자"}]));
    });
    let client = common::client_for(&server);

    let items = search::search_korean(&client, "005930", 20).await.unwrap();

    mock.assert();
    assert_eq!(items[0].name, "삼성전자");
}

#[tokio::test]
async fn stock_info_finds_a_listing_by_code() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/stocks/info/005930");
        then.status(200)
            .json_body(json!({"code": "005930", "name": "삼성전자", "market": "KOSPI"}));
    });
    let client = common::client_for(&server);

    let item = search::stock_info(&client, "005930").await.unwrap().unwrap();

    mock.assert();
    assert_eq!(item.name, "삼성전자");
    assert_eq!(item.market.as_deref(), Some("KOSPI"));
}

#[tokio::test]
async fn unknown_stock_code_is_none() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/stocks/info/999999");
        then.status(404)
            .json_body(json!({"detail": "종목코드 '999999'를 찾을 수 없습니다."}));
    });
    let client = common::client_for(&server);

    let item = search::stock_info(&client, "999999").await.unwrap();

    mock.assert();
    assert_eq!(item, None);
}

#[tokio::test]
async fn stock_info_server_failure_is_an_error() {
    let server = common::setup_server();
    server.mock(|when, then| {
        when.method(GET).path("/api/stocks/info/005930");
        then.status(500).json_body(json!({"detail": "boom"}));
    });
    let client = common::client_for(&server);

    let err = search::stock_info(&client, "005930").await.unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert_eq!(err.message(), "boom");
}

#[tokio::test]
async fn market_stocks_sends_market_in_path_and_limit() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/stocks/market/KOSDAQ")
            .query_param("limit", "2");
        then.status(200).json_body(json!([
            {"code": "247540", "name": "에코프로비엠", "market": "KOSDAQ"},
            {"code": "086520", "name": "에코프로", "market": "KOSDAQ"}
        ]));
    });
    let client = common::client_for(&server);

    let items = search::market_stocks(&client, SearchMarket::Kosdaq, 2)
        .await
        .unwrap();

    mock.assert();
    let codes: Vec<&str> = items.iter().map(|i| i.code.as_str()).collect();
    assert_eq!(codes, ["247540", "086520"]);
}

#[tokio::test]
async fn market_stocks_failure_carries_server_detail() {
    let server = common::setup_server();
    server.mock(|when, then| {
        when.method(GET).path("/api/stocks/market/NYSE");
        then.status(500)
            .json_body(json!({"detail": "'NYSE' 시장 종목 조회 중 오류가 발생했습니다."}));
    });
    let client = common::client_for(&server);

    let err = search::market_stocks(&client, SearchMarket::Nyse, 100)
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert!(err.message().contains("NYSE"));
}
