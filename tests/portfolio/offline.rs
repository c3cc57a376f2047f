use httpmock::Method::{GET, POST};
use serde_json::json;
use tradevolt_rs::portfolio::{self, Market, TradeConfirmation, TradeSide, TradeTicket};

use crate::common;

#[tokio::test]
async fn missing_holding_is_none() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/portfolio/035720");
        then.status(404)
            .json_body(json!({"detail": "보유하지 않은 종목입니다."}));
    });
    let client = common::client_for(&server);

    let holding = portfolio::holding(&client, "035720").await.unwrap();

    mock.assert();
    assert!(holding.is_none());
}

#[tokio::test]
async fn holding_lookup_propagates_other_failures() {
    let server = common::setup_server();
    server.mock(|when, then| {
        when.method(GET).path("/api/portfolio/005930");
        then.status(500).body("oops");
    });
    let client = common::client_for(&server);

    let err = portfolio::holding(&client, "005930").await.unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert!(!err.is_connectivity());
}

#[tokio::test]
async fn existing_holding_is_some() {
    let server = common::setup_server();
    let row = common::fixture_json("portfolio")["portfolio"][0].clone();
    server.mock(|when, then| {
        when.method(GET).path("/api/portfolio/005930");
        then.status(200).json_body(row.clone());
    });
    let client = common::client_for(&server);

    let holding = portfolio::holding(&client, "005930").await.unwrap().unwrap();

    assert_eq!(holding.stock_name, "삼성전자");
    assert_eq!(holding.market, Market::Kor);
    assert!((holding.valuation - 730_000.0).abs() < 1e-9);
}

#[tokio::test]
async fn portfolio_keeps_server_totals_and_derives_tab_subtotals() {
    let server = common::setup_server();
    server.mock(|when, then| {
        when.method(GET).path("/api/portfolio");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("portfolio"));
    });
    let client = common::client_for(&server);

    let p = portfolio::portfolio(&client).await.unwrap();

    assert_eq!(p.holdings.len(), 2);
    assert!((p.total_assets - 1_480_000.0).abs() < 1e-9);
    assert!((p.total_days_gain - 3_000.0).abs() < 1e-9);

    let kor = p.subtotal(Market::Kor);
    assert!((kor.valuation - 730_000.0).abs() < 1e-9);
    assert!((kor.profit_loss - 30_000.0).abs() < 1e-9);
    let ovs = p.subtotal(Market::Overseas);
    assert!((ovs.days_gain + 2_000.0).abs() < 1e-9);
    assert_eq!(p.find("AAPL").map(|h| h.market), Some(Market::Overseas));
}

#[tokio::test]
async fn live_price_uses_market_and_code_path() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/stocks/price/OVERSEAS/AAPL");
        then.status(200).json_body(json!({"price": 185.64}));
    });
    let client = common::client_for(&server);

    let price = portfolio::price(&client, Market::Overseas, "AAPL").await.unwrap();

    mock.assert();
    assert!((price - 185.64).abs() < 1e-9);
}

#[tokio::test]
async fn batch_prices_keep_input_order_and_fail_together() {
    let server = common::setup_server();
    server.mock(|when, then| {
        when.method(GET).path("/api/stocks/price/KOR/005930");
        then.status(200).json_body(json!({"price": 73000}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/stocks/price/KOR/000660");
        then.status(200).json_body(json!({"current_price": 131000}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/stocks/price/KOR/999999");
        then.status(404).json_body(json!({"detail": "시세 없음"}));
    });
    let client = common::client_for(&server);

    let prices = portfolio::prices(&client, Market::Kor, &["000660", "005930"])
        .await
        .unwrap();
    assert_eq!(prices, [131_000.0, 73_000.0]);

    let err = portfolio::prices(&client, Market::Kor, &["005930", "999999"])
        .await
        .unwrap_err();
    assert_eq!(err.message(), "시세 없음");
}

#[tokio::test]
async fn trade_posts_ticket_and_tolerates_empty_answer() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/portfolio/trade").json_body(json!({
            "stock_code": "005930",
            "stock_name": "삼성전자",
            "market": "KOR",
            "transaction_type": "SELL",
            "quantity": 3.0,
            "price": 73000.0,
            "transaction_date": "2024-03-04"
        }));
        then.status(201);
    });
    let client = common::client_for(&server);

    let ticket = TradeTicket {
        stock_code: "005930".into(),
        stock_name: "삼성전자".into(),
        market: Market::Kor,
        side: TradeSide::Sell,
        quantity: 3.0,
        price: 73_000.0,
        date: common::date("2024-03-04"),
    };
    let estimate = ticket.estimate();
    let confirmation = portfolio::trade(&client, &ticket).await.unwrap();

    mock.assert();
    assert_eq!(confirmation, TradeConfirmation::default());
    assert!((estimate.gross - 219_000.0).abs() < 1e-9);
    assert!(estimate.net < estimate.gross);
}

#[tokio::test]
async fn rejected_trade_surfaces_server_message() {
    let server = common::setup_server();
    server.mock(|when, then| {
        when.method(POST).path("/api/portfolio/trade");
        then.status(400)
            .json_body(json!({"detail": "보유 수량보다 많이 매도할 수 없습니다."}));
    });
    let client = common::client_for(&server);

    let ticket = TradeTicket {
        stock_code: "005930".into(),
        stock_name: "삼성전자".into(),
        market: Market::Kor,
        side: TradeSide::Sell,
        quantity: 1_000.0,
        price: 73_000.0,
        date: common::date("2024-03-04"),
    };
    let err = portfolio::trade(&client, &ticket).await.unwrap_err();

    assert_eq!(err.status(), Some(400));
    assert_eq!(err.message(), "보유 수량보다 많이 매도할 수 없습니다.");
}
