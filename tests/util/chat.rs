use httpmock::Method::POST;
use serde_json::json;
use tradevolt_rs::stock::NewsItem;
use tradevolt_rs::util::{self, ChatRequest};

use crate::common;

#[tokio::test]
async fn chat_posts_context_and_returns_answer() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/ai/chat").json_body(json!({
            "symbol": "AAPL",
            "question": "배당 전망은?",
            "financialData": "PER 30.28",
            "historyData": "",
            "newsData": [{
                "title": "Apple raises dividend",
                "url": "https://example.com/div",
                "publishedDate": null,
                "source": "Reuters",
                "summary": ""
            }]
        }));
        then.status(200).json_body(json!({"response": "배당은 꾸준히 증가하고 있습니다."}));
    });
    let client = common::client_for(&server);

    let req = ChatRequest::new("AAPL", "배당 전망은?")
        .financial_data("PER 30.28")
        .news(vec![NewsItem {
            title: "Apple raises dividend".into(),
            url: "https://example.com/div".into(),
            published_date: None,
            source: "Reuters".into(),
            summary: String::new(),
        }]);
    let answer = util::chat(&client, &req).await.unwrap();

    mock.assert();
    assert_eq!(answer, "배당은 꾸준히 증가하고 있습니다.");
}

#[tokio::test]
async fn upstream_model_failure_keeps_its_status() {
    let server = common::setup_server();
    server.mock(|when, then| {
        when.method(POST).path("/api/ai/chat");
        then.status(503).json_body(json!({"detail": "AI 서비스를 사용할 수 없습니다."}));
    });
    let client = common::client_for(&server);

    let err = util::chat(&client, &ChatRequest::new("AAPL", "?")).await.unwrap_err();

    assert_eq!(err.status(), Some(503));
    assert_eq!(err.message(), "AI 서비스를 사용할 수 없습니다.");
}
