//! Gemini クライアントのHTTPテスト
//!
//! ローカルのスタブサーバに1回だけ応答させて、リクエスト内容とエラー変換を検証

use appliance_compare::compare::{run_comparison, SilentObserver};
use appliance_compare::config::Config;
use appliance_compare::error::AppError;
use appliance_compare::gemini::{GeminiClient, LanguageModel};
use appliance_compare_common::input::collect_products;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

/// 1リクエストだけ受け付けて固定レスポンスを返す
async fn serve_once(status_line: &'static str, body: String) -> (Config, JoinHandle<String>) {
    // ローカル通信がプロキシ経由にならないようにする
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind failed");
    let addr = listener.local_addr().expect("no local addr");

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept failed");
        let request = read_request(&mut socket).await;

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.expect("write failed");
        socket.shutdown().await.ok();
        request
    });

    let config = Config {
        model: "test-model".into(),
        api_base_url: format!("http://{}/v1beta", addr),
        timeout_seconds: Some(10),
        ..Config::default()
    };

    (config, handle)
}

/// ヘッダとContent-Length分のボディを読み切る
async fn read_request(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    loop {
        let n = socket.read(&mut chunk).await.expect("read failed");
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let headers = String::from_utf8_lossy(&buf[..pos]).to_lowercase();
            let content_length = headers
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= pos + 4 + content_length {
                break;
            }
        }
    }

    String::from_utf8_lossy(&buf).to_string()
}

fn candidate_body(text: &str) -> String {
    serde_json::json!({
        "candidates": [
            {
                "content": { "parts": [ { "text": text } ], "role": "model" },
                "finishReason": "STOP"
            }
        ]
    })
    .to_string()
}

#[tokio::test]
async fn test_generate_returns_reply_text() {
    let (config, server) = serve_once("200 OK", candidate_body("消費電力: 900\n年間電気代: 12000")).await;
    let client = GeminiClient::new("test-key", &config).unwrap();

    let reply = client.generate("家電の種類は「エアコン」").await.unwrap();
    assert_eq!(reply, "消費電力: 900\n年間電気代: 12000");

    let request = server.await.unwrap();
    assert!(request.starts_with("POST /v1beta/models/test-model:generateContent"));
    assert!(request.to_lowercase().contains("x-goog-api-key: test-key"));
    assert!(request.contains("家電の種類は「エアコン」"));
}

#[tokio::test]
async fn test_error_status_is_api_call_error() {
    let body = r#"{"error":{"code":429,"message":"Resource has been exhausted","status":"RESOURCE_EXHAUSTED"}}"#;
    let (config, server) = serve_once("429 Too Many Requests", body.to_string()).await;
    let client = GeminiClient::new("test-key", &config).unwrap();

    match client.generate("prompt").await {
        Err(AppError::ApiCall(msg)) => {
            assert!(msg.contains("429"));
            assert!(msg.contains("RESOURCE_EXHAUSTED"));
        }
        other => panic!("Expected ApiCall, got {:?}", other),
    }
    server.await.unwrap();
}

#[tokio::test]
async fn test_blocked_prompt_is_parse_error() {
    let body = r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#;
    let (config, server) = serve_once("200 OK", body.to_string()).await;
    let client = GeminiClient::new("test-key", &config).unwrap();

    assert!(matches!(client.generate("prompt").await, Err(AppError::ApiParse(_))));
    server.await.unwrap();
}

#[tokio::test]
async fn test_comparison_through_http_client() {
    let (config, server) = serve_once("200 OK", candidate_body("**消費電力：** 1,200\n**年間電気代：** 18,000")).await;
    let client = GeminiClient::new("test-key", &config).unwrap();
    let products = collect_products(&[("エアコン", "霧ヶ峰")]).unwrap();

    let outcome = run_comparison(&client, &products, &mut SilentObserver).await;

    assert_eq!(outcome.parsed_count(), 1);
    assert_eq!(outcome.table.rows()[0].power_watts, 1200);
    assert_eq!(outcome.table.rows()[0].annual_cost_yen, 18000);
    server.await.unwrap();
}

#[tokio::test]
async fn test_missing_key_is_item_scoped() {
    let client = GeminiClient::new("", &Config::default()).unwrap();
    let products = collect_products(&[("エアコン", "A\nB")]).unwrap();

    let outcome = run_comparison(&client, &products, &mut SilentObserver).await;

    assert_eq!(outcome.items.len(), 2);
    assert_eq!(outcome.parsed_count(), 0);
    assert!(outcome
        .items
        .iter()
        .all(|i| i.result.reply().is_none() && i.result.metrics().is_none()));
}
