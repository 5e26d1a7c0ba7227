//! Integration tests for the HTTP client
//!
//! Each test serves one canned response from a local socket and inspects the raw request

use kelvin::api::{ApiError, HttpApi, WellnessApi};
use kelvin::config::Config;
use kelvin::transcript::{CHAT_ERROR_REPLY, ChatTranscript};
use kelvin::types::ChatMessage;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

fn local_api(base_url: &str) -> HttpApi {
    let client = reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("client");
    HttpApi::with_client(&Config::with_api_url(base_url), client)
}

fn header_end(request: &[u8]) -> Option<usize> {
    request.windows(4).position(|window| window == b"\r\n\r\n")
}

fn content_length(headers: &str) -> usize {
    headers
        .lines()
        .find_map(|line| line.to_ascii_lowercase().strip_prefix("content-length:").map(str::to_string))
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(0)
}

/// Accept one connection, answer it, and return the raw request text.
async fn serve_once(status_line: &'static str, body: &'static str) -> (HttpApi, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
            if let Some(end) = header_end(&request) {
                let headers = String::from_utf8_lossy(&request[..end]).into_owned();
                if request.len() >= end + 4 + content_length(&headers) {
                    break;
                }
            }
        }

        let response = format!(
            "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
        String::from_utf8_lossy(&request).into_owned()
    });

    (local_api(&format!("http://{addr}/")), handle)
}

#[tokio::test]
async fn test_today_quest_success() {
    let (api, server) = serve_once("200 OK", r#"{"id":"123","text":"Stretch your arms and back for 30 seconds."}"#).await;

    let quest = api.today_quest().await.expect("quest");

    assert_eq!(quest.text, "Stretch your arms and back for 30 seconds.");
    let request = server.await.unwrap();
    assert!(request.starts_with("GET /api/quest/today HTTP/1.1"));
}

#[tokio::test]
async fn test_today_quest_error_status() {
    let (api, server) = serve_once("500 Internal Server Error", r#"{"detail":"down"}"#).await;

    let err = api.today_quest().await.expect_err("status error");

    assert!(matches!(err, ApiError::Status { status: 500, ref body } if body.contains("down")));
    server.await.unwrap();
}

#[tokio::test]
async fn test_chat_posts_message_and_history() {
    let (api, server) = serve_once("200 OK", r#"{"reply":"That sounds hard. I'm listening."}"#).await;
    let history = vec![ChatMessage::user("hi"), ChatMessage::model("Hello!")];

    let reply = api.chat("long week", &history).await.expect("reply");

    assert_eq!(reply, "That sounds hard. I'm listening.");
    let request = server.await.unwrap();
    assert!(request.starts_with("POST /api/chat HTTP/1.1"));
    let body_start = header_end(request.as_bytes()).unwrap() + 4;
    let body: serde_json::Value = serde_json::from_str(&request[body_start..]).unwrap();
    assert_eq!(body["message"], "long week");
    assert_eq!(body["chat_history"][0]["role"], "user");
    assert_eq!(body["chat_history"][1]["parts"][0], "Hello!");
}

#[tokio::test]
async fn test_chat_bad_body_is_decode_error() {
    let (api, server) = serve_once("200 OK", r#"{"message":"wrong shape"}"#).await;

    let err = api.chat("hello", &[]).await.expect_err("decode error");

    assert!(matches!(err, ApiError::Decode(_)));
    server.await.unwrap();
}

#[tokio::test]
async fn test_transcript_over_http_failure() {
    let (api, server) = serve_once("429 Too Many Requests", r#"{"error":"rate limited"}"#).await;
    let mut transcript = ChatTranscript::new();

    assert!(transcript.send(&api, "hello?").await);

    assert_eq!(transcript.messages().len(), 2);
    assert_eq!(transcript.messages()[1].text, CHAT_ERROR_REPLY);
    assert!(!transcript.is_loading());
    server.await.unwrap();
}

#[tokio::test]
async fn test_unreachable_server_is_request_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let api = local_api(&format!("http://{addr}"));

    let err = api.today_quest().await.expect_err("connection refused");

    assert!(matches!(err, ApiError::Request(_)));
}
