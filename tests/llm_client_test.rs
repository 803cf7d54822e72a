//! Integration tests for the chat-completion client against a mock server

use clinical_summary::adapters::llm::{ChatCompletionClient, GenerationRequest, TextGenerator};
use clinical_summary::config::{secret_string, LlmConfig};
use clinical_summary::domain::LlmError;
use mockito::{Matcher, Server};
use serde_json::json;

fn client_for(server: &Server) -> ChatCompletionClient {
    let config = LlmConfig {
        base_url: server.url(),
        api_key: Some(secret_string("sk-test".to_string())),
        model: "gpt-4o-mini".to_string(),
        timeout_seconds: 5,
        ..Default::default()
    };
    ChatCompletionClient::new(&config).unwrap()
}

#[tokio::test]
async fn test_generate_sends_messages_and_returns_content() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_header("authorization", "Bearer sk-test")
        .match_body(Matcher::PartialJson(json!({
            "model": "gpt-4o-mini",
            "max_tokens": 500,
            "messages": [
                {"role": "system", "content": "Be brief."},
                {"role": "user", "content": "Summarize."}
            ]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "id": "chatcmpl-1",
                "model": "gpt-4o-mini",
                "choices": [{
                    "index": 0,
                    "message": {"role": "assistant", "content": "Patient is stable."},
                    "finish_reason": "stop"
                }]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let request = GenerationRequest::new("Summarize.")
        .with_system_prompt("Be brief.")
        .with_max_tokens(500);
    let text = client_for(&server).generate(request).await.unwrap();

    assert_eq!(text, "Patient is stable.");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_generate_uses_configured_defaults() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_body(Matcher::PartialJson(json!({
            "max_tokens": 2000,
            "messages": [{"role": "user", "content": "hi"}]
        })))
        .with_status(200)
        .with_body(json!({"choices": [{"message": {"content": "ok"}}]}).to_string())
        .create_async()
        .await;

    let text = client_for(&server)
        .generate(GenerationRequest::new("hi"))
        .await
        .unwrap();

    assert_eq!(text, "ok");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_generate_api_error_message() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(429)
        .with_body(json!({"error": {"message": "Rate limit reached", "type": "requests"}}).to_string())
        .create_async()
        .await;

    let err = client_for(&server)
        .generate(GenerationRequest::new("hi"))
        .await
        .unwrap_err();

    match err {
        LlmError::Api { status, message } => {
            assert_eq!(status, 429);
            assert_eq!(message, "Rate limit reached");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_generate_without_choices() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_body(json!({"choices": []}).to_string())
        .create_async()
        .await;

    let err = client_for(&server)
        .generate(GenerationRequest::new("hi"))
        .await
        .unwrap_err();
    assert!(matches!(err, LlmError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_generate_connection_refused() {
    let config = LlmConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        timeout_seconds: 2,
        ..Default::default()
    };
    let client = ChatCompletionClient::new(&config).unwrap();

    let err = client.generate(GenerationRequest::new("hi")).await.unwrap_err();
    assert!(matches!(err, LlmError::ConnectionFailed(_)));
}
