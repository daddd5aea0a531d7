//! HTTP round trips against a local mock server for each provider

use mockito::Matcher;
use serde_json::json;
use tcl2skill::llm::client::LlmClient;
use tcl2skill::llm::client_impl::{AnthropicClient, GeminiClient, OpenAIClient};

#[tokio::test]
async fn test_gemini_success() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/models/gemini-test:generateContent")
        .match_header("x-goog-api-key", "secret")
        .match_body(Matcher::PartialJson(json!({
            "systemInstruction": {"parts": [{"text": "sys"}]},
            "contents": [{"role": "user", "parts": [{"text": "prompt"}]}]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"candidates": [{"content": {"parts": [{"text": "hiRedraw()"}]}}]}"#)
        .create_async()
        .await;

    let client = GeminiClient::with_base_url(
        "secret".to_string(),
        "gemini-test".to_string(),
        server.url(),
        1024,
        Some(10),
    )
    .unwrap();

    let text = client.complete("sys", "prompt").await.unwrap();
    assert_eq!(text.as_deref(), Some("hiRedraw()"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_gemini_no_candidates_is_none() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/models/gemini-test:generateContent")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#)
        .create_async()
        .await;

    let client = GeminiClient::with_base_url(
        "secret".to_string(),
        "gemini-test".to_string(),
        server.url(),
        1024,
        None,
    )
    .unwrap();

    assert!(client.complete("sys", "prompt").await.unwrap().is_none());
}

#[tokio::test]
async fn test_gemini_auth_failure_is_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/models/gemini-test:generateContent")
        .with_status(401)
        .with_body(r#"{"error": {"message": "API key not valid"}}"#)
        .create_async()
        .await;

    let client = GeminiClient::with_base_url(
        "bad".to_string(),
        "gemini-test".to_string(),
        server.url(),
        1024,
        None,
    )
    .unwrap();

    let err = client.complete("sys", "prompt").await.unwrap_err();
    assert!(err.to_string().contains("401"));
    assert!(err.to_string().contains("API key not valid"));
}

#[tokio::test]
async fn test_gemini_malformed_body_is_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/models/gemini-test:generateContent")
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let client = GeminiClient::with_base_url(
        "k".to_string(),
        "gemini-test".to_string(),
        server.url(),
        1024,
        None,
    )
    .unwrap();

    let err = client.complete("sys", "prompt").await.unwrap_err();
    assert!(err.to_string().contains("Failed to parse Gemini API response"));
}

#[tokio::test]
async fn test_anthropic_success() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/messages")
        .match_header("x-api-key", "secret")
        .match_header("anthropic-version", "2023-06-01")
        .match_body(Matcher::PartialJson(json!({
            "system": "sys",
            "messages": [{"role": "user", "content": "prompt"}]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"content": [{"type": "text", "text": "dbSave(cv)"}]}"#)
        .create_async()
        .await;

    let client = AnthropicClient::with_base_url(
        "secret".to_string(),
        "claude-test".to_string(),
        server.url(),
        4096,
        None,
    )
    .unwrap();

    let text = client.complete("sys", "prompt").await.unwrap();
    assert_eq!(text.as_deref(), Some("dbSave(cv)"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_openai_success_with_bearer() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_header("authorization", "Bearer secret")
        .match_body(Matcher::PartialJson(json!({
            "model": "gpt-4o",
            "messages": [
                {"role": "system", "content": "sys"},
                {"role": "user", "content": "prompt"}
            ]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"choices": [{"message": {"role": "assistant", "content": "dbClose(cv)"}}]}"#)
        .create_async()
        .await;

    let client = OpenAIClient::with_base_url(
        "secret".to_string(),
        "gpt-4o".to_string(),
        server.url(),
        4096,
        None,
    )
    .unwrap();

    let text = client.complete("sys", "prompt").await.unwrap();
    assert_eq!(text.as_deref(), Some("dbClose(cv)"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_openai_compatible_without_key_sends_no_auth() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"choices": []}"#)
        .create_async()
        .await;

    let client = OpenAIClient::with_base_url(
        String::new(),
        "llama3".to_string(),
        server.url(),
        16384,
        None,
    )
    .unwrap();

    assert!(client.complete("sys", "prompt").await.unwrap().is_none());
    mock.assert_async().await;
}
