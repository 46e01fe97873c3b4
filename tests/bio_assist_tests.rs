// Bio assist tests against a mocked Gemini API

use freelancmusic::services::bio_assist::{
    BioOutcome, GeminiClient, GENERATION_FAILED_MESSAGE, MISSING_KEY_MESSAGE,
};
use mockito::Matcher;
use serde_json::json;
use std::time::Duration;

const MODEL: &str = "gemini-test";
const PATH: &str = "/models/gemini-test:generateContent";

fn create_client(base_url: String, api_key: Option<&str>) -> GeminiClient {
    GeminiClient::new(
        base_url,
        api_key.map(str::to_string),
        MODEL.to_string(),
        Duration::from_secs(5),
    )
    .unwrap()
}

#[tokio::test]
async fn test_generated_text_is_trimmed() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", PATH)
        .match_header("x-goog-api-key", "test-key")
        .match_body(Matcher::Regex("samba, cavaquinho".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "candidates": [{
                    "content": {
                        "role": "model",
                        "parts": [{ "text": "\n  Sou cavaquinista " }, { "text": "de samba.  \n" }]
                    }
                }]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = create_client(server.url(), Some("test-key"));
    let outcome = client.generate("samba, cavaquinho").await;

    mock.assert_async().await;
    assert_eq!(outcome, BioOutcome::Generated("Sou cavaquinista de samba.".to_string()));
}

#[tokio::test]
async fn test_api_error_returns_failure_message() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", PATH)
        .with_status(500)
        .with_body("internal")
        .create_async()
        .await;

    let client = create_client(server.url(), Some("test-key"));
    let bio = client.generate_bio("rock").await;

    mock.assert_async().await;
    assert_eq!(bio, GENERATION_FAILED_MESSAGE);
}

#[tokio::test]
async fn test_empty_candidates_return_failure_message() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"candidates": []}"#)
        .create_async()
        .await;

    let client = create_client(server.url(), Some("test-key"));
    let outcome = client.generate("rock").await;

    assert_eq!(outcome, BioOutcome::Failed(GENERATION_FAILED_MESSAGE.to_string()));
}

#[tokio::test]
async fn test_missing_key_makes_no_request() {
    let mut server = mockito::Server::new_async().await;
    let mock = server.mock("POST", PATH).expect(0).create_async().await;

    let client = create_client(server.url(), None);
    let outcome = client.generate("jazz").await;

    mock.assert_async().await;
    assert_eq!(outcome, BioOutcome::Unavailable(MISSING_KEY_MESSAGE.to_string()));
    assert!(!outcome.is_generated());
}
