//! Client for the Gemini `generateContent` endpoint.
//!
//! One call per topic: the request asks for a fixed number of cards through a
//! response schema, and the reply's embedded JSON text is parsed into
//! [`Flashcard`]s. There is no retry and no caching between calls.

pub mod request;
pub mod response;

use std::time::Duration;

use async_trait::async_trait;
use request::GenerationRequest;
use reqwest::Url;
use response::{
    extract_payload_text,
    parse_cards,
};

use crate::{
    config::AppSettings,
    core::{
        generation::FlashcardSource,
        http,
        Flashcard,
        FlashcardError,
    },
};

#[async_trait]
pub trait Transport: Send + Sync {
    /// POSTs `body` as JSON to `url` with `query` appended, and returns the
    /// body of a successful response.
    async fn post_json(
        &self,
        url: Url,
        query: &[(&str, &str)],
        body: &serde_json::Value,
    ) -> Result<String, FlashcardError>;
}

pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Option<Duration>) -> Result<Self, FlashcardError> {
        Ok(Self { client: http::http_client(timeout)? })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn post_json(
        &self,
        url: Url,
        query: &[(&str, &str)],
        body: &serde_json::Value,
    ) -> Result<String, FlashcardError> {
        http::post_json(&self.client, url, query, body).await
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub api_base_url: String,
    pub request_timeout: Option<Duration>,
}

impl From<&AppSettings> for GeminiConfig {
    fn from(settings: &AppSettings) -> Self {
        Self {
            api_key: settings.api_key.clone(),
            model: settings.model.clone(),
            api_base_url: settings.api_base_url.clone(),
            request_timeout: settings.request_timeout_secs.map(Duration::from_secs),
        }
    }
}

impl GeminiConfig {
    /// `<base>/models/<model>:generateContent`, with the model encoded as a
    /// single path segment.
    pub fn endpoint(&self) -> Result<Url, FlashcardError> {
        let mut url = Url::parse(self.api_base_url.trim()).map_err(|e| {
            FlashcardError::Config(format!("Invalid API base URL '{}': {e}", self.api_base_url))
        })?;

        url.path_segments_mut()
            .map_err(|_| {
                FlashcardError::Config(format!(
                    "API base URL '{}' cannot take a path",
                    self.api_base_url
                ))
            })?
            .pop_if_empty()
            .push("models")
            .push(&format!("{}:generateContent", self.model.trim()));

        Ok(url)
    }
}

pub struct GeminiClient<T = ReqwestTransport> {
    config: GeminiConfig,
    transport: T,
}

impl GeminiClient<ReqwestTransport> {
    pub fn from_config(config: GeminiConfig) -> Result<Self, FlashcardError> {
        let transport = ReqwestTransport::new(config.request_timeout)?;
        Ok(Self { config, transport })
    }
}

impl<T: Transport> GeminiClient<T> {
    pub fn with_transport(config: GeminiConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn generate_flashcards(&self, topic: &str) -> Result<Vec<Flashcard>, FlashcardError> {
        if topic.trim().is_empty() {
            return Ok(Vec::new());
        }

        let body = serde_json::to_value(GenerationRequest::for_topic(topic))?;
        let endpoint = self.config.endpoint()?;
        tracing::debug!(%endpoint, "requesting flashcards");

        let query = [("key", self.config.api_key.trim())];
        let reply = self.transport.post_json(endpoint, &query, &body).await?;

        let payload = extract_payload_text(&reply)?;
        parse_cards(&payload)
    }
}

#[async_trait]
impl<T: Transport> FlashcardSource for GeminiClient<T> {
    async fn generate(&self, topic: &str) -> Result<Vec<Flashcard>, FlashcardError> {
        self.generate_flashcards(topic).await
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Mutex;

    use super::*;

    pub(crate) struct RecordedCall {
        pub url: String,
        pub query: Vec<(String, String)>,
        pub body: serde_json::Value,
    }

    /// Replays a canned reply and records every URL it was asked to hit.
    pub(crate) struct RecordingTransport {
        reply: Result<String, String>,
        pub calls: Mutex<Vec<RecordedCall>>,
    }

    impl RecordingTransport {
        pub(crate) fn replying(body: String) -> Self {
            Self { reply: Ok(body), calls: Mutex::new(Vec::new()) }
        }

        pub(crate) fn failing(detail: &str) -> Self {
            Self { reply: Err(detail.to_string()), calls: Mutex::new(Vec::new()) }
        }

        pub(crate) fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl Transport for RecordingTransport {
        async fn post_json(
            &self,
            url: Url,
            query: &[(&str, &str)],
            body: &serde_json::Value,
        ) -> Result<String, FlashcardError> {
            self.calls.lock().unwrap().push(RecordedCall {
                url: url.to_string(),
                query: query.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
                body: body.clone(),
            });
            self.reply.clone().map_err(FlashcardError::Transport)
        }
    }

    pub(crate) fn test_config() -> GeminiConfig {
        GeminiConfig {
            api_key: "test-key".to_string(),
            model: "gemini-test".to_string(),
            api_base_url: "https://example.invalid/v1beta/".to_string(),
            request_timeout: None,
        }
    }

    pub(crate) fn gemini_reply(payload: &serde_json::Value) -> String {
        serde_json::json!({
            "candidates": [{ "content": { "parts": [{ "text": payload.to_string() }] } }]
        })
        .to_string()
    }

    pub(crate) fn five_cards() -> serde_json::Value {
        let cards: Vec<_> = (1..=5)
            .map(|i| serde_json::json!({ "front": format!("Q{i}"), "back": format!("A{i}") }))
            .collect();
        serde_json::json!({ "cards": cards })
    }

    #[tokio::test]
    async fn blank_topic_skips_the_network() {
        let client = GeminiClient::with_transport(
            test_config(),
            RecordingTransport::replying(gemini_reply(&five_cards())),
        );

        for topic in ["", "   ", "\t\n"] {
            assert!(client.generate_flashcards(topic).await.unwrap().is_empty());
        }
        assert_eq!(client.transport.call_count(), 0);
    }

    #[tokio::test]
    async fn returns_cards_in_received_order() {
        let client = GeminiClient::with_transport(
            test_config(),
            RecordingTransport::replying(gemini_reply(&five_cards())),
        );

        let cards = client.generate_flashcards("Quantum Computing").await.unwrap();
        let fronts: Vec<&str> = cards.iter().map(Flashcard::front).collect();
        assert_eq!(fronts, ["Q1", "Q2", "Q3", "Q4", "Q5"]);
        assert_eq!(cards[4].back(), "A5");
    }

    #[tokio::test]
    async fn card_count_is_passed_through() {
        let payload = serde_json::json!({ "cards": [
            { "front": "a", "back": "1" },
            { "front": "b", "back": "2" },
            { "front": "c", "back": "3" },
            { "front": "d", "back": "4" },
            { "front": "e", "back": "5" },
            { "front": "f", "back": "6" },
            { "front": "g", "back": "7" }
        ]});
        let client = GeminiClient::with_transport(
            test_config(),
            RecordingTransport::replying(gemini_reply(&payload)),
        );

        assert_eq!(client.generate_flashcards("Letters").await.unwrap().len(), 7);
    }

    #[tokio::test]
    async fn posts_to_model_endpoint_with_key() {
        let client = GeminiClient::with_transport(
            test_config(),
            RecordingTransport::replying(gemini_reply(&five_cards())),
        );
        client.generate_flashcards("Rust lifetimes").await.unwrap();

        let calls = client.transport.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        let call = &calls[0];
        assert_eq!(call.url, "https://example.invalid/v1beta/models/gemini-test:generateContent");
        assert_eq!(call.query, vec![("key".to_string(), "test-key".to_string())]);
        assert_eq!(
            call.body["contents"][0]["parts"][0]["text"],
            "Generate 5 flashcards about: Rust lifetimes"
        );
    }

    #[tokio::test]
    async fn missing_text_part_is_malformed() {
        let client = GeminiClient::with_transport(
            test_config(),
            RecordingTransport::replying(
                r#"{"candidates":[{"content":{"parts":[]}}]}"#.to_string(),
            ),
        );

        let err = client.generate_flashcards("History").await.unwrap_err();
        assert!(matches!(err, FlashcardError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn failed_status_is_a_transport_error() {
        let client = GeminiClient::with_transport(
            test_config(),
            RecordingTransport::failing("HTTP error 500 Internal Server Error: boom"),
        );

        match client.generate_flashcards("History").await {
            Err(FlashcardError::Transport(detail)) => assert!(detail.contains("500")),
            other => panic!("expected transport error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_card_array_is_not_an_error() {
        let client = GeminiClient::with_transport(
            test_config(),
            RecordingTransport::replying(gemini_reply(&serde_json::json!({ "cards": [] }))),
        );

        assert!(client.generate_flashcards("Nothing").await.unwrap().is_empty());
    }

    #[test]
    fn config_from_settings() {
        let settings = AppSettings {
            api_key: "abc".to_string(),
            request_timeout_secs: Some(30),
            ..AppSettings::default()
        };
        let config = GeminiConfig::from(&settings);
        assert_eq!(config.api_key, "abc");
        assert_eq!(config.request_timeout, Some(Duration::from_secs(30)));
        assert_eq!(
            config.endpoint().unwrap().as_str(),
            concat!(
                "https://generativelanguage.googleapis.com/v1beta/models/",
                "gemini-2.5-flash-preview-09-2025:generateContent"
            )
        );
    }

    #[test]
    fn model_is_encoded_as_one_path_segment() {
        let config = GeminiConfig { model: "my model/v2?x".to_string(), ..test_config() };
        assert_eq!(
            config.endpoint().unwrap().as_str(),
            "https://example.invalid/v1beta/models/my%20model%2Fv2%3Fx:generateContent"
        );
    }

    #[test]
    fn invalid_base_url_is_a_config_error() {
        let config = GeminiConfig { api_base_url: "not a url".to_string(), ..test_config() };
        assert!(matches!(config.endpoint(), Err(FlashcardError::Config(_))));
    }

    #[tokio::test]
    async fn key_is_passed_as_query_value_unmodified() {
        let config = GeminiConfig { api_key: " a&b#c ".to_string(), ..test_config() };
        let client = GeminiClient::with_transport(
            config,
            RecordingTransport::replying(gemini_reply(&five_cards())),
        );
        client.generate_flashcards("Keys").await.unwrap();

        let calls = client.transport().calls.lock().unwrap();
        assert_eq!(calls[0].query, vec![("key".to_string(), "a&b#c".to_string())]);
        assert!(!calls[0].url.contains("key"));
    }
}
