use super::client::OpenAiHttpClient;
use super::types::{ChatCompletionRequest, ChatMessage};
use crate::ai::ChatService;
use crate::{Error, Result};
use async_trait::async_trait;

pub struct OpenAiChatClient {
    http: OpenAiHttpClient,
    model: String,
    max_tokens: u32,
}

impl OpenAiChatClient {
    pub fn new(
        api_key: String,
        base_url: String,
        model: String,
        max_tokens: u32,
        client: reqwest::Client,
    ) -> Self {
        Self {
            http: OpenAiHttpClient::new(api_key, base_url, client),
            model,
            max_tokens,
        }
    }
}

#[async_trait]
impl ChatService for OpenAiChatClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String> {
        tracing::debug!("Sending chat completion request (model: {})", self.model);

        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::system(system), ChatMessage::user(user)],
            max_tokens: self.max_tokens,
        };

        let response = self.http.chat_completion(request).await?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| Error::AiProvider("No response from OpenAI chat API".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer, model: &str) -> OpenAiChatClient {
        OpenAiChatClient::new(
            "test-key".to_string(),
            server.uri(),
            model.to_string(),
            500,
            reqwest::Client::new(),
        )
    }

    #[tokio::test]
    async fn test_complete_parses_response() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("Authorization", "Bearer test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{
                    "message": {
                        "role": "assistant",
                        "content": "You're invited!"
                    },
                    "finish_reason": "stop"
                }]
            })))
            .mount(&server)
            .await;

        let reply = client_for(&server, "gpt-4")
            .complete("persona", "write it")
            .await
            .unwrap();
        assert_eq!(reply, "You're invited!");
    }

    #[tokio::test]
    async fn test_complete_sends_messages_model_and_cap() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(body_partial_json(serde_json::json!({
                "model": "custom-model",
                "max_tokens": 500,
                "messages": [
                    { "role": "system", "content": "persona" },
                    { "role": "user", "content": "write it" }
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{
                    "message": { "role": "assistant", "content": "ok" },
                    "finish_reason": "stop"
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server, "custom-model")
            .complete("persona", "write it")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_api_error_returns_ai_provider_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
            .mount(&server)
            .await;

        let err = client_for(&server, "gpt-4")
            .complete("persona", "write it")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::AiProvider(_)));
    }

    #[tokio::test]
    async fn test_empty_choices_is_an_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "choices": [] })),
            )
            .mount(&server)
            .await;

        let err = client_for(&server, "gpt-4")
            .complete("persona", "write it")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::AiProvider(_)));
    }
}
