use super::types::{ChatCompletionRequest, ChatCompletionResponse};
use crate::{Error, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub struct OpenAiHttpClient {
    pub(crate) client: Client,
    pub(crate) api_key: String,
    pub(crate) base_url: String,
}

impl OpenAiHttpClient {
    pub fn new(api_key: String, base_url: String, client: Client) -> Self {
        Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn post<Req: Serialize, Resp: DeserializeOwned>(
        &self,
        path: &str,
        request: &Req,
    ) -> Result<Resp> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send request to OpenAI: {}", e);
                e
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            tracing::error!("OpenAI API error (status {}): {}", status, error_text);
            return Err(Error::AiProvider(format!(
                "OpenAI API error (status {}): {}",
                status, error_text
            )));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse OpenAI response: {}\nBody: {}", e, body);
            Error::AiProvider(format!("Failed to parse OpenAI response: {}", e))
        })
    }

    pub async fn chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        self.post("/v1/chat/completions", &request).await
    }
}
