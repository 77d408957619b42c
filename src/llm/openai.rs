use std::sync::Arc;

use futures::future::BoxFuture;
use reqwest::Client;
use tracing::{debug, error};

use crate::config::AppConfig;

use super::{
    CompletionClient,
    error::{LlmError, LlmResult},
    models::{ChatCompletionRequest, ChatCompletionResponse, CompletionChoice},
};

const CHAT_COMPLETIONS_PATH: &str = "chat/completions";

/// Completion client talking to the OpenAI REST API (or any compatible endpoint).
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    base_url: Arc<str>,
    api_key: Option<Arc<str>>,
}

impl OpenAiClient {
    /// Build a client for `base_url`; requests are sent without credentials when
    /// `api_key` is `None`.
    pub fn new(base_url: &str, api_key: Option<&str>) -> LlmResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|source| LlmError::ClientBuilder { source })?;

        Ok(Self {
            client,
            base_url: Arc::<str>::from(base_url.trim_end_matches('/')),
            api_key: api_key.map(Arc::<str>::from),
        })
    }

    /// Build a client from the application configuration.
    pub fn from_config(config: &AppConfig) -> LlmResult<Self> {
        Self::new(&config.openai_api_base, config.openai_api_key.as_deref())
    }

    fn completions_url(&self) -> String {
        format!("{}/{}", self.base_url, CHAT_COMPLETIONS_PATH)
    }

    async fn create(&self, request: &ChatCompletionRequest) -> LlmResult<Vec<CompletionChoice>> {
        let url = self.completions_url();
        let mut builder = self.client.post(&url).json(request);
        if let Some(ref key) = self.api_key {
            builder = builder.bearer_auth(key.as_ref());
        }

        let response = builder
            .send()
            .await
            .map_err(|source| LlmError::RequestSend {
                url: url.clone(),
                source,
            })?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|source| LlmError::RequestSend {
                url: url.clone(),
                source,
            })?;
        debug!(%status, body = %String::from_utf8_lossy(&body), "completion response");

        // The payload decides the outcome, not the status code: an error object
        // is reported whatever the status.
        let decoded: ChatCompletionResponse = serde_json::from_slice(&body)
            .map_err(|source| LlmError::DecodeResponse { url, source })?;

        if let Some(api_error) = decoded.error {
            error!(
                %status,
                kind = api_error.kind.as_deref().unwrap_or("unknown"),
                code = ?api_error.code,
                message = api_error.message.as_deref().unwrap_or(""),
                "completion API returned an error"
            );
            // A missing message is reported as an empty string.
            return Err(LlmError::Api {
                message: api_error.message.unwrap_or_default(),
            });
        }

        Ok(decoded.choices.unwrap_or_default())
    }
}

impl CompletionClient for OpenAiClient {
    fn chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> BoxFuture<'static, LlmResult<Vec<CompletionChoice>>> {
        let client = self.clone();
        Box::pin(async move { client.create(&request).await })
    }
}
