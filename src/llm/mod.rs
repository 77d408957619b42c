//! Chat-completion collaborator used to generate story text.

mod error;
/// Request and response payloads of the completion API.
pub mod models;
mod openai;

use futures::future::BoxFuture;

pub use self::error::{LlmError, LlmResult};
pub use self::openai::OpenAiClient;
use self::models::{ChatCompletionRequest, CompletionChoice};

/// Abstraction over a chat-completion API.
pub trait CompletionClient: Send + Sync {
    /// Send one completion request and return the generated choices.
    ///
    /// An empty vector means the API answered without choices; an error
    /// object in the answer is reported as [`LlmError::Api`].
    fn chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> BoxFuture<'static, LlmResult<Vec<CompletionChoice>>>;
}
