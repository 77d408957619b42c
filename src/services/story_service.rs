use tracing::{error, info};

use crate::{
    dto::story::StoryResponse,
    error::ServiceError,
    llm::models::{ChatCompletionRequest, ChatMessage},
    state::SharedState,
};

/// Model asked to narrate.
pub const STORY_MODEL: &str = "gpt-4";
/// Upper bound on the generated story length.
pub const STORY_MAX_TOKENS: u32 = 200;
const SYSTEM_PROMPT: &str =
    "You are a fantasy RPG game master. Generate a short adventure story with 4 choices.";
const CAVE_PROMPT: &str =
    "The player has entered a dark cave. Generate a short story with 4 choices.";

/// Completion request for the cave scenario.
pub fn story_request() -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: STORY_MODEL.to_string(),
        messages: vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(CAVE_PROMPT),
        ],
        max_tokens: STORY_MAX_TOKENS,
    }
}

/// Ask the model for a story fragment and pair it with the fixed choices.
///
/// Only the text of the first choice is used; whatever choices the model
/// wrote into its story are not parsed.
pub async fn generate_story(state: &SharedState) -> Result<StoryResponse, ServiceError> {
    info!(model = STORY_MODEL, "requesting story from completion API");
    let choices = state
        .completion_client()
        .chat_completion(story_request())
        .await
        .inspect_err(|err| error!(error = %err, "story generation failed"))?;

    let Some(first) = choices.first() else {
        error!("completion API returned no choices");
        return Err(ServiceError::NoChoices);
    };
    let text = first.content().ok_or_else(|| {
        error!("first completion choice has no content");
        ServiceError::MissingContent
    })?;

    Ok(StoryResponse::new(text.trim()))
}

#[cfg(test)]
mod tests {
    use crate::llm::models::ChatRole;

    use super::*;

    #[test]
    fn request_targets_cave_scenario() {
        let request = story_request();
        assert_eq!(request.model, "gpt-4");
        assert_eq!(request.max_tokens, 200);
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, ChatRole::System);
        assert_eq!(
            request.messages[0].content,
            "You are a fantasy RPG game master. Generate a short adventure story with 4 choices."
        );
        assert_eq!(request.messages[1].role, ChatRole::User);
        assert!(request.messages[1].content.starts_with("The player has entered a dark cave."));
    }
}
