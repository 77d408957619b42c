use serde::Serialize;
use utoipa::ToSchema;

/// Choices offered after every story fragment, whatever the model wrote.
pub const STORY_CHOICES: [&str; 4] = [
    "Explore deeper",
    "Leave the cave",
    "Look for treasure",
    "Rest",
];

/// Story fragment returned by `GET /story`.
#[derive(Debug, Serialize, ToSchema)]
pub struct StoryResponse {
    /// Trimmed model output.
    pub text: String,
    /// Always [`STORY_CHOICES`].
    pub choices: Vec<String>,
}

impl StoryResponse {
    /// Pair generated text with the fixed choice list.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            choices: STORY_CHOICES.iter().map(ToString::to_string).collect(),
        }
    }
}
