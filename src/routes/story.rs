use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::story::StoryResponse, error::AppError, services::story_service, state::SharedState,
};

/// Routes generating story fragments.
pub fn router() -> Router<SharedState> {
    Router::new().route("/story", get(get_story))
}

#[utoipa::path(
    get,
    path = "/story",
    tag = "story",
    responses(
        (status = 200, description = "Generated story fragment", body = StoryResponse),
        (status = 500, description = "Completion API failure")
    )
)]
/// Generate the next fragment of the cave adventure.
pub async fn get_story(State(state): State<SharedState>) -> Result<Json<StoryResponse>, AppError> {
    let story = story_service::generate_story(&state).await?;
    Ok(Json(story))
}
