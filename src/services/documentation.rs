use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for the D&D game backend.
#[openapi(
    paths(
        crate::routes::root::status,
        crate::routes::players::list_players,
        crate::routes::players::create_player,
        crate::routes::story::get_story,
    ),
    components(
        schemas(
            crate::dto::status::StatusResponse,
            crate::dto::player::PlayerRow,
            crate::dto::player::CreatePlayerRequest,
            crate::dto::player::CreatePlayerResponse,
            crate::dto::story::StoryResponse,
        )
    ),
    tags(
        (name = "status", description = "Liveness endpoint"),
        (name = "players", description = "Player records stored in the datastore"),
        (name = "story", description = "Story fragments generated by the language model"),
    )
)]
pub struct ApiDoc;
