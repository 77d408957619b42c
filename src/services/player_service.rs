use serde_json::Value;
use tracing::{error, info};

use crate::{
    dao::{models::NewPlayerEntity, storage::StorageError},
    dto::player::{CreatePlayerRequest, CreatePlayerResponse},
    error::ServiceError,
    state::SharedState,
};

/// Fetch every player row from the datastore, unfiltered and unpaginated.
///
/// The raw [`StorageError`] is handed back so the route can expose the
/// datastore's error object as-is.
pub async fn list_players(state: &SharedState) -> Result<Vec<Value>, StorageError> {
    let rows = state
        .player_store()
        .list_players()
        .await
        .inspect_err(|err| error!(error = %err, "failed to list players"))?;
    info!(count = rows.len(), "listed players");
    Ok(rows)
}

/// Insert a player row built from the request and echo the stored row back.
pub async fn create_player(
    state: &SharedState,
    request: CreatePlayerRequest,
) -> Result<CreatePlayerResponse, ServiceError> {
    let entity = NewPlayerEntity::from(request);
    let rows = state
        .player_store()
        .insert_player(entity)
        .await
        .inspect_err(|err| error!(error = %err, "failed to create player"))?;
    info!(count = rows.len(), "player created");
    Ok(CreatePlayerResponse::created(rows))
}
