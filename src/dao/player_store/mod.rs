/// Supabase (PostgREST) backed store.
pub mod supabase;

use crate::dao::models::{NewPlayerEntity, PlayerRecord};
use crate::dao::storage::StorageResult;
use futures::future::BoxFuture;

/// Abstraction over the datastore holding player records.
pub trait PlayerStore: Send + Sync {
    /// Select every row of the players table, unfiltered and unpaginated.
    fn list_players(&self) -> BoxFuture<'static, StorageResult<Vec<PlayerRecord>>>;
    /// Insert one row and return the inserted row(s) as stored.
    fn insert_player(
        &self,
        player: NewPlayerEntity,
    ) -> BoxFuture<'static, StorageResult<Vec<PlayerRecord>>>;
}
