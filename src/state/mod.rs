use std::sync::Arc;

use crate::{dao::player_store::PlayerStore, llm::CompletionClient};

/// Cloneable handle to the [`AppState`] shared by every request.
pub type SharedState = Arc<AppState>;

/// Central application state holding the handles to both external collaborators.
///
/// Both handles are immutable after startup; requests share them without locking.
pub struct AppState {
    player_store: Arc<dyn PlayerStore>,
    completion_client: Arc<dyn CompletionClient>,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    pub fn new(
        player_store: Arc<dyn PlayerStore>,
        completion_client: Arc<dyn CompletionClient>,
    ) -> SharedState {
        Arc::new(Self {
            player_store,
            completion_client,
        })
    }

    /// Datastore holding player records.
    pub fn player_store(&self) -> Arc<dyn PlayerStore> {
        Arc::clone(&self.player_store)
    }

    /// Completion API used for story generation.
    pub fn completion_client(&self) -> Arc<dyn CompletionClient> {
        Arc::clone(&self.completion_client)
    }
}
