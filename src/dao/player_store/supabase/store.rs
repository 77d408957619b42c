use std::sync::Arc;

use futures::future::BoxFuture;
use reqwest::{Client, Method, Response};
use serde_json::Value;
use tracing::debug;

use crate::dao::{
    models::{NewPlayerEntity, PLAYERS_TABLE, PlayerRecord},
    player_store::PlayerStore,
    storage::StorageResult,
};

use super::{
    config::SupabaseConfig,
    error::{SupabaseError, SupabaseResult},
    models::{
        API_KEY_HEADER, PREFER_HEADER, REST_PREFIX, RETURN_REPRESENTATION, SELECT_ALL,
        error_payload,
    },
};

/// Player store backed by the PostgREST API of a Supabase project.
#[derive(Clone)]
pub struct SupabaseStore {
    client: Client,
    base_url: Arc<str>,
    api_key: Arc<str>,
}

impl SupabaseStore {
    /// Build a store for the configured project. No request is sent yet.
    pub fn new(config: SupabaseConfig) -> SupabaseResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|source| SupabaseError::ClientBuilder { source })?;

        Ok(Self {
            client,
            base_url: Arc::<str>::from(config.base_url.trim_end_matches('/')),
            api_key: Arc::<str>::from(config.api_key),
        })
    }

    fn request(&self, method: Method, table: &str) -> reqwest::RequestBuilder {
        let url = format!("{}/{}/{}", self.base_url, REST_PREFIX, table);
        self.client
            .request(method, url)
            .header(API_KEY_HEADER, self.api_key.as_ref())
            .bearer_auth(self.api_key.as_ref())
    }

    async fn select_all(&self, table: &str) -> SupabaseResult<Vec<Value>> {
        let response = self
            .request(Method::GET, table)
            .query(&SELECT_ALL)
            .send()
            .await
            .map_err(|source| SupabaseError::RequestSend {
                path: table.to_string(),
                source,
            })?;

        read_rows(table, response).await
    }

    async fn insert_returning<T>(&self, table: &str, row: &T) -> SupabaseResult<Vec<Value>>
    where
        T: ?Sized + serde::Serialize,
    {
        let response = self
            .request(Method::POST, table)
            .header(PREFER_HEADER, RETURN_REPRESENTATION)
            .json(&[row])
            .send()
            .await
            .map_err(|source| SupabaseError::RequestSend {
                path: table.to_string(),
                source,
            })?;

        read_rows(table, response).await
    }
}

/// Decode a PostgREST answer into rows, or into the error payload it carries.
async fn read_rows(path: &str, response: Response) -> SupabaseResult<Vec<Value>> {
    let status = response.status();
    let body = response
        .bytes()
        .await
        .map_err(|source| SupabaseError::ReadBody {
            path: path.to_string(),
            source,
        })?;
    debug!(path, %status, bytes = body.len(), "Supabase response received");

    if status.is_success() {
        serde_json::from_slice(&body).map_err(|source| SupabaseError::DeserializeValue {
            path: path.to_string(),
            source,
        })
    } else {
        Err(SupabaseError::ErrorResponse {
            path: path.to_string(),
            status,
            payload: error_payload(status, &body),
        })
    }
}

impl PlayerStore for SupabaseStore {
    fn list_players(&self) -> BoxFuture<'static, StorageResult<Vec<PlayerRecord>>> {
        let store = self.clone();
        Box::pin(async move { store.select_all(PLAYERS_TABLE).await.map_err(Into::into) })
    }

    fn insert_player(
        &self,
        player: NewPlayerEntity,
    ) -> BoxFuture<'static, StorageResult<Vec<PlayerRecord>>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .insert_returning(PLAYERS_TABLE, &player)
                .await
                .map_err(Into::into)
        })
    }
}
