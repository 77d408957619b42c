use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::dao::models::NewPlayerEntity;

/// Confirmation sent back once a player row is inserted.
pub const PLAYER_CREATED_MESSAGE: &str = "Player created!";

/// Player row exactly as returned by the datastore.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = Object)]
pub struct PlayerRow(pub Value);

/// Keep a present field even when it is `null`; only absent fields stay `None`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Payload accepted by `POST /players`. Nothing is validated.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreatePlayerRequest {
    /// Player name.
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub name: Option<Value>,
    /// Stored in the `class` column.
    #[serde(default, rename = "playerClass", deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub player_class: Option<Value>,
    /// Opaque stats object.
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<Object>)]
    pub stats: Option<Value>,
    /// Opaque inventory object.
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<Object>)]
    pub inventory: Option<Value>,
    /// Opaque quest progress object.
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<Object>)]
    pub quest_progress: Option<Value>,
}

impl CreatePlayerRequest {
    /// Decode a raw request body the way a lenient JSON body parser would.
    ///
    /// Bodies not declared as `application/json`, empty bodies and JSON values
    /// other than objects all yield an empty request. Only malformed JSON is
    /// an error.
    pub fn from_body(
        content_type: Option<&str>,
        body: &[u8],
    ) -> Result<Self, serde_json::Error> {
        if !content_type.is_some_and(is_json_mime) || body.trim_ascii().is_empty() {
            return Ok(Self::default());
        }
        match serde_json::from_slice::<Value>(body)? {
            object @ Value::Object(_) => serde_json::from_value(object),
            _ => Ok(Self::default()),
        }
    }
}

fn is_json_mime(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .is_some_and(|essence| essence.trim().eq_ignore_ascii_case("application/json"))
}

impl From<CreatePlayerRequest> for NewPlayerEntity {
    fn from(request: CreatePlayerRequest) -> Self {
        Self {
            name: request.name,
            class: request.player_class,
            stats: request.stats,
            inventory: request.inventory,
            quest_progress: request.quest_progress,
        }
    }
}

/// Response of a successful `POST /players`.
#[derive(Debug, Serialize, ToSchema)]
pub struct CreatePlayerResponse {
    /// Always "Player created!".
    pub message: String,
    /// Inserted row(s) as echoed by the datastore.
    pub data: Vec<PlayerRow>,
}

impl CreatePlayerResponse {
    /// Wrap the rows echoed by the datastore.
    pub fn created(rows: Vec<Value>) -> Self {
        Self {
            message: PLAYER_CREATED_MESSAGE.to_string(),
            data: rows.into_iter().map(PlayerRow).collect(),
        }
    }
}
