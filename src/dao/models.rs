use serde::Serialize;
use serde_json::Value;

/// Table holding one row per player.
pub const PLAYERS_TABLE: &str = "players";

/// Player row as stored by the datastore.
///
/// Rows are opaque to this service: whatever columns the datastore returns are
/// passed through untouched.
pub type PlayerRecord = Value;

/// Row inserted when a player is created.
///
/// Every column is forwarded as-is. `None` means the caller never sent the
/// field and leaves the column out of the insert; `Some(Value::Null)` is
/// written as an explicit `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewPlayerEntity {
    /// `name` column.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    /// `class` column, fed from `playerClass`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<Value>,
    /// `stats` column.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<Value>,
    /// `inventory` column.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory: Option<Value>,
    /// `quest_progress` column.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quest_progress: Option<Value>,
}
