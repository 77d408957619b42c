/// Datastore models shared by every store implementation.
pub mod models;
/// Player storage and retrieval operations.
pub mod player_store;
/// Storage abstraction layer for datastore operations.
pub mod storage;
