mod config;
mod error;
mod models;
mod store;

pub use config::SupabaseConfig;
pub use error::{SupabaseError, SupabaseResult};
pub use store::SupabaseStore;
