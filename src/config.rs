//! Application-level configuration loaded from the process environment.

use std::env;

use tracing::{error, info, warn};

/// Port used when `PORT` is unset or cannot be parsed.
pub const DEFAULT_PORT: u16 = 5000;
/// Base URL of the OpenAI REST API.
pub const DEFAULT_OPENAI_API_BASE: &str = "https://api.openai.com/v1";

const SUPABASE_URL_ENV: &str = "SUPABASE_URL";
const SUPABASE_KEY_ENV: &str = "SUPABASE_KEY";
const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";
const OPENAI_API_BASE_ENV: &str = "OPENAI_API_BASE";
const PORT_ENV: &str = "PORT";

#[derive(Debug, Clone)]
/// Immutable runtime configuration read once at startup.
pub struct AppConfig {
    /// Base URL of the Supabase project.
    pub supabase_url: String,
    /// Supabase API key sent with every datastore request.
    pub supabase_key: String,
    /// Bearer token for the completion API, if any.
    pub openai_api_key: Option<String>,
    /// Base URL of the completion API.
    pub openai_api_base: String,
    /// Port the HTTP server listens on.
    pub port: u16,
}

impl AppConfig {
    /// Build the configuration from environment variables.
    ///
    /// Nothing here is fatal: missing credentials are reported and the
    /// corresponding upstream calls fail later, per request.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let supabase_url = non_empty(SUPABASE_URL_ENV).unwrap_or_else(|| {
            warn!(var = SUPABASE_URL_ENV, "datastore URL is missing");
            String::new()
        });
        let supabase_key = non_empty(SUPABASE_KEY_ENV).unwrap_or_else(|| {
            warn!(var = SUPABASE_KEY_ENV, "datastore key is missing");
            String::new()
        });

        let openai_api_key = non_empty(OPENAI_API_KEY_ENV);
        if openai_api_key.is_none() {
            error!(
                var = OPENAI_API_KEY_ENV,
                "OpenAI API key is missing; story requests will fail upstream"
            );
        }

        let openai_api_base = non_empty(OPENAI_API_BASE_ENV)
            .unwrap_or_else(|| DEFAULT_OPENAI_API_BASE.to_string());

        let port = match lookup(PORT_ENV) {
            Some(raw) => raw.trim().parse::<u16>().unwrap_or_else(|err| {
                warn!(value = %raw, error = %err, "invalid PORT; using default");
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        info!(port, openai_api_base = %openai_api_base, "configuration loaded");

        Self {
            supabase_url,
            supabase_key,
            openai_api_key,
            openai_api_base,
            port,
        }
    }
}
