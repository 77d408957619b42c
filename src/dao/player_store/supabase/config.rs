use crate::config::AppConfig;

/// Runtime configuration describing how to reach the Supabase project.
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    /// Project URL, e.g. `https://xyz.supabase.co`.
    pub base_url: String,
    /// Key sent as `apikey` and bearer token.
    pub api_key: String,
}

impl SupabaseConfig {
    /// Construct a configuration from an explicit project URL and API key.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

impl From<&AppConfig> for SupabaseConfig {
    fn from(config: &AppConfig) -> Self {
        Self::new(config.supabase_url.clone(), config.supabase_key.clone())
    }
}
