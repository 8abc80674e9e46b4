use thiserror::Error;

/// Errors raised while resolving configuration at startup.
///
/// Nothing catches these below `main`: a misconfigured database connection
/// aborts the process before the server starts accepting requests.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("database URL or Supabase credentials not configured")]
    MissingDatabaseConfig,

    #[error("malformed Supabase URL {url:?}: expected scheme://<project-ref>.<domain>")]
    MalformedSupabaseUrl { url: String },
}

impl ConfigError {
    pub fn malformed_supabase_url(url: impl Into<String>) -> Self {
        Self::MalformedSupabaseUrl { url: url.into() }
    }
}
