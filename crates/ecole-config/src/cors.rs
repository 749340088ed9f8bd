use std::env;

/// Origin of the browser frontend served during development.
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:4200";

/// Origins allowed to call the API from a browser, read from the comma separated
/// `ALLOWED_ORIGINS` variable.
#[derive(Clone, Debug)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn from_env() -> Self {
        match env::var("ALLOWED_ORIGINS") {
            Ok(raw) => Self::from_list(&raw),
            Err(_) => Self::default(),
        }
    }

    /// Splits a comma separated origin list. Blank entries are skipped and an
    /// all-blank list falls back to [`DEFAULT_ALLOWED_ORIGIN`].
    pub fn from_list(raw: &str) -> Self {
        let allowed_origins: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect();

        if allowed_origins.is_empty() {
            return Self::default();
        }

        Self { allowed_origins }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![DEFAULT_ALLOWED_ORIGIN.to_string()],
        }
    }
}
