use std::env;
use std::time::Duration;

/// Bounds on the external calls made by the role gates.
#[derive(Clone, Copy, Debug)]
pub struct GuardConfig {
    pub role_lookup_timeout: Duration,
}

impl GuardConfig {
    pub fn from_env() -> Self {
        let millis = env::var("ROLE_LOOKUP_TIMEOUT_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .filter(|ms: &u64| *ms > 0)
            .unwrap_or(5000);

        Self {
            role_lookup_timeout: Duration::from_millis(millis),
        }
    }
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            role_lookup_timeout: Duration::from_secs(5),
        }
    }
}
