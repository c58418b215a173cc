//! Layered configuration: defaults, `.env`, environment, then CLI flags

use url::Url;

use shared::{Algorithm, ParamsProfile};
use crate::error::{BlenderError, BlenderResult};

pub const DEFAULT_SOLVER_URL: &str = "http://127.0.0.1:8080/";

/// Path of the single solver endpoint, relative to the base URL
pub const OPTIMIZE_PATH: &str = "api/v1/optimize";

pub const ENV_SOLVER_URL: &str = "BLENDER_SOLVER_URL";
pub const ENV_ALGORITHM: &str = "BLENDER_ALGORITHM";
pub const ENV_PROFILE: &str = "BLENDER_PROFILE";
pub const ENV_LOG_LEVEL: &str = "BLENDER_LOG_LEVEL";

#[derive(Debug, Clone, PartialEq)]
pub struct BlenderConfig {
    pub solver_url: Url,
    pub algorithm: Algorithm,
    pub profile: ParamsProfile,
    pub log_level: String,
}

impl BlenderConfig {
    /// Built-in defaults, before `.env` and the environment are applied
    pub fn defaults() -> BlenderResult<Self> {
        Ok(Self {
            solver_url: parse_solver_url(DEFAULT_SOLVER_URL)?,
            algorithm: Algorithm::default(),
            profile: ParamsProfile::default(),
            log_level: "info".to_string(),
        })
    }

    /// Load `.env` if present, then read the process environment
    pub fn from_env() -> BlenderResult<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> BlenderResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::defaults()?;

        if let Some(raw) = lookup(ENV_SOLVER_URL) {
            config.solver_url = parse_solver_url(&raw)?;
        }
        if let Some(raw) = lookup(ENV_ALGORITHM) {
            config.algorithm = raw
                .parse()
                .map_err(|e| BlenderError::config(format!("{ENV_ALGORITHM}: {e}")))?;
        }
        if let Some(raw) = lookup(ENV_PROFILE) {
            config.profile = raw
                .parse()
                .map_err(|e| BlenderError::config(format!("{ENV_PROFILE}: {e}")))?;
        }
        if let Some(raw) = lookup(ENV_LOG_LEVEL) {
            config.log_level = raw.trim().to_ascii_lowercase();
        }

        Ok(config)
    }

    /// Full URL of the optimize endpoint
    pub fn optimize_endpoint(&self) -> BlenderResult<Url> {
        self.solver_url
            .join(OPTIMIZE_PATH)
            .map_err(|e| BlenderError::config(format!("Cannot build optimize endpoint: {e}")))
    }
}

/// Parse a solver base URL, keeping any path prefix when the endpoint is joined
pub fn parse_solver_url(raw: &str) -> BlenderResult<Url> {
    let trimmed = raw.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };

    let url = Url::parse(&with_slash).map_err(|e| BlenderError::config(format!("Invalid solver URL {trimmed:?}: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(BlenderError::config(format!("Unsupported solver URL scheme: {other}"))),
    }
}
