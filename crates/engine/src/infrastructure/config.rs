//! Engine configuration from the environment.
//!
//! Values come from process environment variables, optionally seeded from
//! `.env.local` / `.env` at the repository root.

use std::path::Path;

use thiserror::Error;

use hypermall_domain::common::none_if_blank;

pub const LOG_FILTER_VAR: &str = "HYPERMALL_LOG";
pub const ROLL_SEED_VAR: &str = "HYPERMALL_ROLL_SEED";
pub const SPEAKER_VAR: &str = "HYPERMALL_SPEAKER";

pub const DEFAULT_LOG_FILTER: &str = "hypermall_engine=info";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
    /// Seed for a deterministic random source; `None` uses system randomness
    pub roll_seed: Option<u64>,
    /// Overrides the actor name as the chat speaker alias
    pub speaker: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            roll_seed: None,
            speaker: None,
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).and_then(|v| none_if_blank(&v).map(str::to_string));

        let roll_seed = match get(ROLL_SEED_VAR) {
            Some(raw) => Some(raw.parse::<u64>().map_err(|_| ConfigError::Invalid {
                key: ROLL_SEED_VAR,
                value: raw,
            })?),
            None => None,
        };

        Ok(Self {
            log_filter: get(LOG_FILTER_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            roll_seed,
            speaker: get(SPEAKER_VAR),
        })
    }
}

/// Load `.env.local` then `.env` from `root`, if present. Earlier files win.
pub fn load_dotenv_from(root: &Path) {
    for filename in [".env.local", ".env"] {
        let path = root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}

/// Load environment files from the workspace root.
pub fn load_dotenv_from_repo_root() {
    let repo_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");
    load_dotenv_from(&repo_root);
}
