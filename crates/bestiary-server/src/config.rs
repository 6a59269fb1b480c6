//! Server Configuration
//!
//! Read from Shuttle secrets (`Secrets.toml` locally). Every key is optional.

use std::path::PathBuf;
use std::str::FromStr;

use shuttle_runtime::SecretStore;

const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Runtime settings for the API server
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Directory uploads are written to and served from (`UPLOAD_DIR`)
    pub upload_dir: PathBuf,
    /// Request body limit for `/upload` (`MAX_UPLOAD_BYTES`)
    pub max_upload_bytes: usize,
    /// Insert the bundled catalog at startup (`SEED_CATALOG`)
    pub seed_catalog: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            upload_dir: PathBuf::from(DEFAULT_UPLOAD_DIR),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            seed_catalog: false,
        }
    }
}

impl AppConfig {
    pub fn from_secrets(secrets: &SecretStore) -> Self {
        Self::from_lookup(|key| secrets.get(key))
    }

    /// Build from any key lookup, falling back to defaults for missing or
    /// unparsable values
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let upload_dir = lookup("UPLOAD_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.upload_dir);

        Self {
            upload_dir,
            max_upload_bytes: parse_or(&lookup, "MAX_UPLOAD_BYTES", defaults.max_upload_bytes),
            seed_catalog: parse_or(&lookup, "SEED_CATALOG", defaults.seed_catalog),
        }
    }
}

fn parse_or<T: FromStr + std::fmt::Debug>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> T {
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("⚠️  Invalid {}={:?} - using {:?}", key, raw, default);
            default
        }),
    }
}
