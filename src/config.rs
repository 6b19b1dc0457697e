use std::{env, path::PathBuf};

/// Where and how much the crate logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    pub log_dir: PathBuf,
    pub log_file: String,
    pub filter: String,
}

impl TelemetryConfig {
    const DEFAULT_LOG_DIR: &'static str = ".logs";
    const DEFAULT_LOG_FILE: &'static str = "data-utils.log";
    const DEFAULT_FILTER: &'static str = "info";

    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            log_dir: non_blank("DATA_UTILS_LOG_DIR")
                .map_or_else(|| Self::DEFAULT_LOG_DIR.into(), PathBuf::from),
            log_file: non_blank("DATA_UTILS_LOG_FILE")
                .unwrap_or_else(|| Self::DEFAULT_LOG_FILE.into()),
            filter: non_blank("RUST_LOG").unwrap_or_else(|| Self::DEFAULT_FILTER.into()),
        }
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_dir: Self::DEFAULT_LOG_DIR.into(),
            log_file: Self::DEFAULT_LOG_FILE.into(),
            filter: Self::DEFAULT_FILTER.into(),
        }
    }
}
