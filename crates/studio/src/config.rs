//! Runtime configuration for the studio session.

use std::path::PathBuf;
use std::time::Duration;

/// Settings read once at startup.
#[derive(Debug, Clone)]
pub struct StudioConfig {
    /// Quiet period after the last parameter change before regenerating.
    pub debounce: Duration,
    /// Longest side of the preview thumbnail in pixels.
    pub preview_size: u32,
    /// Where the preview thumbnail is written. `None` disables previews.
    pub preview_path: Option<PathBuf>,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(300),
            preview_size: 400,
            preview_path: Some(PathBuf::from("heightmap-preview.png")),
        }
    }
}

impl StudioConfig {
    /// Builds the configuration from `HEIGHTMAP_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let debounce = parse_var("HEIGHTMAP_DEBOUNCE_MS", lookup("HEIGHTMAP_DEBOUNCE_MS"))
            .map(Duration::from_millis)
            .unwrap_or(defaults.debounce);

        let preview_size = parse_var("HEIGHTMAP_PREVIEW_SIZE", lookup("HEIGHTMAP_PREVIEW_SIZE"))
            .unwrap_or(defaults.preview_size);

        let preview_path = match lookup("HEIGHTMAP_PREVIEW_PATH") {
            Some(path) if path.trim().is_empty() => None,
            Some(path) => Some(PathBuf::from(path)),
            None => defaults.preview_path,
        };

        Self {
            debounce,
            preview_size,
            preview_path,
        }
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, raw: Option<String>) -> Option<T> {
    let raw = raw?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Ignoring {key}={raw:?}: not a valid number, using default");
            None
        }
    }
}
