//! Desktop player configuration

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use url::Url;

/// Page address used when none is configured
pub const DEFAULT_PAGE_URL: &str = "http://localhost:8080/";

/// Player configuration loaded from environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerConfig {
    /// JSON file holding the persisted key-value slices
    pub storage_path: PathBuf,
    /// Address the builder pretends to be served from; a `data` query
    /// parameter on it is adopted as a shared template on startup
    pub page_url: Url,
}

impl PlayerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let storage_path = lookup("TMPLBLDR_STORAGE_PATH")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_storage_path);

        let raw_url = lookup("TMPLBLDR_PAGE_URL").unwrap_or_else(|| DEFAULT_PAGE_URL.to_string());
        let page_url = Url::parse(raw_url.trim())
            .with_context(|| format!("TMPLBLDR_PAGE_URL must be an absolute URL, got '{raw_url}'"))?;

        Ok(Self {
            storage_path,
            page_url,
        })
    }

    /// Replace the page address, e.g. with a share link given on the command line
    pub fn with_page_url(mut self, raw: &str) -> Result<Self> {
        self.page_url =
            Url::parse(raw.trim()).with_context(|| format!("'{raw}' is not a valid URL"))?;
        Ok(self)
    }
}

/// Platform config directory, e.g. ~/.config/tmplbldr/storage.json on Linux
pub fn default_storage_path() -> PathBuf {
    match ProjectDirs::from("io", "tmplbldr", "player") {
        Some(dirs) => dirs.config_dir().join("storage.json"),
        // Fallback to current directory if project dirs unavailable
        None => PathBuf::from("tmplbldr_storage.json"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = PlayerConfig::from_lookup(lookup_from(&[])).expect("config");
        assert_eq!(config.page_url.as_str(), DEFAULT_PAGE_URL);
        assert_eq!(config.storage_path, default_storage_path());
    }

    #[test]
    fn reads_configured_values() {
        let config = PlayerConfig::from_lookup(lookup_from(&[
            ("TMPLBLDR_STORAGE_PATH", "/tmp/builder.json"),
            ("TMPLBLDR_PAGE_URL", "https://example.com/builder/?data=abc"),
        ]))
        .expect("config");

        assert_eq!(config.storage_path, PathBuf::from("/tmp/builder.json"));
        assert_eq!(config.page_url.path(), "/builder/");
        assert_eq!(config.page_url.query(), Some("data=abc"));
    }

    #[test]
    fn blank_storage_path_falls_back_to_default() {
        let config =
            PlayerConfig::from_lookup(lookup_from(&[("TMPLBLDR_STORAGE_PATH", "  ")])).expect("config");
        assert_eq!(config.storage_path, default_storage_path());
    }

    #[test]
    fn relative_page_url_is_rejected() {
        let result = PlayerConfig::from_lookup(lookup_from(&[("TMPLBLDR_PAGE_URL", "/builder")]));
        assert!(result.is_err());
    }

    #[test]
    fn with_page_url_overrides_the_address() {
        let config = PlayerConfig::from_lookup(lookup_from(&[]))
            .expect("config")
            .with_page_url("http://localhost:8080/?data=xyz")
            .expect("valid url");
        assert_eq!(config.page_url.query(), Some("data=xyz"));
    }
}
