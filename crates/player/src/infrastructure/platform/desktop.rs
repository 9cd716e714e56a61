//! Desktop platform implementations
//!
//! Provides platform-specific implementations for desktop using
//! standard library and native crates.

use crate::config::PlayerConfig;
use crate::ports::outbound::{
    ClipboardError, ClipboardProvider, ConfirmProvider, LocationProvider, NoticeKind,
    NotificationProvider, StorageError, StorageProvider, TimeProvider,
};
use crate::state::Platform;
use chrono::{DateTime, Utc};
use futures_util::future::{self, FutureExt, LocalBoxFuture};
use std::collections::HashMap;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::{Arc, RwLock};
use url::Url;

/// Desktop time provider using the system clock
#[derive(Clone, Default)]
pub struct DesktopTimeProvider;

impl TimeProvider for DesktopTimeProvider {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Desktop storage provider with file-based persistence
///
/// Stores key-value pairs in a JSON file, by default at:
/// - Linux: ~/.config/tmplbldr/player/storage.json
/// - macOS: ~/Library/Application Support/io.tmplbldr.player/storage.json
/// - Windows: C:\Users\<User>\AppData\Roaming\tmplbldr\player\storage.json
#[derive(Clone)]
pub struct DesktopStorageProvider {
    /// Path to the storage file
    storage_path: PathBuf,
    /// In-memory cache of stored values
    cache: Arc<RwLock<HashMap<String, String>>>,
}

impl DesktopStorageProvider {
    /// Create a storage provider backed by the given file
    ///
    /// Loads existing data from the storage file if it exists. An unreadable
    /// or malformed file is treated as empty storage.
    pub fn new(storage_path: impl Into<PathBuf>) -> Self {
        let storage_path = storage_path.into();

        let cache = if storage_path.exists() {
            match fs::read_to_string(&storage_path) {
                Ok(data) => match serde_json::from_str::<HashMap<String, String>>(&data) {
                    Ok(map) => map,
                    Err(e) => {
                        tracing::warn!("Failed to parse storage file: {}", e);
                        HashMap::new()
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read storage file: {}", e);
                    HashMap::new()
                }
            }
        } else {
            HashMap::new()
        };

        tracing::debug!("Desktop storage initialized at: {:?}", storage_path);

        Self {
            storage_path,
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    /// Persist the cache to disk
    fn persist(&self, key: &str) -> Result<(), StorageError> {
        let write_error = |message: String| {
            tracing::error!(key, "Failed to persist storage: {}", message);
            StorageError::Write {
                key: key.to_string(),
                message,
            }
        };

        // Ensure parent directory exists
        if let Some(parent) = self.storage_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| write_error(e.to_string()))?;
            }
        }

        let data = {
            let cache = self.cache.read().map_err(|_| StorageError::Unavailable)?;
            serde_json::to_string_pretty(&*cache).map_err(|e| write_error(e.to_string()))?
        };

        fs::write(&self.storage_path, data).map_err(|e| write_error(e.to_string()))
    }
}

impl StorageProvider for DesktopStorageProvider {
    fn load(&self, key: &str) -> Option<String> {
        match self.cache.read() {
            Ok(guard) => guard.get(key).cloned(),
            Err(e) => {
                tracing::error!("Failed to acquire read lock for storage: {}", e);
                None
            }
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        {
            let mut guard = self.cache.write().map_err(|_| StorageError::Unavailable)?;
            guard.insert(key.to_string(), value.to_string());
        }
        self.persist(key)
    }
}

/// Desktop stand-in for the browser address bar
#[derive(Clone)]
pub struct DesktopLocationProvider {
    url: Arc<RwLock<Url>>,
}

impl DesktopLocationProvider {
    pub fn new(url: Url) -> Self {
        Self {
            url: Arc::new(RwLock::new(url)),
        }
    }
}

impl LocationProvider for DesktopLocationProvider {
    fn current_url(&self) -> Option<Url> {
        self.url.read().ok().map(|guard| guard.clone())
    }

    fn replace_url(&self, url: &Url) {
        match self.url.write() {
            Ok(mut guard) => {
                tracing::debug!(%url, "Page address replaced");
                *guard = url.clone();
            }
            Err(e) => tracing::error!("Failed to acquire write lock for location: {}", e),
        }
    }
}

/// In-process clipboard; clones share the same buffer
#[derive(Clone, Default)]
pub struct DesktopClipboardProvider {
    contents: Arc<RwLock<Option<String>>>,
}

impl DesktopClipboardProvider {
    /// Last text written to the clipboard
    pub fn contents(&self) -> Option<String> {
        self.contents.read().ok().and_then(|guard| guard.clone())
    }
}

impl ClipboardProvider for DesktopClipboardProvider {
    fn write_text(&self, text: &str) -> LocalBoxFuture<'static, Result<(), ClipboardError>> {
        let result = match self.contents.write() {
            Ok(mut guard) => {
                *guard = Some(text.to_string());
                Ok(())
            }
            Err(_) => Err(ClipboardError::Unavailable),
        };
        future::ready(result).boxed_local()
    }
}

/// Notifications rendered as log lines
#[derive(Clone, Default)]
pub struct DesktopNotificationProvider;

impl NotificationProvider for DesktopNotificationProvider {
    fn notify(&self, kind: NoticeKind, message: &str) {
        match kind {
            NoticeKind::Success | NoticeKind::Info => tracing::info!(?kind, "{}", message),
            NoticeKind::Error => tracing::warn!(?kind, "{}", message),
        }
    }
}

/// Confirmation read from stdin; anything but "y"/"yes" declines
#[derive(Clone, Default)]
pub struct DesktopConfirmProvider;

impl ConfirmProvider for DesktopConfirmProvider {
    fn confirm(&self, message: &str) -> bool {
        let mut stdout = io::stdout();
        if write!(stdout, "{message} [y/N] ").and_then(|_| stdout.flush()).is_err() {
            return false;
        }

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
            Err(e) => {
                tracing::warn!("Failed to read confirmation: {}", e);
                false
            }
        }
    }
}

/// Create platform services for desktop
///
/// The clipboard is passed in so the caller can read back what was copied.
pub fn create_platform(config: &PlayerConfig, clipboard: DesktopClipboardProvider) -> Platform {
    Platform::new(
        DesktopTimeProvider,
        DesktopStorageProvider::new(config.storage_path.clone()),
        DesktopLocationProvider::new(config.page_url.clone()),
        clipboard,
        DesktopNotificationProvider,
        DesktopConfirmProvider,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_round_trips_through_the_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("storage.json");

        let storage = DesktopStorageProvider::new(&path);
        assert_eq!(storage.load("key"), None);
        storage.save("key", "value").expect("save");

        let reopened = DesktopStorageProvider::new(&path);
        assert_eq!(reopened.load("key"), Some("value".to_string()));
    }

    #[test]
    fn storage_overwrite_keeps_other_keys() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("storage.json");

        let storage = DesktopStorageProvider::new(&path);
        storage.save("a", "1").expect("save");
        storage.save("b", "2").expect("save");
        storage.save("a", "3").expect("overwrite");

        let reopened = DesktopStorageProvider::new(&path);
        assert_eq!(reopened.load("a"), Some("3".to_string()));
        assert_eq!(reopened.load("b"), Some("2".to_string()));
    }

    #[test]
    fn malformed_storage_file_is_treated_as_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("storage.json");
        fs::write(&path, "not json").expect("write");

        let storage = DesktopStorageProvider::new(&path);
        assert_eq!(storage.load("anything"), None);
    }

    #[test]
    fn location_replace_is_visible() {
        let location =
            DesktopLocationProvider::new(Url::parse("http://localhost/?data=abc").expect("url"));
        let stripped = Url::parse("http://localhost/").expect("url");
        location.replace_url(&stripped);
        assert_eq!(location.current_url(), Some(stripped));
    }

    #[tokio::test]
    async fn clipboard_clones_share_contents() {
        let clipboard = DesktopClipboardProvider::default();
        let handle = clipboard.clone();
        clipboard.write_text("copied").await.expect("write");
        assert_eq!(handle.contents(), Some("copied".to_string()));
    }
}
