//! In-memory platform implementations
//!
//! Used by tests and by hosts that embed the store without durable storage.
//! Every provider is `Clone`; clones share state so a test can keep a handle
//! after moving a copy into `Platform`.

use crate::ports::outbound::{
    ClipboardError, ClipboardProvider, ConfirmProvider, LocationProvider, NoticeKind,
    NotificationProvider, StorageError, StorageProvider, TimeProvider,
};
use crate::state::Platform;
use chrono::{DateTime, Duration, Utc};
use futures_util::future::{self, FutureExt, LocalBoxFuture};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};
use url::Url;

/// Clock that only moves when told to
#[derive(Clone)]
pub struct FixedTimeProvider {
    now: Arc<RwLock<DateTime<Utc>>>,
}

impl FixedTimeProvider {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Arc::new(RwLock::new(now)),
        }
    }

    pub fn advance(&self, by: Duration) {
        if let Ok(mut guard) = self.now.write() {
            *guard += by;
        }
    }
}

impl Default for FixedTimeProvider {
    fn default() -> Self {
        Self::new(DateTime::<Utc>::default())
    }
}

impl TimeProvider for FixedTimeProvider {
    fn now(&self) -> DateTime<Utc> {
        self.now.read().map(|guard| *guard).unwrap_or_default()
    }
}

/// Storage held in a map; writes can be made to fail
#[derive(Clone, Default)]
pub struct MemoryStorageProvider {
    values: Arc<RwLock<HashMap<String, String>>>,
    writes: Arc<Mutex<Vec<String>>>,
    fail_writes: Arc<RwLock<bool>>,
}

impl MemoryStorageProvider {
    pub fn with_value(self, key: &str, value: &str) -> Self {
        if let Ok(mut guard) = self.values.write() {
            guard.insert(key.to_string(), value.to_string());
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.values.read().ok().and_then(|guard| guard.get(key).cloned())
    }

    /// Keys written so far, in order
    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().map(|guard| guard.clone()).unwrap_or_default()
    }

    pub fn set_fail_writes(&self, fail: bool) {
        if let Ok(mut guard) = self.fail_writes.write() {
            *guard = fail;
        }
    }

    fn check_writable(&self, key: &str) -> Result<(), StorageError> {
        if self.fail_writes.read().map(|guard| *guard).unwrap_or(false) {
            return Err(StorageError::Write {
                key: key.to_string(),
                message: "quota exceeded".to_string(),
            });
        }
        if let Ok(mut guard) = self.writes.lock() {
            guard.push(key.to_string());
        }
        Ok(())
    }
}

impl StorageProvider for MemoryStorageProvider {
    fn load(&self, key: &str) -> Option<String> {
        self.get(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check_writable(key)?;
        let mut guard = self.values.write().map_err(|_| StorageError::Unavailable)?;
        guard.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Page address held in memory
#[derive(Clone, Default)]
pub struct MemoryLocationProvider {
    url: Arc<RwLock<Option<Url>>>,
}

impl MemoryLocationProvider {
    pub fn new(url: Url) -> Self {
        Self {
            url: Arc::new(RwLock::new(Some(url))),
        }
    }
}

impl LocationProvider for MemoryLocationProvider {
    fn current_url(&self) -> Option<Url> {
        self.url.read().ok().and_then(|guard| guard.clone())
    }

    fn replace_url(&self, url: &Url) {
        if let Ok(mut guard) = self.url.write() {
            *guard = Some(url.clone());
        }
    }
}

/// Clipboard buffer; writes can be made to fail
#[derive(Clone, Default)]
pub struct MemoryClipboardProvider {
    contents: Arc<RwLock<Option<String>>>,
    reject: Arc<RwLock<bool>>,
}

impl MemoryClipboardProvider {
    pub fn contents(&self) -> Option<String> {
        self.contents.read().ok().and_then(|guard| guard.clone())
    }

    pub fn set_reject(&self, reject: bool) {
        if let Ok(mut guard) = self.reject.write() {
            *guard = reject;
        }
    }
}

impl ClipboardProvider for MemoryClipboardProvider {
    fn write_text(&self, text: &str) -> LocalBoxFuture<'static, Result<(), ClipboardError>> {
        let rejected = self.reject.read().map(|guard| *guard).unwrap_or(false);
        let result = if rejected {
            Err(ClipboardError::Rejected("permission denied".to_string()))
        } else {
            match self.contents.write() {
                Ok(mut guard) => {
                    *guard = Some(text.to_string());
                    Ok(())
                }
                Err(_) => Err(ClipboardError::Unavailable),
            }
        };
        future::ready(result).boxed_local()
    }
}

/// Records every notification
#[derive(Clone, Default)]
pub struct RecordingNotificationProvider {
    notices: Arc<Mutex<Vec<(NoticeKind, String)>>>,
}

impl RecordingNotificationProvider {
    pub fn notices(&self) -> Vec<(NoticeKind, String)> {
        self.notices.lock().map(|guard| guard.clone()).unwrap_or_default()
    }

    pub fn last(&self) -> Option<(NoticeKind, String)> {
        self.notices().pop()
    }
}

impl NotificationProvider for RecordingNotificationProvider {
    fn notify(&self, kind: NoticeKind, message: &str) {
        if let Ok(mut guard) = self.notices.lock() {
            guard.push((kind, message.to_string()));
        }
    }
}

/// Scripted confirmation answer; records the prompts it was shown
#[derive(Clone)]
pub struct ScriptedConfirmProvider {
    answer: Arc<RwLock<bool>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl ScriptedConfirmProvider {
    pub fn new(answer: bool) -> Self {
        Self {
            answer: Arc::new(RwLock::new(answer)),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn set_answer(&self, answer: bool) {
        if let Ok(mut guard) = self.answer.write() {
            *guard = answer;
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().map(|guard| guard.clone()).unwrap_or_default()
    }
}

impl Default for ScriptedConfirmProvider {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ConfirmProvider for ScriptedConfirmProvider {
    fn confirm(&self, message: &str) -> bool {
        if let Ok(mut guard) = self.prompts.lock() {
            guard.push(message.to_string());
        }
        self.answer.read().map(|guard| *guard).unwrap_or(false)
    }
}

/// Handles onto every in-memory provider behind a `Platform`
#[derive(Clone, Default)]
pub struct MemoryPlatform {
    pub time: FixedTimeProvider,
    pub storage: MemoryStorageProvider,
    pub location: MemoryLocationProvider,
    pub clipboard: MemoryClipboardProvider,
    pub notifications: RecordingNotificationProvider,
    pub confirm: ScriptedConfirmProvider,
}

impl MemoryPlatform {
    pub fn with_url(mut self, url: Url) -> Self {
        self.location = MemoryLocationProvider::new(url);
        self
    }

    pub fn with_storage(mut self, storage: MemoryStorageProvider) -> Self {
        self.storage = storage;
        self
    }

    /// Build a `Platform` sharing state with these handles
    pub fn platform(&self) -> Platform {
        Platform::new(
            self.time.clone(),
            self.storage.clone(),
            self.location.clone(),
            self.clipboard.clone(),
            self.notifications.clone(),
            self.confirm.clone(),
        )
    }
}

/// Create an in-memory platform with fresh state
pub fn create_platform() -> Platform {
    MemoryPlatform::default().platform()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_shares_state_with_handles() {
        let handles = MemoryPlatform::default();
        let platform = handles.platform();

        platform.storage_save("key", "value").expect("save");
        platform.notify_info("hello");
        handles.confirm.set_answer(false);

        assert_eq!(handles.storage.get("key"), Some("value".to_string()));
        assert_eq!(handles.storage.writes(), vec!["key".to_string()]);
        assert_eq!(handles.notifications.last(), Some((NoticeKind::Info, "hello".to_string())));
        assert!(!platform.confirm("sure?"));
        assert_eq!(handles.confirm.prompts(), vec!["sure?".to_string()]);
    }

    #[test]
    fn failing_storage_rejects_writes() {
        let storage = MemoryStorageProvider::default();
        storage.set_fail_writes(true);
        assert!(matches!(storage.save("k", "v"), Err(StorageError::Write { .. })));
        assert_eq!(storage.get("k"), None);
    }

    #[test]
    fn fixed_clock_advances() {
        let time = FixedTimeProvider::default();
        time.advance(Duration::seconds(5));
        assert_eq!(time.now().timestamp(), 5);
    }
}
