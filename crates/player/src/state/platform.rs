//! Platform DI Container
//!
//! This module provides the `Platform` struct - a dependency injection container
//! that aggregates all platform-specific service implementations behind port traits.
//!
//! Usage:
//! - Created by `create_platform()` in platform/desktop.rs or platform/wasm.rs
//! - Created from in-memory fakes in tests (platform/memory.rs)
//! - Handed to `TemplateStore::open`

use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures_util::future::LocalBoxFuture;
use url::Url;

use crate::ports::outbound::{
    ClipboardError, ClipboardProvider, ConfirmProvider, LocationProvider, NoticeKind,
    NotificationProvider, StorageError, StorageProvider, TimeProvider,
};

/// Unified platform services container
///
/// Provides all platform abstractions through a single injectable type.
/// Cloning is cheap; clones share the same providers.
#[derive(Clone)]
pub struct Platform {
    time: Arc<dyn TimeProvider>,
    storage: Arc<dyn StorageProvider>,
    location: Arc<dyn LocationProvider>,
    clipboard: Arc<dyn ClipboardProvider>,
    notifications: Arc<dyn NotificationProvider>,
    confirm: Arc<dyn ConfirmProvider>,
}

impl Platform {
    /// Create a new Platform with the given providers
    pub fn new<Tm, S, L, C, N, Cf>(
        time: Tm,
        storage: S,
        location: L,
        clipboard: C,
        notifications: N,
        confirm: Cf,
    ) -> Self
    where
        Tm: TimeProvider + 'static,
        S: StorageProvider + 'static,
        L: LocationProvider + 'static,
        C: ClipboardProvider + 'static,
        N: NotificationProvider + 'static,
        Cf: ConfirmProvider + 'static,
    {
        Self {
            time: Arc::new(time),
            storage: Arc::new(storage),
            location: Arc::new(location),
            clipboard: Arc::new(clipboard),
            notifications: Arc::new(notifications),
            confirm: Arc::new(confirm),
        }
    }

    // -------------------------------------------------------------------------
    // Time operations
    // -------------------------------------------------------------------------

    pub fn now(&self) -> DateTime<Utc> {
        self.time.now()
    }

    // -------------------------------------------------------------------------
    // Storage operations
    // -------------------------------------------------------------------------

    /// Load a string value by key, returns None if not found
    pub fn storage_load(&self, key: &str) -> Option<String> {
        self.storage.load(key)
    }

    /// Save a string value with the given key
    pub fn storage_save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage.save(key, value)
    }

    // -------------------------------------------------------------------------
    // Page address operations
    // -------------------------------------------------------------------------

    pub fn current_url(&self) -> Option<Url> {
        self.location.current_url()
    }

    pub fn replace_url(&self, url: &Url) {
        self.location.replace_url(url)
    }

    // -------------------------------------------------------------------------
    // Clipboard operations
    // -------------------------------------------------------------------------

    pub fn write_clipboard(&self, text: &str) -> LocalBoxFuture<'static, Result<(), ClipboardError>> {
        self.clipboard.write_text(text)
    }

    // -------------------------------------------------------------------------
    // User interaction
    // -------------------------------------------------------------------------

    pub fn notify_success(&self, message: &str) {
        self.notifications.notify(NoticeKind::Success, message)
    }

    pub fn notify_error(&self, message: &str) {
        self.notifications.notify(NoticeKind::Error, message)
    }

    pub fn notify_info(&self, message: &str) {
        self.notifications.notify(NoticeKind::Info, message)
    }

    /// Ask the user to confirm a destructive action
    pub fn confirm(&self, message: &str) -> bool {
        self.confirm.confirm(message)
    }
}
