//! Platform abstraction ports for cross-platform compatibility
//!
//! These traits abstract platform-specific operations so that:
//! 1. The template store remains platform-agnostic
//! 2. Platform-specific code is isolated in infrastructure
//! 3. Code becomes easily testable with mock implementations
//!
//! The `Platform` struct (DI container) that aggregates these traits lives in
//! `state/platform.rs`. Ports layer contains only trait definitions.

use chrono::{DateTime, Utc};
use futures_util::future::LocalBoxFuture;
use thiserror::Error;
use url::Url;

/// Durable storage write failure
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("Storage is unavailable")]
    Unavailable,

    #[error("Failed to write '{key}': {message}")]
    Write { key: String, message: String },
}

/// Clipboard write failure
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("Clipboard is unavailable")]
    Unavailable,

    #[error("Clipboard write rejected: {0}")]
    Rejected(String),
}

/// Wall-clock time
#[cfg_attr(test, mockall::automock)]
pub trait TimeProvider {
    fn now(&self) -> DateTime<Utc>;
}

/// Persistent key-value storage abstraction (localStorage/file-based)
#[cfg_attr(test, mockall::automock)]
pub trait StorageProvider {
    /// Load a string value by key, returns None if not found
    fn load(&self, key: &str) -> Option<String>;

    /// Save a string value with the given key, replacing any previous value
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// The address of the page the builder runs on
#[cfg_attr(test, mockall::automock)]
pub trait LocationProvider {
    fn current_url(&self) -> Option<Url>;

    /// Replace the visible address without navigating
    fn replace_url(&self, url: &Url);
}

/// Asynchronous clipboard writes
#[cfg_attr(test, mockall::automock)]
pub trait ClipboardProvider {
    fn write_text(&self, text: &str) -> LocalBoxFuture<'static, Result<(), ClipboardError>>;
}

/// Kind of user-facing notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

/// Toast-style notifications shown to the user
#[cfg_attr(test, mockall::automock)]
pub trait NotificationProvider {
    fn notify(&self, kind: NoticeKind, message: &str);
}

/// Blocking yes/no confirmation before destructive actions
#[cfg_attr(test, mockall::automock)]
pub trait ConfirmProvider {
    fn confirm(&self, message: &str) -> bool;
}

/// Storage key constants
///
/// Same keys as the web builder, so existing browser data loads.
pub mod storage_keys {
    pub const WORKING_TEMPLATE: &str = "uo-template-builder-data";
    pub const SAVED_TEMPLATES: &str = "uo-template-builder-list";
}
