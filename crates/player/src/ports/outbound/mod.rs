//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing the template store to reach storage, the page address, the
//! clipboard and the user without depending on concrete implementations.

pub mod platform;

pub use platform::{
    storage_keys, ClipboardError, ClipboardProvider, ConfirmProvider, LocationProvider,
    NoticeKind, NotificationProvider, StorageError, StorageProvider, TimeProvider,
};

#[cfg(test)]
pub use platform::{
    MockClipboardProvider, MockConfirmProvider, MockLocationProvider, MockNotificationProvider,
    MockStorageProvider, MockTimeProvider,
};
