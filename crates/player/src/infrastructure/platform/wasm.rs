//! WASM platform implementations
//!
//! Provides platform-specific implementations for web browsers using
//! web-sys and js-sys.

use crate::ports::outbound::{
    ClipboardError, ClipboardProvider, ConfirmProvider, LocationProvider, NoticeKind,
    NotificationProvider, StorageError, StorageProvider, TimeProvider,
};
use crate::state::Platform;
use chrono::{DateTime, Utc};
use futures_util::future::{FutureExt, LocalBoxFuture};
use url::Url;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

fn js_message(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"))
}

/// WASM time provider using `Date.now()`
#[derive(Clone, Default)]
pub struct WasmTimeProvider;

impl TimeProvider for WasmTimeProvider {
    fn now(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(js_sys::Date::now() as i64).unwrap_or_default()
    }
}

/// WASM storage provider using localStorage
#[derive(Clone, Default)]
pub struct WasmStorageProvider;

impl WasmStorageProvider {
    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl StorageProvider for WasmStorageProvider {
    fn load(&self, key: &str) -> Option<String> {
        Self::local_storage()?.get_item(key).ok()?
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = Self::local_storage().ok_or(StorageError::Unavailable)?;
        storage.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            message: js_message(&e),
        })
    }
}

/// WASM location provider over `window.location` and `history.replaceState`
#[derive(Clone, Default)]
pub struct WasmLocationProvider;

impl LocationProvider for WasmLocationProvider {
    fn current_url(&self) -> Option<Url> {
        let href = web_sys::window()?.location().href().ok()?;
        Url::parse(&href).ok()
    }

    fn replace_url(&self, url: &Url) {
        let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
            tracing::warn!("History API unavailable; address not replaced");
            return;
        };
        if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(url.as_str())) {
            tracing::warn!("Failed to replace page address: {}", js_message(&e));
        }
    }
}

/// WASM clipboard provider using `navigator.clipboard.writeText`
#[derive(Clone, Default)]
pub struct WasmClipboardProvider;

impl ClipboardProvider for WasmClipboardProvider {
    fn write_text(&self, text: &str) -> LocalBoxFuture<'static, Result<(), ClipboardError>> {
        let promise = web_sys::window().map(|w| w.navigator().clipboard().write_text(text));
        async move {
            let promise = promise.ok_or(ClipboardError::Unavailable)?;
            JsFuture::from(promise)
                .await
                .map(|_| ())
                .map_err(|e| ClipboardError::Rejected(js_message(&e)))
        }
        .boxed_local()
    }
}

/// Notifications written to the browser console via tracing
#[derive(Clone, Default)]
pub struct WasmNotificationProvider;

impl NotificationProvider for WasmNotificationProvider {
    fn notify(&self, kind: NoticeKind, message: &str) {
        match kind {
            NoticeKind::Success | NoticeKind::Info => tracing::info!(?kind, "{}", message),
            NoticeKind::Error => tracing::warn!(?kind, "{}", message),
        }
    }
}

/// Confirmation through `window.confirm`
#[derive(Clone, Default)]
pub struct WasmConfirmProvider;

impl ConfirmProvider for WasmConfirmProvider {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}

/// Create platform services for WASM
pub fn create_platform() -> Platform {
    Platform::new(
        WasmTimeProvider,
        WasmStorageProvider,
        WasmLocationProvider,
        WasmClipboardProvider,
        WasmNotificationProvider,
        WasmConfirmProvider,
    )
}
