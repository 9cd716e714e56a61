//! Template builder player crate.
//!
//! This crate contains the template store, the intents that drive it, and
//! the platform adapters it runs on.
//! Multi-platform support is provided via compile-time `cfg` selection.

pub mod application;
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod infrastructure;
pub mod ports;
pub mod state;

// Re-export commonly used entrypoints
pub use application::{StoreState, TemplateStore};
pub use state::Platform;
