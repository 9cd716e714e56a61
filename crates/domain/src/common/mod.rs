//! Common utility functions shared across the TmplBldr crates.
//!
//! # Design Principles
//!
//! - **Pure functions only** - no side effects, no I/O
//! - **WASM compatible** - all code must work in both native and WASM targets

pub mod collate;
pub mod number;
pub mod string;

// Re-export commonly used functions at crate root for convenience
pub use collate::locale_cmp;
pub use number::{coerce_number, finite_or_zero};
pub use string::{names_match, none_if_empty, normalize_name};
