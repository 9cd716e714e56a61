//! Aggregate roots - domain objects that own their related data
//!
//! Each aggregate:
//! - Owns all its constituent parts (enforced by Rust ownership)
//! - Exposes behavior through methods, not public fields
//! - Keeps its invariants on every mutation

pub mod template_library;

pub use template_library::{SaveTarget, TemplateLibrary};
