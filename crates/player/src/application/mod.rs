//! Template store and the intents the presentation layer drives.

pub mod error;
pub mod messages;

mod library;
mod store;

pub use error::{ShareActionError, StorageReadError};
pub use store::{StoreState, TemplateStore};
