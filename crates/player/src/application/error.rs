//! Application-layer errors

use tmplbldr_domain::DomainError;
use tmplbldr_shared::ShareError;

use crate::ports::outbound::ClipboardError;

/// A persisted slice could not be used; always recovered with defaults
#[derive(Debug, thiserror::Error)]
pub enum StorageReadError {
    #[error("Nothing stored under '{0}'")]
    Missing(&'static str),
    #[error("Malformed data under '{key}': {source}")]
    Malformed {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Building or copying a share link failed
#[derive(Debug, thiserror::Error)]
pub enum ShareActionError {
    #[error(transparent)]
    NotFound(#[from] DomainError),
    #[error("No page address to build a share link from")]
    NoPageAddress,
    #[error("Encode error: {0}")]
    Encode(#[from] ShareError),
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] ClipboardError),
}
