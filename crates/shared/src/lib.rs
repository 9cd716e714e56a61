//! TmplBldr Shared - the share-link format for templates
//!
//! A template travels as a single `data` query parameter:
//! JSON, percent-escaped like `encodeURIComponent`, then standard base64.
//! Links produced by the web builder decode here and vice versa.
//!
//! # Design Principles
//!
//! 1. **No state** - every function is a pure transform
//! 2. **All or nothing** - decoding either yields a whole `Template` or an error
//! 3. **WASM compatible** - must compile for both native and wasm32 targets

pub mod error;
pub mod share;

pub use error::ShareError;
pub use share::{
    decode, encode, share_url, strip_share_token, token_from_url, SHARE_QUERY_PARAM,
};
