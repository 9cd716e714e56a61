//! Template <-> share token codec and share-URL helpers

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

use tmplbldr_domain::Template;

use crate::ShareError;

/// Query parameter carrying the token
pub const SHARE_QUERY_PARAM: &str = "data";

/// Characters `encodeURIComponent` leaves alone: `A-Z a-z 0-9 - _ . ! ~ * ' ( )`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Standard alphabet, padding optional on decode
const LENIENT_STANDARD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Encode a template as an opaque ASCII share token.
pub fn encode(template: &Template) -> Result<String, ShareError> {
    let json = serde_json::to_string(template).map_err(ShareError::Serialize)?;
    let escaped = utf8_percent_encode(&json, URI_COMPONENT).to_string();
    Ok(STANDARD.encode(escaped))
}

/// Decode a share token back into a template.
///
/// Accepts the URL-safe alphabet and missing padding as well, and spaces a
/// query parser made out of `+`. Nothing partial is ever returned.
pub fn decode(token: &str) -> Result<Template, ShareError> {
    let normalized: String = token
        .trim()
        .chars()
        .map(|c| match c {
            ' ' => '+',
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();

    let bytes = LENIENT_STANDARD.decode(normalized)?;
    let escaped = std::str::from_utf8(&bytes)?;
    let json = percent_decode_str(escaped).decode_utf8()?;

    let mut template: Template =
        serde_json::from_str(&json).map_err(ShareError::InvalidTemplate)?;
    let reissued = template.ensure_unique_ids();
    if reissued > 0 {
        tracing::debug!(reissued, "Re-issued repeated ids in shared template");
    }
    Ok(template)
}

/// `<origin><path>?data=<token>` for the given page.
///
/// The token goes into the query as is, without form encoding. Other query
/// parameters and the fragment are dropped.
pub fn share_url(page: &Url, template: &Template) -> Result<Url, ShareError> {
    let token = encode(template)?;
    let mut url = strip_share_token(page);
    url.set_query(Some(&format!("{SHARE_QUERY_PARAM}={token}")));
    Ok(url)
}

/// The share token carried by a page address, if any.
pub fn token_from_url(url: &Url) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| key == SHARE_QUERY_PARAM)
        .map(|(_, value)| value.into_owned())
}

/// The page address without its query string or fragment.
pub fn strip_share_token(url: &Url) -> Url {
    let mut stripped = url.clone();
    stripped.set_query(None);
    stripped.set_fragment(None);
    stripped
}
