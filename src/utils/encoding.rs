//! Reversible textual encoding for stored values
//!
//! Standard padded base64. This is a transport encoding, not encryption.

use base64::{Engine, engine::general_purpose::STANDARD};

/// Encode a text value as base64 over its UTF-8 bytes
pub fn encode_text(value: &str) -> String {
    STANDARD.encode(value.as_bytes())
}

/// Decode a base64 line back into raw bytes.
///
/// Surrounding ASCII whitespace is ignored.
pub fn decode_bytes(encoded: &str) -> Result<Vec<u8>, base64::DecodeError> {
    STANDARD.decode(encoded.trim_ascii())
}
