use crate::error::{Result, TokenError};
use base64::prelude::*;
use serde::Serialize;

/// Serialize a header or claims value into one compact-form segment
///
/// The value becomes its JSON byte representation, then base64url without
/// padding or line breaks. Output is a pure function of the field values:
/// serde emits struct fields in declaration order with no incidental
/// whitespace, so encoding the same value twice yields identical segments.
///
/// # Example
/// ```rust
/// use es256_token::crypto::encode_segment;
///
/// let header = es256_token::Header::es256("DEF456").unwrap();
/// let segment = encode_segment(&header).unwrap();
/// assert!(!segment.contains('='));
/// ```
pub fn encode_segment<T: Serialize>(value: &T) -> Result<String> {
    let json = serde_json::to_vec(value)
        .map_err(|e| TokenError::EncodingError(format!("Failed to serialize segment: {e}")))?;
    Ok(BASE64_URL_SAFE_NO_PAD.encode(json))
}
