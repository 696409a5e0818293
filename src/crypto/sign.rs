use crate::{
    crypto::key::Es256Key,
    error::{Result, TokenError},
};
use base64::prelude::*;
use p256::ecdsa::{signature::DigestSigner, Signature};
use sha2::{Digest, Sha256};

/// Sign the two encoded segments and assemble the compact token
///
/// The signing input is `header_segment + "." + claims_segment`, treated as
/// opaque bytes from here on. The input is hashed with SHA-256 and signed
/// with ECDSA over P-256; the signature goes into the third segment in the
/// fixed-width raw form rather than DER.
///
/// # Errors
/// `SigningError` if the ECDSA primitive reports failure. Signing has no
/// side effects, so the call may be retried.
pub fn sign_compact(header_segment: &str, claims_segment: &str, key: &Es256Key) -> Result<String> {
    let signing_input = format!("{header_segment}.{claims_segment}");

    let digest = Sha256::new_with_prefix(signing_input.as_bytes());
    let signature: Signature = key
        .signing_key()
        .try_sign_digest(digest)
        .map_err(|e| TokenError::SigningError(format!("signing primitive failure: {e}")))?;

    let raw = raw_signature(&signature);
    Ok(format!(
        "{signing_input}.{}",
        BASE64_URL_SAFE_NO_PAD.encode(raw)
    ))
}

/// Re-encode a signature as fixed-width raw `r ‖ s`
///
/// ES256 verifiers take the two scalars as 32-byte big-endian values,
/// zero-padded and concatenated into exactly 64 bytes. The variable-length
/// DER form that general-purpose ECDSA code emits is not accepted for this
/// algorithm identifier, so the scalars are split out explicitly here.
fn raw_signature(signature: &Signature) -> [u8; 64] {
    let (r, s) = signature.split_bytes();
    let mut raw = [0u8; 64];
    raw[..32].copy_from_slice(&r);
    raw[32..].copy_from_slice(&s);
    raw
}
