use crate::{
    clock::Clock,
    error::{Result, TokenError},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Algorithm identifier for ECDSA over P-256 with SHA-256
pub const ALG_ES256: &str = "ES256";

/// Token header: algorithm and key identifier
///
/// The algorithm is fixed to `ES256`; the key identifier tells the verifier
/// which public key to look up. `typ` is omitted from the serialized form
/// unless set, matching what the consuming API expects.
///
/// Immutable once built.
///
/// # Example
/// ```rust
/// let header = es256_token::Header::es256("DEF456").unwrap();
/// assert_eq!(header.alg, "ES256");
/// assert_eq!(header.kid, "DEF456");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Header {
    /// Signing algorithm, always `"ES256"`
    pub alg: String,
    /// Key identifier of the signing key
    pub kid: String,
    /// Optional token type label (e.g. `"JWT"`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typ: Option<String>,
}

impl Header {
    /// Build an ES256 header for the given key identifier
    ///
    /// # Errors
    /// `ConfigError` if `key_id` is empty.
    pub fn es256(key_id: &str) -> Result<Self> {
        if key_id.trim().is_empty() {
            return Err(TokenError::ConfigError("key identifier is empty".to_string()));
        }
        Ok(Self {
            alg: ALG_ES256.to_string(),
            kid: key_id.to_string(),
            typ: None,
        })
    }

    /// Set the token type label for verifiers that require one
    ///
    /// # Example
    /// ```rust
    /// let header = es256_token::Header::es256("DEF456").unwrap().with_typ("JWT");
    /// assert_eq!(header.typ.as_deref(), Some("JWT"));
    /// ```
    pub fn with_typ(mut self, typ: impl Into<String>) -> Self {
        self.typ = Some(typ.into());
        self
    }
}

/// Claim names carried by the typed fields; custom claims may not reuse them
const RESERVED_CLAIMS: [&str; 3] = ["iss", "iat", "exp"];

/// Token claims: issuer plus the time-bound fields
///
/// Required fields are typed; anything beyond them goes through the bounded
/// `extra` map rather than an open-ended dynamic object. Extra entries are
/// flattened into the payload on serialization, so the reserved names `iss`,
/// `iat` and `exp` are rejected at build time — a duplicate member would
/// otherwise let a last-wins decoder read a caller-supplied timestamp.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// Issuer identifier
    pub iss: String,
    /// Issued-at timestamp (seconds since epoch)
    pub iat: i64,
    /// Expiry timestamp (seconds since epoch), always greater than `iat`
    pub exp: i64,
    /// Additional string-keyed claims, flattened into the payload
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Claims {
    /// Build the claim set for a token issued now
    ///
    /// Reads the clock once; `exp = iat + ttl`.
    ///
    /// # Errors
    /// `ConfigError` if `issuer` is empty, `ttl` is not positive, the expiry
    /// timestamp would overflow, or `extra` reuses a reserved claim name.
    pub fn issue(
        issuer: &str,
        ttl: i64,
        extra: BTreeMap<String, serde_json::Value>,
        clock: &dyn Clock,
    ) -> Result<Self> {
        if issuer.trim().is_empty() {
            return Err(TokenError::ConfigError("issuer is empty".to_string()));
        }
        if let Some(name) = RESERVED_CLAIMS.iter().find(|name| extra.contains_key(**name)) {
            return Err(TokenError::ConfigError(format!(
                "custom claim reuses the reserved name \"{name}\""
            )));
        }
        if ttl <= 0 {
            return Err(TokenError::ConfigError(format!(
                "validity must be positive, got {ttl} seconds"
            )));
        }
        let iat = clock.now();
        let exp = iat.checked_add(ttl).ok_or_else(|| {
            TokenError::ConfigError(format!("validity of {ttl} seconds overflows the expiry"))
        })?;
        Ok(Self {
            iss: issuer.to_string(),
            iat,
            exp,
            extra,
        })
    }
}
