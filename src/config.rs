use serde::Deserialize;

/// Default token validity: 100 days, in seconds.
pub const DEFAULT_TTL_SECS: i64 = 8_640_000;

/// Configuration for token issuance
///
/// Constructed by the caller and passed into the issuer explicitly; the crate
/// holds no process-wide configuration state. The issuer and key identifier
/// come from the signing-key provider (the developer account that owns the
/// key), the TTL bounds how long issued tokens stay valid.
///
/// Empty strings are accepted here so a config can be deserialized before the
/// values are known; they are rejected with `ConfigError` at issue time.
///
/// # Example
/// ```rust
/// use es256_token::TokenConfig;
///
/// let config = TokenConfig::new("ABC123XYZ", "DEF456");
/// assert_eq!(config.ttl, es256_token::DEFAULT_TTL_SECS);
/// ```
#[derive(Clone, Debug, Deserialize)]
pub struct TokenConfig {
    /// Issuer identifier, placed in the `iss` claim
    pub issuer: String,
    /// Key identifier, placed in the header `kid` field
    ///
    /// An opaque label telling the verifier which public key to use,
    /// enabling key rotation on the consuming side.
    pub key_id: String,
    /// Token Time To Live (TTL) in seconds
    ///
    /// This determines how long issued tokens remain valid. Must be
    /// positive. Defaults to 100 days, the longest lifetime the
    /// originating API accepts.
    #[serde(default = "default_ttl")]
    pub ttl: i64,
}

fn default_ttl() -> i64 {
    DEFAULT_TTL_SECS
}

impl TokenConfig {
    /// Create a configuration with the default 100-day TTL
    pub fn new(issuer: impl Into<String>, key_id: impl Into<String>) -> Self {
        Self {
            issuer: issuer.into(),
            key_id: key_id.into(),
            ttl: DEFAULT_TTL_SECS,
        }
    }

    /// Override the token TTL in seconds
    pub fn with_ttl(mut self, ttl: i64) -> Self {
        self.ttl = ttl;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ttl_is_100_days() {
        let config = TokenConfig::new("issuer", "kid");
        assert_eq!(config.ttl, 100 * 24 * 60 * 60);
    }

    #[test]
    fn test_deserialize_without_ttl() {
        let config: TokenConfig =
            serde_json::from_str(r#"{"issuer":"ABC123XYZ","key_id":"DEF456"}"#).unwrap();
        assert_eq!(config.issuer, "ABC123XYZ");
        assert_eq!(config.key_id, "DEF456");
        assert_eq!(config.ttl, DEFAULT_TTL_SECS);
    }

    #[test]
    fn test_with_ttl() {
        let config = TokenConfig::new("issuer", "kid").with_ttl(1200);
        assert_eq!(config.ttl, 1200);
    }
}
