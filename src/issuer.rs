use crate::{
    clock::{Clock, SystemClock},
    config::TokenConfig,
    crypto::{encode::encode_segment, key::Es256Key, sign::sign_compact},
    error::Result,
    token::{Claims, Header},
};
use std::collections::BTreeMap;

/// Issues signed compact tokens for one issuer/key pair
///
/// The issuer runs the whole pipeline for each call: build the header and
/// claim set, encode each as a base64url segment, sign the joined segments,
/// and assemble the final `header.claims.signature` string.
///
/// Each issuance is a single pass with no shared mutable state, so one
/// `TokenIssuer` may be used concurrently from multiple threads as long as
/// the key handle passed in is not mutated by its owner mid-call.
pub struct TokenIssuer {
    pub config: TokenConfig,
    clock: Box<dyn Clock>,
}

impl TokenIssuer {
    /// Create an issuer that reads the system clock
    ///
    /// # Example
    /// ```rust
    /// use es256_token::{TokenConfig, TokenIssuer};
    ///
    /// let config = TokenConfig::new("ABC123XYZ", "DEF456");
    /// let issuer = TokenIssuer::new(config);
    /// ```
    pub fn new(config: TokenConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }

    /// Create an issuer with an injected clock
    ///
    /// Used by callers that need deterministic issued-at timestamps,
    /// typically tests.
    pub fn with_clock(config: TokenConfig, clock: impl Clock + 'static) -> Self {
        Self {
            config,
            clock: Box::new(clock),
        }
    }

    /// Issue a token with the standard claims only
    ///
    /// # Arguments
    /// * `key` - P-256 private key handle, borrowed for this call only
    ///
    /// # Returns
    /// * `Ok(String)` - Compact token `<header>.<claims>.<signature>`
    /// * `Err(TokenError)` - Configuration, encoding, or signing failure
    ///
    /// # Example
    /// ```rust
    /// use es256_token::{Es256Key, TokenConfig, TokenIssuer};
    ///
    /// let key = Es256Key::from(p256::ecdsa::SigningKey::random(&mut rand::thread_rng()));
    /// let issuer = TokenIssuer::new(TokenConfig::new("ABC123XYZ", "DEF456"));
    ///
    /// let token = issuer.issue(&key).unwrap();
    /// assert_eq!(token.matches('.').count(), 2);
    /// ```
    pub fn issue(&self, key: &Es256Key) -> Result<String> {
        self.issue_with_claims(key, BTreeMap::new())
    }

    /// Issue a token carrying additional custom claims
    ///
    /// Extra entries are flattened into the payload next to `iss`, `iat`
    /// and `exp`; reusing one of those reserved names is a `ConfigError`,
    /// since a duplicate JSON member would let the caller's value shadow
    /// the computed one on a last-wins decoder. Validation order follows
    /// the pipeline: configuration errors surface before any cryptographic
    /// work, and a failed call emits no partial token.
    pub fn issue_with_claims(
        &self,
        key: &Es256Key,
        extra: BTreeMap<String, serde_json::Value>,
    ) -> Result<String> {
        let header = Header::es256(&self.config.key_id)?;
        let claims = Claims::issue(
            &self.config.issuer,
            self.config.ttl,
            extra,
            self.clock.as_ref(),
        )?;

        let header_segment = encode_segment(&header)?;
        let claims_segment = encode_segment(&claims)?;
        sign_compact(&header_segment, &claims_segment, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TokenError;
    use base64::prelude::*;
    use p256::ecdsa::signature::DigestVerifier;
    use p256::ecdsa::{Signature, SigningKey};
    use sha2::{Digest, Sha256};

    struct FixedClock(i64);

    impl Clock for FixedClock {
        fn now(&self) -> i64 {
            self.0
        }
    }

    fn test_key() -> Es256Key {
        Es256Key::from(SigningKey::random(&mut rand::thread_rng()))
    }

    fn test_issuer() -> TokenIssuer {
        let config = TokenConfig::new("ABC123XYZ", "DEF456").with_ttl(8_640_000);
        TokenIssuer::with_clock(config, FixedClock(1_700_000_000))
    }

    #[test]
    fn test_issue_known_scenario() {
        let token = test_issuer().issue(&test_key()).unwrap();
        let segments: Vec<&str> = token.split('.').collect();
        assert_eq!(segments.len(), 3);

        let header = BASE64_URL_SAFE_NO_PAD.decode(segments[0]).unwrap();
        assert_eq!(header, br#"{"alg":"ES256","kid":"DEF456"}"#);

        let claims = BASE64_URL_SAFE_NO_PAD.decode(segments[1]).unwrap();
        assert_eq!(
            claims,
            br#"{"iss":"ABC123XYZ","iat":1700000000,"exp":1708640000}"#
        );
    }

    #[test]
    fn test_expiry_matches_ttl() {
        let config = TokenConfig::new("ABC123XYZ", "DEF456").with_ttl(1200);
        let issuer = TokenIssuer::with_clock(config, FixedClock(1_700_000_000));
        let token = issuer.issue(&test_key()).unwrap();

        let claims_segment = token.split('.').nth(1).unwrap();
        let claims: Claims = serde_json::from_slice(
            &BASE64_URL_SAFE_NO_PAD.decode(claims_segment).unwrap(),
        )
        .unwrap();
        assert_eq!(claims.exp - claims.iat, 1200);
    }

    #[test]
    fn test_issued_token_verifies() {
        let key = test_key();
        let token = test_issuer().issue(&key).unwrap();

        let (signing_input, sig_segment) = token.rsplit_once('.').unwrap();
        let sig_bytes = BASE64_URL_SAFE_NO_PAD.decode(sig_segment).unwrap();
        assert_eq!(sig_bytes.len(), 64);

        let signature = Signature::from_slice(&sig_bytes).unwrap();
        let digest = Sha256::new_with_prefix(signing_input.as_bytes());
        key.verifying_key().verify_digest(digest, &signature).unwrap();
    }

    #[test]
    fn test_issue_with_extra_claims() {
        let mut extra = BTreeMap::new();
        extra.insert("scope".to_string(), serde_json::json!("catalog-read"));
        let token = test_issuer()
            .issue_with_claims(&test_key(), extra)
            .unwrap();

        let claims_segment = token.split('.').nth(1).unwrap();
        let value: serde_json::Value = serde_json::from_slice(
            &BASE64_URL_SAFE_NO_PAD.decode(claims_segment).unwrap(),
        )
        .unwrap();
        assert_eq!(value["iss"], "ABC123XYZ");
        assert_eq!(value["scope"], "catalog-read");
    }

    #[test]
    fn test_reserved_extra_claim_rejected() {
        let mut extra = BTreeMap::new();
        extra.insert("exp".to_string(), serde_json::json!(9_999_999_999_i64));
        let result = test_issuer().issue_with_claims(&test_key(), extra);
        assert!(matches!(result, Err(TokenError::ConfigError(_))));
    }

    #[test]
    fn test_empty_issuer_rejected() {
        let config = TokenConfig::new("", "DEF456");
        let issuer = TokenIssuer::with_clock(config, FixedClock(1_700_000_000));
        let result = issuer.issue(&test_key());
        assert!(matches!(result, Err(TokenError::ConfigError(_))));
    }

    #[test]
    fn test_empty_key_id_rejected() {
        let config = TokenConfig::new("ABC123XYZ", "");
        let issuer = TokenIssuer::with_clock(config, FixedClock(1_700_000_000));
        let result = issuer.issue(&test_key());
        assert!(matches!(result, Err(TokenError::ConfigError(_))));
    }

    #[test]
    fn test_non_positive_ttl_rejected() {
        let config = TokenConfig::new("ABC123XYZ", "DEF456").with_ttl(0);
        let issuer = TokenIssuer::with_clock(config, FixedClock(1_700_000_000));
        let result = issuer.issue(&test_key());
        assert!(matches!(result, Err(TokenError::ConfigError(_))));
    }

    #[test]
    fn test_system_clock_issuer() {
        let before = chrono::Utc::now().timestamp();
        let issuer = TokenIssuer::new(TokenConfig::new("ABC123XYZ", "DEF456"));
        let token = issuer.issue(&test_key()).unwrap();

        let claims_segment = token.split('.').nth(1).unwrap();
        let claims: Claims = serde_json::from_slice(
            &BASE64_URL_SAFE_NO_PAD.decode(claims_segment).unwrap(),
        )
        .unwrap();
        assert!(claims.iat >= before);
        assert_eq!(claims.exp - claims.iat, crate::config::DEFAULT_TTL_SECS);
    }
}
