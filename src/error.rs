use std::fmt;

/// Errors raised while building and signing a token
///
/// Each variant carries context about what went wrong. Configuration problems
/// are reported before any cryptographic work starts, so a failed call never
/// leaves a partially built token behind.
///
/// # Example
/// ```rust
/// use es256_token::{TokenError, Result};
///
/// fn handle_issue_result(result: Result<String>) {
///     match result {
///         Ok(token) => println!("Token: {}", token),
///         Err(TokenError::ConfigError(msg)) => println!("Bad configuration: {}", msg),
///         Err(e) => println!("Other error: {}", e),
///     }
/// }
/// ```
#[derive(Debug)]
pub enum TokenError {
    /// Token configuration is unusable
    ///
    /// This error occurs when:
    /// - The issuer is empty
    /// - The key identifier is empty
    /// - The validity duration is zero or negative
    ConfigError(String),

    /// Private key is missing, malformed, or on the wrong curve
    ///
    /// This error occurs when:
    /// - The PKCS#8 PEM cannot be parsed
    /// - The key is not on curve P-256 (ES256 accepts no other curve)
    KeyError(String),

    /// The ECDSA signing primitive reported failure
    ///
    /// Signing has no side effects, so the caller may simply retry
    /// with a fresh invocation.
    SigningError(String),

    /// Header or claims could not be serialized to JSON
    ///
    /// This error occurs when a custom claim value cannot be
    /// represented by the serializer.
    EncodingError(String),
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenError::ConfigError(msg) => {
                write!(f, "Invalid token configuration: {msg}")
            }
            TokenError::KeyError(msg) => {
                write!(f, "Unusable signing key: {msg}")
            }
            TokenError::SigningError(msg) => {
                write!(f, "ECDSA signing failed: {msg}")
            }
            TokenError::EncodingError(msg) => {
                write!(f, "Segment encoding failed: {msg}")
            }
        }
    }
}

impl std::error::Error for TokenError {}

pub type Result<T> = std::result::Result<T, TokenError>;
