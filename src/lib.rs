//! # es256-token
//!
//! A Rust library for issuing **short-lived ES256 bearer tokens** in compact
//! form, for APIs that authenticate clients with elliptic-curve-signed
//! developer tokens.
//!
//! ## Features
//!
//! - **Typed claim set** - `iss`/`iat`/`exp` plus a bounded map of custom claims
//! - **Fixed-width signatures** - raw `r ‖ s` output (64 bytes for P-256),
//!   never the DER form that standard decoders reject for ES256
//! - **Explicit configuration** - issuer, key id and TTL are passed in by the
//!   caller, no process-wide state
//! - **Injectable clock** - deterministic issued-at timestamps for testing
//! - **No key loading** - the caller reads and owns the key material; the
//!   pipeline borrows a typed P-256 handle per call
//!
//! ## Quick Start
//!
//! ```rust
//! use es256_token::{Es256Key, TokenConfig, TokenIssuer};
//!
//! // The caller loads the .p8 key material; here a fresh key stands in.
//! let key = Es256Key::from(p256::ecdsa::SigningKey::random(&mut rand::thread_rng()));
//!
//! let config = TokenConfig::new("ABC123XYZ", "DEF456"); // issuer, key id
//! let issuer = TokenIssuer::new(config);
//!
//! match issuer.issue(&key) {
//!     Ok(token) => println!("Bearer {}", token),
//!     Err(e) => println!("Issuance failed: {}", e),
//! }
//! ```
//!
//! Token verification is out of scope; only issuance is implemented.

pub mod clock;
pub mod config;
pub mod crypto;
pub mod error;
pub mod issuer;
pub mod token;

// Re-export main types for easier access
pub use clock::{Clock, SystemClock};
pub use config::{TokenConfig, DEFAULT_TTL_SECS};
pub use crypto::key::Es256Key;
pub use error::{Result, TokenError};
pub use issuer::TokenIssuer;
pub use token::{Claims, Header, ALG_ES256};
