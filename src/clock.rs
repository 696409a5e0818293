use chrono::Utc;

/// Source of the current time for the claims builder
///
/// The pipeline reads the clock exactly once per issuance. Production code
/// uses [`SystemClock`]; tests inject a fixed clock so issued-at and expiry
/// values are reproducible. Implementations must be safe for concurrent
/// reads, the issuer may be shared across threads.
pub trait Clock: Send + Sync {
    /// Current time as seconds since the Unix epoch
    fn now(&self) -> i64;
}

/// Wall-clock time from the operating system
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        Utc::now().timestamp()
    }
}
