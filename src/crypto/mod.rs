pub mod encode;
pub mod key;
pub mod sign;

// Re-export main items for easier access
pub use encode::encode_segment;
pub use key::Es256Key;
pub use sign::sign_compact;
