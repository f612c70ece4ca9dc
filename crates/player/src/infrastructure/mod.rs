//! Infrastructure layer - storage adapters and field persistence.
//!
//! Platform adapters implement the outbound ports; the persistence module
//! layers typed, per-field JSON storage on top of them.

pub mod error;
pub mod persistence;
pub mod platform;

#[cfg(test)]
pub mod testing;

pub use error::StorageError;
