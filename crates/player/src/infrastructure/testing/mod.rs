//! Test-only helpers shared across modules.

pub mod fixtures;

pub use crate::infrastructure::platform::{ManualTimeProvider, MemoryStorageProvider};
