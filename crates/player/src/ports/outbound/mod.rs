//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing the state layer to interact with storage, clocks, and audio
//! playback without depending on concrete implementations.

pub mod audio;
pub mod platform;

pub use audio::{AudioEvent, AudioPlayer};
pub use platform::{storage_keys, StorageProvider, TimeProvider};
