//! Platform-specific implementations
//!
//! This module provides platform-specific implementations of the
//! platform abstraction traits defined in ports/outbound/platform.rs.
//!
//! The correct storage backend is selected at compile time based on the
//! target architecture.

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
mod desktop;

mod memory;

#[cfg(target_arch = "wasm32")]
pub use wasm::WasmStorageProvider;

#[cfg(not(target_arch = "wasm32"))]
pub use desktop::DesktopStorageProvider;

pub use memory::{ManualTimeProvider, MemoryStorageProvider, SystemTimeProvider};
