//! Hearthsheet player crate.
//!
//! Client-side state for the character sheet: the character and campaign
//! stores, the selection wizards, and the storage adapters they persist
//! through. Platform adapters are selected at compile time via `cfg`.

pub mod config;
pub mod infrastructure;
pub mod ports;
pub mod state;

pub use config::PlayerConfig;
pub use state::{CampaignStore, CharacterRegistry, CharacterStore};
