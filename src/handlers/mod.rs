// handlers/mod.rs - HTTP handlers
//
// Reads are public; mutations require a bearer token and, for existing
// stores, ownership confirmed by services::ownership.
pub mod root;
pub mod stores;

pub use root::{health, root};
