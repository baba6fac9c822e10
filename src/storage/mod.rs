// Storage module
// Persists playback state in the browser's local key-value storage

pub mod models;
pub mod operations;
pub mod store;

#[cfg(target_arch = "wasm32")]
mod local_storage;

#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorage;
pub use models::StoredPlayback;
pub use operations::PlaybackStore;
pub use store::{KeyValueStore, MemoryStore};
