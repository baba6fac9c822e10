// Persisted playback operations
use crate::settings::settings::StorageKeys;
use crate::storage::models::{format_flag, format_seconds, parse_flag, parse_seconds, StoredPlayback};
use crate::storage::store::KeyValueStore;

/// Typed access to the three persisted playback entries
pub struct PlaybackStore<S> {
    store: S,
    keys: StorageKeys,
}

impl<S: KeyValueStore> PlaybackStore<S> {
    pub fn new(store: S, keys: StorageKeys) -> Self {
        Self { store, keys }
    }

    pub fn load(&self) -> StoredPlayback {
        StoredPlayback {
            playing: parse_flag(self.store.get_item(&self.keys.playing).as_deref()),
            time: parse_seconds(self.store.get_item(&self.keys.time).as_deref()),
            song: self.store.get_item(&self.keys.song),
        }
    }

    pub fn save_playing(&self, playing: bool) {
        self.write(&self.keys.playing, format_flag(playing));
    }

    pub fn save_time(&self, secs: f64) {
        self.write(&self.keys.time, &format_seconds(secs));
    }

    pub fn save_song(&self, song: &str) {
        self.write(&self.keys.song, song);
    }

    // Losing a write only means resuming from a stale position
    fn write(&self, key: &str, value: &str) {
        if let Err(e) = self.store.set_item(key, value) {
            tracing::debug!("[Storage] Dropped write of {}: {}", key, e);
        }
    }
}
