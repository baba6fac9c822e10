// Playback controller
use crate::audio::{MediaElement, PlayOrigin, PlayOutcome};
use crate::commands::{Command, Commands};
use crate::settings::settings::PlaybackSettings;
use crate::state::{Phase, SessionState};
use crate::storage::{KeyValueStore, PlaybackStore};
use crate::view::Glyph;

/// Arbitrates between the browser's autoplay policy and the visitor's intent,
/// and keeps the persisted position current.
///
/// Every handler returns the page commands to run once it has finished.
pub struct PlaybackController<M, S> {
    media: M,
    store: PlaybackStore<S>,
    state: SessionState,
    save_interval_ms: u32,
}

impl<M: MediaElement, S: KeyValueStore> PlaybackController<M, S> {
    pub fn new(media: M, store: PlaybackStore<S>, playback: &PlaybackSettings) -> Self {
        let song = media
            .track_id()
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| playback.default_song.clone());

        let stored = store.load();
        let resume_at = match stored.song.as_deref() {
            Some(previous) if previous != song => {
                tracing::debug!("[Controller] Track changed from {} to {}, starting over", previous, song);
                0.0
            }
            _ => stored.time,
        };
        store.save_song(&song);

        tracing::debug!(
            "[Controller] Loaded {} (was playing: {}, resume at {:.2}s)",
            song,
            stored.playing,
            resume_at
        );

        Self {
            media,
            store,
            state: SessionState::new(song, stored.playing, resume_at),
            save_interval_ms: playback.save_interval_ms,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Initial toggle rendering.
    pub fn mount(&self) -> Commands {
        vec![Command::Render(Glyph::Play)]
    }

    pub fn on_metadata_loaded(&mut self) -> Commands {
        let resume_at = self.state.resume_at;
        // NaN duration fails the comparison
        if self.state.was_playing && resume_at > 0.0 && resume_at < self.media.duration() {
            self.media.set_current_time(resume_at);
        }
        self.try_play(PlayOrigin::Autoplay)
    }

    pub fn on_play_settled(&mut self, origin: PlayOrigin, outcome: PlayOutcome) -> Commands {
        match (origin, outcome) {
            (PlayOrigin::Autoplay | PlayOrigin::Unlock, PlayOutcome::Started) => {
                tracing::debug!("[Controller] Unlocked by {:?}", origin);
                self.state.unlocked = true;
                let mut commands = vec![Command::Render(Glyph::Pause)];
                commands.extend(self.stop_listening());
                commands
            }
            (PlayOrigin::Autoplay, PlayOutcome::Blocked) => {
                if self.state.unlocked {
                    // The toggle already took over
                    return Vec::new();
                }
                tracing::info!("[Controller] Autoplay blocked, waiting for a user gesture");
                if !self.state.was_playing {
                    self.media.set_current_time(0.0);
                }
                let mut commands = vec![Command::Render(Glyph::Play)];
                commands.extend(self.listen());
                commands
            }
            (PlayOrigin::Unlock, PlayOutcome::Blocked) => {
                tracing::debug!("[Controller] Gesture did not unlock playback");
                Vec::new()
            }
            (PlayOrigin::Toggle | PlayOrigin::Loop, PlayOutcome::Blocked) => {
                tracing::warn!("[Controller] {:?} play request was refused", origin);
                Vec::new()
            }
            // Unlock listeners left over from a blocked autoplay are inert now
            (PlayOrigin::Toggle, PlayOutcome::Started) => self.stop_listening(),
            (PlayOrigin::Loop, PlayOutcome::Started) => Vec::new(),
        }
    }

    /// A page-wide gesture while waiting for unlock.
    pub fn on_interaction(&mut self, from_toggle: bool) -> Commands {
        // The toggle's own activation is handled by on_toggle
        if from_toggle || !self.state.listening || !self.state.wants_to_play || self.state.unlocked {
            return Vec::new();
        }
        if !self.state.was_playing {
            self.media.set_current_time(0.0);
        }
        vec![Command::Play(PlayOrigin::Unlock)]
    }

    pub fn on_toggle(&mut self) -> Commands {
        if self.media.is_paused() {
            self.state.wants_to_play = true;
            if !self.state.unlocked {
                self.media.set_current_time(0.0);
            }
            self.state.unlocked = true;
            vec![Command::Play(PlayOrigin::Toggle)]
        } else {
            self.state.wants_to_play = false;
            let mut commands = vec![Command::Pause];
            commands.extend(self.stop_listening());
            commands
        }
    }

    /// Media `play` signal.
    pub fn on_media_play(&mut self) -> Commands {
        self.store.save_playing(true);
        self.state.saving = true;
        vec![
            Command::Render(Glyph::Pause),
            Command::StartSaving {
                interval_ms: self.save_interval_ms,
            },
        ]
    }

    /// Media `pause` signal. Persists before returning.
    pub fn on_media_pause(&mut self) -> Commands {
        self.store.save_playing(false);
        self.store.save_time(self.media.current_time());

        let mut commands = vec![Command::Render(Glyph::Play)];
        if self.state.saving {
            self.state.saving = false;
            commands.push(Command::StopSaving);
        }
        commands
    }

    pub fn on_media_ended(&mut self) -> Commands {
        self.media.set_current_time(0.0);
        vec![Command::Play(PlayOrigin::Loop)]
    }

    pub fn on_save_tick(&mut self) {
        self.store.save_time(self.media.current_time());
    }

    pub fn on_before_unload(&mut self) {
        self.store.save_time(self.media.current_time());
    }

    fn try_play(&self, origin: PlayOrigin) -> Commands {
        if !self.state.wants_to_play {
            return Vec::new();
        }
        vec![Command::Play(origin)]
    }

    fn listen(&mut self) -> Commands {
        if self.state.listening {
            return Vec::new();
        }
        self.state.listening = true;
        vec![Command::ListenForInteraction]
    }

    fn stop_listening(&mut self) -> Commands {
        if !self.state.listening {
            return Vec::new();
        }
        self.state.listening = false;
        vec![Command::StopListening]
    }
}
