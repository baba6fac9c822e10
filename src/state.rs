// Per-page-view session state

/// Where the widget stands in the unlock/play cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Wants to play but the browser has not allowed it yet.
    LockedWaiting,
    Playing,
    PausedByUser,
}

#[derive(Debug, Clone)]
pub struct SessionState {
    pub song: String,
    pub wants_to_play: bool,
    pub unlocked: bool,
    /// Persisted playing flag as read when the page loaded.
    pub was_playing: bool,
    /// Stored position, already zeroed if it belonged to another track.
    pub resume_at: f64,
    pub listening: bool,
    pub saving: bool,
}

impl SessionState {
    pub fn new(song: String, was_playing: bool, resume_at: f64) -> Self {
        Self {
            song,
            wants_to_play: true,
            unlocked: false,
            was_playing,
            resume_at,
            listening: false,
            saving: false,
        }
    }

    pub fn phase(&self) -> Phase {
        if !self.wants_to_play {
            Phase::PausedByUser
        } else if self.unlocked {
            Phase::Playing
        } else {
            Phase::LockedWaiting
        }
    }
}
