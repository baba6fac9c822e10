// Page commands emitted by the playback controller
use crate::audio::PlayOrigin;
use crate::view::Glyph;

/// Side effects the page driver carries out on the controller's behalf.
///
/// Handlers run to completion before any command executes, so no command
/// can re-enter the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Render(Glyph),
    /// Attach the passive page-wide unlock listeners. No-op when attached.
    ListenForInteraction,
    /// Detach the unlock listeners. No-op when none are attached.
    StopListening,
    /// Start, or restart, the periodic progress save.
    StartSaving { interval_ms: u32 },
    StopSaving,
    /// Request playback and report the outcome to `on_play_settled`.
    Play(PlayOrigin),
    Pause,
}

pub type Commands = Vec<Command>;
