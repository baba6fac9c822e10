// Media element abstraction

/// The page's single playable media resource.
///
/// Transport changes (play, pause) are requested through page commands so
/// the asynchronous play result can be routed back to the controller; this
/// trait only covers the synchronous reads and the seek.
pub trait MediaElement {
    fn current_time(&self) -> f64;
    fn set_current_time(&self, secs: f64);
    /// Track length in seconds, NaN until metadata is available.
    fn duration(&self) -> f64;
    fn is_paused(&self) -> bool;
    /// Track identifier configured on the element, if any.
    fn track_id(&self) -> Option<String>;
}

/// Why a play request was issued
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOrigin {
    Autoplay,
    Unlock,
    Toggle,
    Loop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    Started,
    /// Declined by the browser's autoplay policy.
    Blocked,
}

impl PlayOutcome {
    pub fn from_started(started: bool) -> Self {
        if started {
            Self::Started
        } else {
            Self::Blocked
        }
    }
}
