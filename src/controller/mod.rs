// Playback controller module
// Autoplay unlock state machine and progress persistence

#[allow(clippy::module_inception)]
pub mod controller;

#[cfg(test)]
pub(crate) mod sim;

pub use controller::PlaybackController;
