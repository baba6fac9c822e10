// Audio playback module
// The media element the widget drives and the outcome of play requests

pub mod player;

#[cfg(target_arch = "wasm32")]
mod element;

#[cfg(target_arch = "wasm32")]
pub use element::AudioElement;
pub use player::{MediaElement, PlayOrigin, PlayOutcome};
