// HtmlAudioElement binding
use web_sys::HtmlAudioElement;

use crate::audio::player::MediaElement;

#[derive(Clone)]
pub struct AudioElement {
    audio: HtmlAudioElement,
    song_attribute: String,
}

impl AudioElement {
    pub fn new(audio: HtmlAudioElement, song_attribute: &str) -> Self {
        Self {
            audio,
            song_attribute: song_attribute.to_string(),
        }
    }

    pub fn element(&self) -> &HtmlAudioElement {
        &self.audio
    }
}

impl MediaElement for AudioElement {
    fn current_time(&self) -> f64 {
        self.audio.current_time()
    }

    fn set_current_time(&self, secs: f64) {
        self.audio.set_current_time(secs);
    }

    fn duration(&self) -> f64 {
        self.audio.duration()
    }

    fn is_paused(&self) -> bool {
        self.audio.paused()
    }

    fn track_id(&self) -> Option<String> {
        self.audio.get_attribute(&self.song_attribute)
    }
}
