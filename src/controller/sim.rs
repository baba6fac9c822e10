// Simulated page for controller tests
//
// Executes controller commands the way the browser driver does and models
// the two browser behaviours the widget depends on: the autoplay policy and
// media events following transport changes.
use std::cell::Cell;
use std::rc::Rc;

use crate::audio::{MediaElement, PlayOrigin, PlayOutcome};
use crate::commands::{Command, Commands};
use crate::controller::PlaybackController;
use crate::settings::settings::{PlaybackSettings, StorageKeys};
use crate::storage::{MemoryStore, PlaybackStore};
use crate::view::Glyph;

#[derive(Clone)]
pub struct FakeMedia {
    time: Rc<Cell<f64>>,
    paused: Rc<Cell<bool>>,
    duration: f64,
    track: Option<String>,
}

impl FakeMedia {
    pub fn new(track: Option<&str>, duration: f64) -> Self {
        Self {
            time: Rc::new(Cell::new(0.0)),
            paused: Rc::new(Cell::new(true)),
            duration,
            track: track.map(str::to_string),
        }
    }

    pub fn set_paused(&self, paused: bool) {
        self.paused.set(paused);
    }

    // Whole milliseconds keep positions exact
    fn advance(&self, ms: u32) {
        let now_ms = (self.time.get() * 1000.0).round() + f64::from(ms);
        self.time.set((now_ms / 1000.0).min(self.duration));
    }
}

impl MediaElement for FakeMedia {
    fn current_time(&self) -> f64 {
        self.time.get()
    }

    fn set_current_time(&self, secs: f64) {
        self.time.set(secs);
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn is_paused(&self) -> bool {
        self.paused.get()
    }

    fn track_id(&self) -> Option<String> {
        self.track.clone()
    }
}

enum MediaEvent {
    Play,
    Pause,
    Ended,
}

pub struct SimPage {
    pub controller: PlaybackController<FakeMedia, MemoryStore>,
    pub media: FakeMedia,
    pub glyph: Glyph,
    pub listeners_attached: bool,
    pub save_timer: Option<u32>,
    pub plays: Vec<PlayOrigin>,
    autoplay_allowed: bool,
    gestures_unlock: bool,
    activated: bool,
    timer_elapsed_ms: u32,
}

impl SimPage {
    /// A fresh page view over `store`, autoplay blocked.
    pub fn load(store: MemoryStore, track: Option<&str>, duration: f64) -> Self {
        let media = FakeMedia::new(track, duration);
        let controller = PlaybackController::new(
            media.clone(),
            PlaybackStore::new(store, StorageKeys::default()),
            &PlaybackSettings::default(),
        );
        let mut page = Self {
            controller,
            media,
            glyph: Glyph::Pause,
            listeners_attached: false,
            save_timer: None,
            plays: Vec::new(),
            autoplay_allowed: false,
            gestures_unlock: true,
            activated: false,
            timer_elapsed_ms: 0,
        };
        let commands = page.controller.mount();
        page.run(commands);
        page
    }

    pub fn allow_autoplay(mut self) -> Self {
        self.autoplay_allowed = true;
        self
    }

    /// Gestures no longer grant playback, as on some mobile browsers.
    pub fn refuse_gestures(mut self) -> Self {
        self.gestures_unlock = false;
        self
    }

    pub fn accept_gestures(&mut self) {
        self.gestures_unlock = true;
    }

    pub fn metadata_loaded(&mut self) {
        let commands = self.controller.on_metadata_loaded();
        self.run(commands);
    }

    /// A gesture somewhere on the page outside the toggle.
    pub fn interact(&mut self) {
        self.gesture(false);
    }

    /// A pointer or key gesture landing on the toggle itself.
    pub fn interact_on_toggle(&mut self) {
        self.gesture(true);
    }

    pub fn click_toggle(&mut self) {
        self.activate();
        let commands = self.controller.on_toggle();
        self.run(commands);
    }

    /// Let wall-clock time pass, firing the save timer when due.
    pub fn advance_ms(&mut self, ms: u32) {
        let mut remaining = ms;
        while remaining > 0 {
            let step = match self.save_timer {
                Some(interval) => (interval.max(1) - self.timer_elapsed_ms).min(remaining),
                None => remaining,
            };
            if !self.media.is_paused() {
                self.media.advance(step);
            }
            remaining -= step;

            if let Some(interval) = self.save_timer {
                self.timer_elapsed_ms += step;
                if self.timer_elapsed_ms >= interval.max(1) {
                    self.timer_elapsed_ms = 0;
                    self.controller.on_save_tick();
                }
            }
        }
    }

    /// Play through to the end, as the element does without its loop attribute.
    pub fn end_track(&mut self) {
        self.media.set_current_time(self.media.duration());
        if !self.media.is_paused() {
            self.media.set_paused(true);
            self.fire(MediaEvent::Pause);
        }
        self.fire(MediaEvent::Ended);
    }

    pub fn navigate_away(&mut self) {
        self.controller.on_before_unload();
    }

    fn gesture(&mut self, from_toggle: bool) {
        self.activate();
        if !self.listeners_attached {
            return;
        }
        let commands = self.controller.on_interaction(from_toggle);
        self.run(commands);
    }

    fn activate(&mut self) {
        if self.gestures_unlock {
            self.activated = true;
        }
    }

    fn run(&mut self, commands: Commands) {
        for command in commands {
            self.execute(command);
        }
    }

    fn execute(&mut self, command: Command) {
        match command {
            Command::Render(glyph) => self.glyph = glyph,
            Command::ListenForInteraction => self.listeners_attached = true,
            Command::StopListening => self.listeners_attached = false,
            Command::StartSaving { interval_ms } => {
                self.save_timer = Some(interval_ms);
                self.timer_elapsed_ms = 0;
            }
            Command::StopSaving => self.save_timer = None,
            Command::Pause => {
                if !self.media.is_paused() {
                    self.media.set_paused(true);
                    self.fire(MediaEvent::Pause);
                }
            }
            Command::Play(origin) => {
                self.plays.push(origin);
                let started = self.autoplay_allowed || self.activated;
                if started && self.media.is_paused() {
                    self.media.set_paused(false);
                    self.fire(MediaEvent::Play);
                }
                let commands = self
                    .controller
                    .on_play_settled(origin, PlayOutcome::from_started(started));
                self.run(commands);
            }
        }
    }

    fn fire(&mut self, event: MediaEvent) {
        let commands = match event {
            MediaEvent::Play => self.controller.on_media_play(),
            MediaEvent::Pause => self.controller.on_media_pause(),
            MediaEvent::Ended => self.controller.on_media_ended(),
        };
        self.run(commands);
    }
}
