// Browser page driver
use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{AddEventListenerOptions, Document, Event, EventTarget, HtmlElement, Node};

use crate::audio::{AudioElement, PlayOrigin, PlayOutcome};
use crate::commands::{Command, Commands};
use crate::controller::PlaybackController;
use crate::error::{Result, WidgetError};
use crate::settings::WidgetSettings;
use crate::storage::KeyValueStore;
use crate::view;

type Controller = PlaybackController<AudioElement, Box<dyn KeyValueStore>>;
type Listener = Closure<dyn FnMut(Event)>;

// Media element readyState once duration is known
const HAVE_METADATA: u16 = 1;

/// Owns the controller for one page view and carries out its commands.
pub struct Page {
    controller: RefCell<Controller>,
    audio: AudioElement,
    toggle: HtmlElement,
    document: Document,
    settings: WidgetSettings,
    interaction: RefCell<Option<Listener>>,
    save_timer: RefCell<Option<Interval>>,
}

impl Page {
    pub fn new(
        controller: Controller,
        audio: AudioElement,
        toggle: HtmlElement,
        document: Document,
        settings: WidgetSettings,
    ) -> Rc<Self> {
        Rc::new(Self {
            controller: RefCell::new(controller),
            audio,
            toggle,
            document,
            settings,
            interaction: RefCell::new(None),
            save_timer: RefCell::new(None),
        })
    }

    /// Attach the media, unload and toggle listeners for the life of the page.
    pub fn wire(self: &Rc<Self>) -> Result<()> {
        let window = web_sys::window().ok_or(WidgetError::NoGlobal("window"))?;
        let audio = self.audio.element();

        self.on(audio, "loadedmetadata", |page, _| {
            page.dispatch(|c| c.on_metadata_loaded())
        })?;
        self.on(audio, "play", |page, _| page.dispatch(|c| c.on_media_play()))?;
        self.on(audio, "pause", |page, _| page.dispatch(|c| c.on_media_pause()))?;
        self.on(audio, "ended", |page, _| page.dispatch(|c| c.on_media_ended()))?;
        self.on(&window, "beforeunload", |page, _| {
            page.controller.borrow_mut().on_before_unload()
        })?;
        self.on(&self.toggle, "click", |page, event| {
            // Keeps the click from reaching the page-wide unlock listeners
            event.stop_propagation();
            page.dispatch(|c| c.on_toggle());
        })?;

        let commands = self.controller.borrow().mount();
        self.run(commands);

        // Metadata may have arrived before the module finished loading
        if audio.ready_state() >= HAVE_METADATA {
            self.dispatch(|c| c.on_metadata_loaded());
        }
        Ok(())
    }

    fn on(
        self: &Rc<Self>,
        target: &EventTarget,
        name: &str,
        handler: impl Fn(&Rc<Self>, Event) + 'static,
    ) -> Result<()> {
        let page = Rc::clone(self);
        let closure = Listener::new(move |event: Event| handler(&page, event));
        target
            .add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
            .map_err(|e| WidgetError::Js(format!("addEventListener({}): {:?}", name, e)))?;
        closure.forget();
        Ok(())
    }

    fn dispatch(self: &Rc<Self>, handler: impl FnOnce(&mut Controller) -> Commands) {
        let commands = handler(&mut self.controller.borrow_mut());
        self.run(commands);
    }

    fn run(self: &Rc<Self>, commands: Commands) {
        for command in commands {
            self.execute(command);
        }
    }

    fn execute(self: &Rc<Self>, command: Command) {
        match command {
            Command::Render(glyph) => view::render(&self.toggle, glyph, &self.settings.view),
            Command::ListenForInteraction => self.attach_interaction(),
            Command::StopListening => self.detach_interaction(),
            Command::StartSaving { interval_ms } => self.start_saving(interval_ms),
            Command::StopSaving => drop(self.save_timer.borrow_mut().take()),
            Command::Play(origin) => self.request_play(origin),
            Command::Pause => {
                if let Err(e) = self.audio.element().pause() {
                    tracing::warn!("[Page] pause() failed: {:?}", e);
                }
            }
        }
    }

    fn request_play(self: &Rc<Self>, origin: PlayOrigin) {
        let promise = match self.audio.element().play() {
            Ok(promise) => promise,
            Err(e) => {
                tracing::debug!("[Page] play() threw: {:?}", e);
                self.dispatch(|c| c.on_play_settled(origin, PlayOutcome::Blocked));
                return;
            }
        };

        let page = Rc::clone(self);
        spawn_local(async move {
            let outcome = PlayOutcome::from_started(JsFuture::from(promise).await.is_ok());
            page.dispatch(|c| c.on_play_settled(origin, outcome));
        });
    }

    fn start_saving(self: &Rc<Self>, interval_ms: u32) {
        let page = Rc::downgrade(self);
        let timer = Interval::new(interval_ms, move || {
            if let Some(page) = page.upgrade() {
                page.controller.borrow_mut().on_save_tick();
            }
        });
        // Replacing the handle cancels any previous timer
        *self.save_timer.borrow_mut() = Some(timer);
    }

    fn attach_interaction(self: &Rc<Self>) {
        if self.interaction.borrow().is_some() {
            return;
        }

        let page = Rc::downgrade(self);
        let listener = Listener::new(move |event: Event| {
            if let Some(page) = page.upgrade() {
                let from_toggle = page.is_toggle_event(&event);
                page.dispatch(|c| c.on_interaction(from_toggle));
            }
        });

        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        for name in &self.settings.playback.interaction_events {
            let added = self
                .document
                .add_event_listener_with_callback_and_add_event_listener_options(
                    name,
                    listener.as_ref().unchecked_ref(),
                    &options,
                );
            if added.is_err() {
                tracing::warn!("[Page] Could not listen for {}", name);
            }
        }
        *self.interaction.borrow_mut() = Some(listener);
    }

    fn detach_interaction(&self) {
        let listener = self.interaction.borrow_mut().take();
        let Some(listener) = listener else {
            return;
        };
        for name in &self.settings.playback.interaction_events {
            let _ = self
                .document
                .remove_event_listener_with_callback(name, listener.as_ref().unchecked_ref());
        }
    }

    fn is_toggle_event(&self, event: &Event) -> bool {
        event
            .target()
            .and_then(|target| target.dyn_into::<Node>().ok())
            .is_some_and(|node| self.toggle.contains(Some(&node)))
    }
}
