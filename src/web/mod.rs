// Browser integration
// Finds the widget's elements and hands them to the page driver

mod page;

use anyhow::Context;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlAudioElement, HtmlElement};

use crate::audio::AudioElement;
use crate::controller::PlaybackController;
use crate::error::WidgetError;
use crate::settings::WidgetSettings;
use crate::storage::{KeyValueStore, LocalStorage, MemoryStore, PlaybackStore};

use page::Page;

/// Text of the host page's inline JSON config element, if present.
pub fn inline_config() -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(WidgetSettings::CONFIG_ELEMENT_ID)?
        .text_content()
}

/// Bind the widget to the page. Returns false if the page has no widget markup.
pub fn mount(settings: WidgetSettings) -> anyhow::Result<bool> {
    let window = web_sys::window().ok_or(WidgetError::NoGlobal("window"))?;
    let document = window.document().ok_or(WidgetError::NoGlobal("document"))?;

    let toggle = find::<HtmlElement>(&document, &settings.elements.toggle_id, "an HTML element")?;
    let audio = find::<HtmlAudioElement>(&document, &settings.elements.audio_id, "an audio element")?;
    let (Some(toggle), Some(audio)) = (toggle, audio) else {
        tracing::debug!("[Page] Widget markup not present, nothing to do");
        return Ok(false);
    };

    let store: Box<dyn KeyValueStore> = match LocalStorage::open() {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            tracing::warn!("[Storage] {}, position will not survive navigation", e);
            Box::new(MemoryStore::new())
        }
    };

    let audio = AudioElement::new(audio, &settings.elements.song_attribute);
    let controller = PlaybackController::new(
        audio.clone(),
        PlaybackStore::new(store, settings.storage.clone()),
        &settings.playback,
    );

    let page = Page::new(controller, audio, toggle, document, settings);
    page.wire().context("failed to wire page listeners")?;
    Ok(true)
}

fn find<T: JsCast>(
    document: &Document,
    id: &str,
    expected: &'static str,
) -> Result<Option<T>, WidgetError> {
    let Some(element) = document.get_element_by_id(id) else {
        return Ok(None);
    };
    element
        .dyn_into::<T>()
        .map(Some)
        .map_err(|_| WidgetError::WrongElement {
            id: id.to_string(),
            expected,
        })
}
