// Toggle visual state

const PLAY_ICON: &str = r#"<svg viewBox="0 0 24 24"><polygon points="5,3 19,12 5,21"/></svg>"#;
const PAUSE_ICON: &str = r#"<svg viewBox="0 0 24 24"><rect x="5" y="3" width="4" height="18"/><rect x="15" y="3" width="4" height="18"/></svg>"#;

/// What the toggle shows. The glyph is the action a click performs, so a
/// playing widget shows `Pause`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Play,
    Pause,
}

impl Glyph {
    pub fn is_playing(self) -> bool {
        self == Self::Pause
    }

    pub fn svg(self) -> &'static str {
        match self {
            Self::Play => PLAY_ICON,
            Self::Pause => PAUSE_ICON,
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub fn render(toggle: &web_sys::HtmlElement, glyph: Glyph, view: &crate::settings::settings::ViewSettings) {
    toggle.set_inner_html(glyph.svg());

    let classes = toggle.class_list();
    let result = if glyph.is_playing() {
        classes
            .add_1(&view.playing_class)
            .and_then(|_| classes.remove_1(&view.attention_class))
    } else {
        classes.remove_1(&view.playing_class)
    };
    if result.is_err() {
        tracing::debug!("[View] Could not update toggle classes");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_shows_next_action() {
        assert!(Glyph::Pause.is_playing());
        assert!(Glyph::Play.svg().contains("polygon"));
        assert!(Glyph::Pause.svg().contains("rect"));
    }
}
