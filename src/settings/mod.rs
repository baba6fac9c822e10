// Settings module
// Widget configuration, optionally supplied by the host page as JSON

#[allow(clippy::module_inception)]
pub mod settings;

pub use settings::WidgetSettings;
