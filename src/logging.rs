// Logging setup
//
// tracing with the fmt subscriber; in the browser each formatted event goes
// to the console method matching its level.
use tracing::Level;

#[cfg(target_arch = "wasm32")]
mod console {
    use std::io;

    use tracing::{Level, Metadata};
    use tracing_subscriber::fmt::MakeWriter;
    use wasm_bindgen::JsValue;

    pub struct ConsoleMakeWriter;

    /// Buffers one formatted event and emits it on drop.
    pub struct ConsoleWriter {
        level: Level,
        buf: Vec<u8>,
    }

    impl io::Write for ConsoleWriter {
        fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
            self.buf.extend_from_slice(bytes);
            Ok(bytes.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            if self.buf.is_empty() {
                return;
            }
            let text = String::from_utf8_lossy(&self.buf);
            let line = JsValue::from_str(text.trim_end());
            if self.level == Level::ERROR {
                web_sys::console::error_1(&line);
            } else if self.level == Level::WARN {
                web_sys::console::warn_1(&line);
            } else if self.level == Level::INFO {
                web_sys::console::info_1(&line);
            } else {
                web_sys::console::debug_1(&line);
            }
        }
    }

    impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
        type Writer = ConsoleWriter;

        fn make_writer(&'a self) -> Self::Writer {
            ConsoleWriter {
                level: Level::INFO,
                buf: Vec::new(),
            }
        }

        fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
            ConsoleWriter {
                level: *meta.level(),
                buf: Vec::new(),
            }
        }
    }
}

/// Install the global subscriber. Later calls keep the first one.
pub fn init(max_level: Level) {
    // wasm32-unknown-unknown has no system clock to stamp events with
    let builder = tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_target(false)
        .with_ansi(false)
        .without_time();

    #[cfg(target_arch = "wasm32")]
    let builder = builder.with_writer(console::ConsoleMakeWriter);

    let _ = builder.try_init();
}
