//! Tracing subscriber setup.
//!
//! Log lines go through `tracing-subscriber`'s fmt layer in both builds. In
//! the browser each formatted event is written to the devtools console at the
//! matching console level; elsewhere it goes to stdout.

use tracing_subscriber::EnvFilter;

use crate::config::PageConfig;

/// Installs the global subscriber. Safe to call more than once: later calls
/// leave the first subscriber in place and return `false`.
pub fn init(config: &PageConfig) -> bool {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    #[cfg(target_arch = "wasm32")]
    let builder = builder
        .with_writer(console::ConsoleMakeWriter)
        .without_time()
        .with_ansi(false);

    let installed = if config.log_format == "json" {
        builder.json().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    };

    if installed {
        tracing::debug!(
            level = %config.log_level,
            format = %config.log_format,
            "logging initialized"
        );
    }
    installed
}

#[cfg(target_arch = "wasm32")]
mod console {
    use std::io;

    use tracing::{Level, Metadata};
    use tracing_subscriber::fmt::MakeWriter;
    use wasm_bindgen::JsValue;
    use web_sys::console;

    /// Hands out one [`ConsoleWriter`] per event.
    pub struct ConsoleMakeWriter;

    /// Buffers one formatted event and flushes it to the console on drop.
    pub struct ConsoleWriter {
        level: Level,
        buf: Vec<u8>,
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
            let line = String::from_utf8_lossy(&self.buf);
            let line = JsValue::from_str(line.trim_end());
            match self.level {
                Level::ERROR => console::error_1(&line),
                Level::WARN => console::warn_1(&line),
                Level::INFO => console::info_1(&line),
                _ => console::debug_1(&line),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        let config = PageConfig {
            log_level: "not a [valid filter".to_string(),
            ..PageConfig::default()
        };
        let _ = init(&config);
        assert!(!init(&config));
    }
}
