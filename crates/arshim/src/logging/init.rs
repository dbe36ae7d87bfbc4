use std::sync::Once;

use log::LevelFilter;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "arshim=debug"). When unset, `RUST_LOG` is consulted, then
/// `default_level` applies.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub default_level: LevelFilter,
    pub write_style: env_logger::WriteStyle,
    /// Prefix records with a timestamp. Off suits logcat-style sinks that add their own.
    pub timestamps: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: LevelFilter::Info,
            write_style: env_logger::WriteStyle::Auto,
            timestamps: true,
        }
    }
}

/// Where the active filter came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FilterSource {
    Explicit(String),
    Environment(String),
    Level(LevelFilter),
}

impl LoggingConfig {
    pub(crate) fn filter_source(&self, rust_log: Option<String>) -> FilterSource {
        if let Some(filter) = &self.env_filter {
            FilterSource::Explicit(filter.clone())
        } else if let Some(filter) = rust_log.filter(|f| !f.trim().is_empty()) {
            FilterSource::Environment(filter)
        } else {
            FilterSource::Level(self.default_level)
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Subsequent calls are ignored. Call it early in `main`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match config.filter_source(std::env::var("RUST_LOG").ok()) {
            FilterSource::Explicit(filter) | FilterSource::Environment(filter) => {
                builder.parse_filters(&filter);
            }
            FilterSource::Level(level) => {
                builder.filter_level(level);
            }
        }

        builder.write_style(config.write_style);
        if !config.timestamps {
            builder.format_timestamp(None);
        }

        if let Err(err) = builder.try_init() {
            eprintln!("arshim: logger already installed: {err}");
            return;
        }

        log::debug!("logging initialized");
    });
}
