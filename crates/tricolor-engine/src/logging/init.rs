use std::sync::Once;

/// Filter applied when neither the config nor `RUST_LOG` supplies one.
///
/// The renderer logs at info; wgpu and naga are held to warnings.
pub const DEFAULT_FILTER: &str = "info,wgpu_core=warn,wgpu_hal=warn,naga=warn";

/// How the process logger is set up.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `env_logger` directives, e.g. `"tricolor_engine=trace,wgpu=warn"`.
    /// Takes precedence over `RUST_LOG`.
    pub filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

/// Explicit filter, then `RUST_LOG`, then [`DEFAULT_FILTER`].
fn effective_filter(configured: Option<String>, from_env: Option<String>) -> String {
    configured
        .or(from_env)
        .filter(|f| !f.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FILTER.to_owned())
}

static INIT: Once = Once::new();

/// Installs an `env_logger` backend for the `log` facade.
///
/// Only the first call does anything. A logger installed earlier by the host
/// is left in place.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = effective_filter(config.filter, std::env::var("RUST_LOG").ok());

        let installed = env_logger::Builder::new()
            .parse_filters(&filter)
            .write_style(config.write_style)
            .try_init()
            .is_ok();

        if installed {
            log::debug!("logger installed with filter `{filter}`");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_filter_beats_environment() {
        let f = effective_filter(Some("warn".into()), Some("trace".into()));
        assert_eq!(f, "warn");
    }

    #[test]
    fn environment_used_when_nothing_configured() {
        assert_eq!(effective_filter(None, Some("debug".into())), "debug");
    }

    #[test]
    fn blank_filters_fall_back_to_default() {
        assert_eq!(effective_filter(None, None), DEFAULT_FILTER);
        assert_eq!(effective_filter(None, Some("  ".into())), DEFAULT_FILTER);
    }

    #[test]
    fn repeated_init_is_harmless() {
        init_logging(LoggingConfig::default());
        init_logging(LoggingConfig {
            filter: Some("trace".into()),
            ..LoggingConfig::default()
        });
    }
}
