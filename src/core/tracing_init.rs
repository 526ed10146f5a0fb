use crate::core::config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Target sqlx uses for per-statement events
const SQLX_STATEMENT_TARGET: &str = "sqlx::query";

/// Filter used when `RUST_LOG` is not set.
///
/// Statement logging is emitted at debug, so it gets its own directive or it
/// would be swallowed by an `info` service level.
pub fn default_directives(level: &str, log_statements: bool) -> String {
    if log_statements {
        format!("{},{}=debug", level, SQLX_STATEMENT_TARGET)
    } else {
        level.to_string()
    }
}

/// Install the global subscriber. `RUST_LOG` overrides the configured filter.
pub fn init_tracing(config: &Config) {
    let logging = &config.logging;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(default_directives(&logging.level, config.database.log_statements))
    });

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_level(true);

    if logging.console || logging.format == "console" {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer.with_ansi(true).with_line_number(true))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer.json().with_current_span(true).with_span_list(true))
            .init();
    }
}
