//! Tracing Setup
//!
//! One subscriber for both binaries. `RUST_LOG` wins over the configured
//! level when it is set.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Filter used when `RUST_LOG` is not set
pub fn default_filter(config: &LoggingConfig) -> String {
    format!(
        "oralscan={level},oralscan_core={level},tower_http=info",
        level = config.level
    )
}

/// Install the global subscriber. Logs go to stderr so CLI output on stdout
/// stays clean.
pub fn init_tracing(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(config).into());

    let (pretty, json) = if config.format.eq_ignore_ascii_case("json") {
        (
            None,
            Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            ),
        )
    } else {
        (
            Some(tracing_subscriber::fmt::layer().with_writer(std::io::stderr)),
            None,
        )
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(pretty)
        .with(json)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_uses_level() {
        let config = LoggingConfig {
            level: "debug".to_string(),
            format: "json".to_string(),
        };
        assert_eq!(
            default_filter(&config),
            "oralscan=debug,oralscan_core=debug,tower_http=info"
        );
    }
}
