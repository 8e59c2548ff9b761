//! Diagnostic logging for the shell binary.
//!
//! Game text goes to stdout; `tracing` output goes to stderr, filtered by
//! `RUST_LOG` and defaulting to `warn`.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Filter built from `directives`, falling back to `warn` for anything they
/// leave unspecified. Invalid directives are skipped.
pub fn filter_from(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(directives)
}

/// Filter built from `RUST_LOG`.
pub fn env_filter() -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy()
}

/// Install the global subscriber.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;
    use tracing_subscriber::layer::SubscriberExt;

    fn enabled_under(filter: EnvFilter, level: Level) -> bool {
        let subscriber = tracing_subscriber::registry().with(filter);
        tracing::subscriber::with_default(subscriber, || {
            if level == Level::DEBUG {
                tracing::enabled!(target: "combat_rules::combat", Level::DEBUG)
            } else if level == Level::INFO {
                tracing::enabled!(target: "combat_rules::combat", Level::INFO)
            } else {
                tracing::enabled!(target: "combat_rules::combat", Level::WARN)
            }
        })
    }

    #[test]
    fn test_default_is_warn() {
        assert!(enabled_under(filter_from(""), Level::WARN));
        assert!(!enabled_under(filter_from(""), Level::INFO));
    }

    #[test]
    fn test_global_level_overrides_default() {
        assert!(enabled_under(filter_from("debug"), Level::DEBUG));
        assert_eq!(filter_from("debug").max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_target_directive_keeps_warn_elsewhere() {
        let filter = filter_from("combat_rules=debug");
        assert!(enabled_under(filter, Level::DEBUG));

        let subscriber = tracing_subscriber::registry().with(filter_from("combat_rules=debug"));
        let other = tracing::subscriber::with_default(subscriber, || {
            tracing::enabled!(target: "adventure_shell", Level::INFO)
        });
        assert!(!other);
    }
}
