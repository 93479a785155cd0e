use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, Layer, fmt, prelude::*};

/// Overrides the log directory, e.g. for editors that sandbox `$HOME`.
pub const LOG_DIR_ENV: &str = "LAMBDA_STUBS_LOG_DIR";

/// Our crates log at `info`; dependencies such as tower-lsp only at `warn`.
const DEFAULT_DIRECTIVES: &str = "warn,lambda_stubs_core=info,lambda_stubs_java=info,lambda_stubs_lsp=info,lambda_stubs_cli=info";

/// Directory holding the rolling log files of every component.
pub fn log_dir() -> PathBuf {
    resolve_log_dir(
        std::env::var(LOG_DIR_ENV).ok(),
        std::env::var("HOME").ok(),
    )
}

fn resolve_log_dir(override_dir: Option<String>, home: Option<String>) -> PathBuf {
    match override_dir.filter(|d| !d.is_empty()) {
        Some(dir) => PathBuf::from(dir),
        None => PathBuf::from(home.unwrap_or_else(|| ".".to_string())).join(".lambda-stubs/logs"),
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// Installs the global subscriber for `component` (`cli` or `lsp`).
///
/// Everything goes to a daily rolling `<component>.log.<date>` file. With
/// `to_stderr`, warnings and errors are also echoed to stderr so command
/// output on stdout stays clean; the language server passes `false` since
/// its stdio carries the protocol.
pub fn init_logging(component: &str, to_stderr: bool) -> WorkerGuard {
    let log_dir = log_dir();
    let _ = std::fs::create_dir_all(&log_dir);

    let file_appender = tracing_appender::rolling::daily(&log_dir, format!("{}.log", component));
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_filter(env_filter());

    let stderr_layer = to_stderr.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .without_time()
            .with_target(false)
            .with_filter(LevelFilter::WARN)
    });

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .init();

    tracing::info!(component, dir = %log_dir.display(), "logging initialised");
    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_takes_precedence_over_home() {
        assert_eq!(
            resolve_log_dir(Some("/tmp/stubs".into()), Some("/home/dev".into())),
            PathBuf::from("/tmp/stubs")
        );
        assert_eq!(
            resolve_log_dir(Some(String::new()), Some("/home/dev".into())),
            PathBuf::from("/home/dev/.lambda-stubs/logs")
        );
        assert_eq!(
            resolve_log_dir(None, None),
            PathBuf::from("./.lambda-stubs/logs")
        );
    }

    #[test]
    fn default_directives_parse() {
        assert!(EnvFilter::try_new(DEFAULT_DIRECTIVES).is_ok());
    }
}
