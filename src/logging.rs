//! Tracing setup
//!
//! The TUI owns the terminal, so interactive sessions log to a file or not
//! at all. One-shot commands log warnings to stderr.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{TaxCostError, TaxCostResult};

/// Where log records go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    /// Append to a file
    File(&'a Path),
    /// Write to stderr
    Stderr,
    /// Interactive session with no log file: nothing is logged, `RUST_LOG` included
    Silent,
}

/// Filter directive for `target`, given the value of `RUST_LOG`
///
/// `None` means no subscriber is installed.
fn filter_directive(target: LogTarget<'_>, rust_log: Option<&str>) -> Option<String> {
    let default = match target {
        LogTarget::File(_) => "info",
        LogTarget::Stderr => "warn",
        LogTarget::Silent => return None,
    };
    let directive = rust_log.filter(|v| !v.trim().is_empty()).unwrap_or(default);
    Some(directive.to_string())
}

/// Install the global subscriber. Call once at startup.
///
/// Honours `RUST_LOG` for file and stderr targets; otherwise uses a
/// per-target default level. [`LogTarget::Silent`] installs nothing, so the
/// TUI's screen is never written to.
pub fn init_logging(target: LogTarget<'_>) -> TaxCostResult<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let Some(directive) = filter_directive(target, rust_log.as_deref()) else {
        return Ok(());
    };
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let result = match target {
        LogTarget::File(path) => {
            let file = File::options()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| {
                    TaxCostError::Io(format!("cannot open log file '{}': {}", path.display(), e))
                })?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        LogTarget::Stderr | LogTarget::Silent => builder
            .without_time()
            .with_writer(std::io::stderr)
            .try_init(),
    };

    // A subscriber may already be installed (tests); keep that one.
    if let Err(e) = result {
        tracing::debug!("tracing subscriber already set: {}", e);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_directives() {
        assert_eq!(filter_directive(LogTarget::Stderr, None).as_deref(), Some("warn"));
        assert_eq!(
            filter_directive(LogTarget::File(Path::new("x.log")), None).as_deref(),
            Some("info")
        );
        assert_eq!(filter_directive(LogTarget::Stderr, Some(" ")).as_deref(), Some("warn"));
    }

    #[test]
    fn test_rust_log_overrides_file_and_stderr() {
        assert_eq!(
            filter_directive(LogTarget::Stderr, Some("debug")).as_deref(),
            Some("debug")
        );
        assert_eq!(
            filter_directive(LogTarget::File(Path::new("x.log")), Some("trace")).as_deref(),
            Some("trace")
        );
    }

    #[test]
    fn test_silent_ignores_rust_log() {
        assert_eq!(filter_directive(LogTarget::Silent, Some("debug")), None);
        assert_eq!(filter_directive(LogTarget::Silent, None), None);
        assert!(init_logging(LogTarget::Silent).is_ok());
    }

    #[test]
    fn test_file_target_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("taxcost.log");

        init_logging(LogTarget::File(&path)).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_unwritable_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("taxcost.log");

        let err = init_logging(LogTarget::File(&path)).unwrap_err();
        assert!(matches!(err, TaxCostError::Io(_)));
    }
}
