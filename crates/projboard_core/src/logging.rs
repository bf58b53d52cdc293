//! Logging bootstrap.
//!
//! # Responsibility
//! - Start the `flexi_logger` backend exactly once per process.
//! - Emit `event=... module=... status=...` diagnostic lines from core.
//!
//! # Invariants
//! - Re-initializing with an identical config is a no-op.
//! - Re-initializing with a different level or destination is rejected.
//! - Initialization never panics.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{error, info};
use once_cell::sync::OnceCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "projboard";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
const MAX_LOG_FILES: usize = 5;
const MAX_PANIC_PAYLOAD_CHARS: usize = 160;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();
static PANIC_HOOK_INSTALLED: OnceCell<()> = OnceCell::new();

struct LoggingState {
    level: &'static str,
    log_dir: Option<PathBuf>,
    _logger: LoggerHandle,
}

/// Logging level and destination.
///
/// `log_dir = None` writes to stderr; otherwise rotating files are written
/// into the directory, which must be absolute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: String,
    pub log_dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

/// Logging bootstrap failures.
#[derive(Debug)]
pub enum LoggingError {
    UnsupportedLevel(String),
    RelativeLogDir(PathBuf),
    CreateLogDir { dir: PathBuf, source: std::io::Error },
    Backend(flexi_logger::FlexiLoggerError),
    /// Logging is already running with a different config.
    AlreadyInitialized { active: String, requested: String },
}

impl Display for LoggingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedLevel(level) => write!(
                f,
                "unsupported log level `{level}`; expected trace|debug|info|warn|error"
            ),
            Self::RelativeLogDir(dir) => {
                write!(f, "log_dir must be an absolute path, got `{}`", dir.display())
            }
            Self::CreateLogDir { dir, source } => write!(
                f,
                "failed to create log directory `{}`: {source}",
                dir.display()
            ),
            Self::Backend(err) => write!(f, "failed to start logger: {err}"),
            Self::AlreadyInitialized { active, requested } => write!(
                f,
                "logging already initialized with {active}; refusing to switch to {requested}"
            ),
        }
    }
}

impl Error for LoggingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::CreateLogDir { source, .. } => Some(source),
            Self::Backend(err) => Some(err),
            _ => None,
        }
    }
}

/// Initializes core logging.
///
/// # Errors
/// - Unsupported level or relative log directory.
/// - Directory creation or backend startup failure.
/// - A previous call configured a different level or destination.
pub fn init_logging(config: &LoggingConfig) -> Result<(), LoggingError> {
    let level = normalize_level(&config.level)?;
    let log_dir = normalize_log_dir(config.log_dir.as_deref())?;

    let state = LOGGING_STATE.get_or_try_init(|| start_logger(level, log_dir.clone()))?;
    if state.level != level || state.log_dir != log_dir {
        return Err(LoggingError::AlreadyInitialized {
            active: describe(state.level, state.log_dir.as_deref()),
            requested: describe(level, log_dir.as_deref()),
        });
    }
    Ok(())
}

/// Returns `(level, log_dir)` of the running logger, if any.
pub fn logging_status() -> Option<(&'static str, Option<PathBuf>)> {
    LOGGING_STATE
        .get()
        .map(|state| (state.level, state.log_dir.clone()))
}

/// `debug` for debug builds, `info` for release builds.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn start_logger(level: &'static str, log_dir: Option<PathBuf>) -> Result<LoggingState, LoggingError> {
    let logger = Logger::try_with_str(level).map_err(LoggingError::Backend)?;
    let logger = match log_dir.as_deref() {
        Some(dir) => {
            std::fs::create_dir_all(dir).map_err(|source| LoggingError::CreateLogDir {
                dir: dir.to_path_buf(),
                source,
            })?;
            logger
                .log_to_file(
                    FileSpec::default()
                        .directory(dir)
                        .basename(LOG_FILE_BASENAME),
                )
                .rotate(
                    Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
                    Naming::Numbers,
                    Cleanup::KeepLogFiles(MAX_LOG_FILES),
                )
                .write_mode(WriteMode::BufferAndFlush)
                .append()
                .format_for_files(flexi_logger::detailed_format)
                .start()
        }
        None => logger
            .log_to_stderr()
            .format_for_stderr(flexi_logger::default_format)
            .start(),
    }
    .map_err(LoggingError::Backend)?;

    install_panic_hook_once();
    info!(
        "event=logging_init module=core status=ok level={} destination={} version={}",
        level,
        log_dir
            .as_deref()
            .map_or_else(|| "stderr".to_string(), |dir| dir.display().to_string()),
        env!("CARGO_PKG_VERSION")
    );

    Ok(LoggingState {
        level,
        log_dir,
        _logger: logger,
    })
}

fn describe(level: &str, log_dir: Option<&Path>) -> String {
    match log_dir {
        Some(dir) => format!("level `{level}` at `{}`", dir.display()),
        None => format!("level `{level}` on stderr"),
    }
}

fn normalize_level(level: &str) -> Result<&'static str, LoggingError> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(LoggingError::UnsupportedLevel(other.to_string())),
    }
}

fn normalize_log_dir(log_dir: Option<&Path>) -> Result<Option<PathBuf>, LoggingError> {
    match log_dir {
        None => Ok(None),
        Some(dir) if dir.as_os_str().is_empty() => Ok(None),
        Some(dir) if !dir.is_absolute() => Err(LoggingError::RelativeLogDir(dir.to_path_buf())),
        Some(dir) => Ok(Some(dir.to_path_buf())),
    }
}

fn install_panic_hook_once() {
    if PANIC_HOOK_INSTALLED.get().is_some() {
        return;
    }

    let previous_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown".to_string());
        let payload = if let Some(message) = panic_info.payload().downcast_ref::<&str>() {
            (*message).to_string()
        } else if let Some(message) = panic_info.payload().downcast_ref::<String>() {
            message.clone()
        } else {
            "non-string panic payload".to_string()
        };
        error!(
            "event=panic_captured module=core status=error location={} payload={}",
            location,
            sanitize_message(&payload, MAX_PANIC_PAYLOAD_CHARS)
        );
        previous_hook(panic_info);
    }));

    let _ = PANIC_HOOK_INSTALLED.set(());
}

// Payloads may carry user text (project titles); keep them on one line and short.
fn sanitize_message(value: &str, max_chars: usize) -> String {
    let normalized = value.replace(['\n', '\r'], " ");
    let mut truncated = normalized.chars().take(max_chars).collect::<String>();
    if normalized.chars().count() > max_chars {
        truncated.push_str("...");
    }
    truncated
}

#[cfg(test)]
mod tests {
    use super::{
        init_logging, logging_status, normalize_level, normalize_log_dir, sanitize_message,
        LoggingConfig, LoggingError,
    };
    use std::path::Path;

    #[test]
    fn normalize_level_accepts_aliases_and_case() {
        assert_eq!(normalize_level(" WARNING ").expect("warning alias"), "warn");
        assert_eq!(normalize_level("Trace").expect("trace"), "trace");
        assert!(matches!(
            normalize_level("verbose"),
            Err(LoggingError::UnsupportedLevel(level)) if level == "verbose"
        ));
    }

    #[test]
    fn normalize_log_dir_rejects_relative_and_ignores_empty() {
        let err = normalize_log_dir(Some(Path::new("logs/dev")))
            .expect_err("relative paths must be rejected");
        assert!(err.to_string().contains("absolute"));
        assert_eq!(normalize_log_dir(Some(Path::new(""))).expect("empty"), None);
    }

    #[test]
    fn sanitize_message_flattens_and_truncates() {
        let sanitized = sanitize_message("line1\nline2\rline3", 8);
        assert!(!sanitized.contains('\n'));
        assert!(!sanitized.contains('\r'));
        assert!(sanitized.ends_with("..."));
    }

    #[test]
    fn init_logging_is_idempotent_and_rejects_conflicts() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = LoggingConfig {
            level: "info".to_string(),
            log_dir: Some(dir.path().join("logs")),
        };

        init_logging(&config).expect("first init should succeed");
        init_logging(&config).expect("same config should be idempotent");

        let level_conflict = LoggingConfig {
            level: "debug".to_string(),
            ..config.clone()
        };
        let err = init_logging(&level_conflict).expect_err("level conflict should fail");
        assert!(err.to_string().contains("refusing to switch"));

        let stderr_conflict = LoggingConfig {
            log_dir: None,
            ..config.clone()
        };
        let err = init_logging(&stderr_conflict).expect_err("destination conflict should fail");
        assert!(matches!(err, LoggingError::AlreadyInitialized { .. }));

        let (level, log_dir) = logging_status().expect("logging should be active");
        assert_eq!(level, "info");
        assert_eq!(log_dir, config.log_dir);
    }
}
