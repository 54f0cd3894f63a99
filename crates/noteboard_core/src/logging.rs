//! Core logging bootstrap.
//!
//! # Responsibility
//! - Start size-rotated file logs once per process.
//! - Capture panics as sanitized, metadata-only log events.
//!
//! # Invariants
//! - Initialization is idempotent for identical settings and never panics.
//! - Switching level or directory after the first init is rejected.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{error, info};
use once_cell::sync::OnceCell;
use std::any::Any;
use std::path::PathBuf;

const LOG_FILE_BASENAME: &str = "noteboard";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
const MAX_LOG_FILES: usize = 5;
const MAX_PANIC_PAYLOAD_CHARS: usize = 160;

static ACTIVE_LOGGER: OnceCell<ActiveLogger> = OnceCell::new();
static PANIC_HOOK: OnceCell<()> = OnceCell::new();

/// Accepted level spellings and the filter each one maps to.
const LEVEL_ALIASES: [(&str, &str); 6] = [
    ("trace", "trace"),
    ("debug", "debug"),
    ("info", "info"),
    ("warn", "warn"),
    ("warning", "warn"),
    ("error", "error"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
struct LogSettings {
    level: &'static str,
    dir: PathBuf,
}

impl LogSettings {
    /// Validates raw init arguments: a known level and an absolute directory.
    fn parse(level: &str, log_dir: &str) -> Result<Self, String> {
        let wanted = level.trim();
        let level = LEVEL_ALIASES
            .iter()
            .find(|(alias, _)| alias.eq_ignore_ascii_case(wanted))
            .map(|(_, filter)| *filter)
            .ok_or_else(|| {
                format!("unknown log level `{wanted}`, use trace, debug, info, warn or error")
            })?;

        let dir = PathBuf::from(log_dir.trim());
        if dir.as_os_str().is_empty() {
            return Err("log directory is blank".to_string());
        }
        if dir.is_relative() {
            return Err(format!("log directory `{}` is not absolute", dir.display()));
        }

        Ok(Self { level, dir })
    }

    /// Fails when `requested` differs from the settings already running.
    fn check_matches(&self, requested: &LogSettings) -> Result<(), String> {
        let conflict = if self.dir != requested.dir {
            Some((
                "directory",
                self.dir.display().to_string(),
                requested.dir.display().to_string(),
            ))
        } else if self.level != requested.level {
            Some(("level", self.level.to_string(), requested.level.to_string()))
        } else {
            None
        };
        match conflict {
            Some((field, running, wanted)) => Err(format!(
                "logger already running with {field} `{running}`, cannot switch to `{wanted}`"
            )),
            None => Ok(()),
        }
    }
}

struct ActiveLogger {
    settings: LogSettings,
    _handle: LoggerHandle,
}

/// Starts file logging at `level` under the absolute directory `log_dir`.
///
/// # Errors
/// - Unknown level, blank or relative directory.
/// - Directory creation or logger startup failure.
/// - Logging already running with a different level or directory.
pub fn init_logging(level: &str, log_dir: &str) -> Result<(), String> {
    let requested = LogSettings::parse(level, log_dir)?;
    let active = ACTIVE_LOGGER.get_or_try_init(|| start_logger(requested.clone()))?;
    active.settings.check_matches(&requested)
}

/// Level and directory of the running logger, if any.
pub fn logging_status() -> Option<(&'static str, PathBuf)> {
    ACTIVE_LOGGER
        .get()
        .map(|active| (active.settings.level, active.settings.dir.clone()))
}

/// `debug` for debug builds, `info` otherwise.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn start_logger(settings: LogSettings) -> Result<ActiveLogger, String> {
    std::fs::create_dir_all(&settings.dir).map_err(|err| {
        format!(
            "failed to create log directory `{}`: {err}",
            settings.dir.display()
        )
    })?;

    let handle = Logger::try_with_str(settings.level)
        .map_err(|err| format!("invalid log level `{}`: {err}", settings.level))?
        .log_to_file(
            FileSpec::default()
                .directory(settings.dir.as_path())
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
        .map_err(|err| format!("failed to start logger: {err}"))?;

    install_panic_hook();
    info!(
        "event=logging_start module=core status=ok level={} version={} platform={}",
        settings.level,
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS
    );

    Ok(ActiveLogger {
        settings,
        _handle: handle,
    })
}

fn install_panic_hook() {
    if PANIC_HOOK.set(()).is_err() {
        return;
    }

    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let location = info.location().map_or_else(
            || "unknown".to_string(),
            |loc| format!("{}:{}", loc.file(), loc.line()),
        );
        error!(
            "event=panic_captured module=core status=error location={} payload={}",
            location,
            single_line(payload_text(info.payload()), MAX_PANIC_PAYLOAD_CHARS)
        );
        previous(info);
    }));
}

fn payload_text(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "non-string panic payload"
    }
}

/// Replaces line breaks with spaces and keeps at most `max_chars`
/// characters, appending `...` when something was cut.
fn single_line(value: &str, max_chars: usize) -> String {
    let mut line = String::with_capacity(value.len().min(max_chars));
    for (count, ch) in value.chars().enumerate() {
        if count == max_chars {
            line.push_str("...");
            break;
        }
        line.push(if matches!(ch, '\n' | '\r') { ' ' } else { ch });
    }
    line
}

#[cfg(test)]
mod tests {
    use super::{init_logging, logging_status, single_line, LogSettings};
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_temp_dir(suffix: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after unix epoch")
            .as_nanos();
        std::env::temp_dir().join(format!(
            "noteboard-logging-{suffix}-{}-{nanos}",
            std::process::id()
        ))
    }

    #[test]
    fn settings_accept_level_aliases() {
        let dir = std::env::temp_dir();
        let dir = dir.to_str().unwrap();
        assert_eq!(LogSettings::parse("DEBUG", dir).unwrap().level, "debug");
        assert_eq!(LogSettings::parse(" warning ", dir).unwrap().level, "warn");
        assert!(LogSettings::parse("verbose", dir).unwrap_err().contains("unknown log level"));
    }

    #[test]
    fn settings_require_absolute_directory() {
        assert!(LogSettings::parse("info", "   ").unwrap_err().contains("blank"));
        assert!(LogSettings::parse("info", "logs/dev").unwrap_err().contains("not absolute"));
    }

    #[test]
    fn single_line_flattens_and_caps() {
        let flattened = single_line("a\nb\rc", 10);
        assert_eq!(flattened, "a b c");
        assert_eq!(single_line("abcdefgh", 3), "abc...");
    }

    #[test]
    fn init_logging_is_idempotent_and_rejects_reconfiguration() {
        let dir = unique_temp_dir("idempotent");
        let dir_str = dir.to_str().expect("temp dir should be valid UTF-8").to_string();
        let other = unique_temp_dir("other");
        let other_str = other.to_str().expect("temp dir should be valid UTF-8").to_string();

        init_logging("info", &dir_str).expect("first init should succeed");
        init_logging("INFO", &dir_str).expect("same settings should be idempotent");

        let err = init_logging("debug", &dir_str).expect_err("level switch should fail");
        assert!(err.contains("cannot switch"));
        let err = init_logging("info", &other_str).expect_err("dir switch should fail");
        assert!(err.contains("cannot switch"));

        assert_eq!(logging_status(), Some(("info", dir)));
    }
}
