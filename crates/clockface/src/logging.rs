//! Logger setup.
//!
//! The terminal belongs to the UI while the clock runs, so log records go to
//! a file instead of stderr.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Once;

/// Logger configuration.
///
/// `filter` follows the `env_logger` filter syntax (e.g. "info",
/// "clockface=debug,clockface_config=trace"). Without it `RUST_LOG` is used,
/// and with neither logging stays off.
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    pub filter: Option<String>,
    pub path: Option<PathBuf>,
}

static INIT: Once = Once::new();

/// Initializes the global logger once; later calls are ignored.
///
/// Intended usage is early in `main`, before the terminal is taken over, so
/// an error opening the log file can still be printed.
pub fn init_logging(config: LoggingConfig) -> io::Result<()> {
    let mut result = Ok(());
    INIT.call_once(|| {
        let Some(filter) = config.filter.or_else(|| std::env::var("RUST_LOG").ok()) else {
            return;
        };
        let Some(path) = config.path else {
            result = Err(io::Error::new(
                io::ErrorKind::NotFound,
                "no data directory for the log file",
            ));
            return;
        };
        let file = match open_log_file(&path) {
            Ok(file) => file,
            Err(e) => {
                result = Err(e);
                return;
            }
        };

        env_logger::Builder::new()
            .parse_filters(&filter)
            .write_style(env_logger::WriteStyle::Never)
            .target(env_logger::Target::Pipe(Box::new(file)))
            .init();

        log::debug!("logging initialized, writing to {}", path.display());
    });
    result
}

/// Open `path` for appending, creating it and its parent directories.
///
/// Errors carry the path so they can be reported as is.
fn open_log_file(path: &Path) -> io::Result<File> {
    let with_path = |e: io::Error| io::Error::new(e.kind(), format!("{}: {e}", path.display()));
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(with_path)?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(with_path)
}

/// Default log file location.
pub fn default_log_path() -> Option<PathBuf> {
    clockface_config::Config::project_dirs().map(|dirs| dirs.data_local_dir().join("clockface.log"))
}
