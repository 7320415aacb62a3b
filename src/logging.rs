use flexi_logger::{
    colored_default_format, opt_format, Cleanup, Criterion, Duplicate, FileSpec, Logger,
    LoggerHandle, Naming,
};
use std::path::Path;

use crate::Result;

const ROTATE_SIZE: u64 = 10 * 1024 * 1024;
const KEEP_LOG_FILES: usize = 7;

/// Starts the global logger. `level` is used unless `RUST_LOG` is set.
///
/// With a directory, logs go to size-rotated files there and warnings are
/// duplicated to stderr; without one, everything goes to stderr in colour.
/// Keep the returned handle alive for as long as logging is needed.
pub fn setup_logging(level: &str, log_dir: Option<&Path>) -> Result<LoggerHandle> {
    let logger = Logger::try_with_env_or_str(level)?;
    let handle = match log_dir {
        Some(dir) => logger
            .log_to_file(FileSpec::default().directory(dir).basename("uttt_bot"))
            .format(opt_format)
            .duplicate_to_stderr(Duplicate::Warn)
            .rotate(
                Criterion::Size(ROTATE_SIZE),
                Naming::Numbers,
                Cleanup::KeepLogFiles(KEEP_LOG_FILES),
            )
            .start(),
        None => logger.format(colored_default_format).start(),
    }?;
    Ok(handle)
}
