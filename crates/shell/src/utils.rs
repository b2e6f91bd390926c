//! Helpers for the CLI.

use std::path::PathBuf;

use ftlog::{
    appender::{FileAppender, Period},
    LevelFilter, LoggerGuard,
};

/// Configures the logger to write to `logs/<file_name>.log`.
///
/// # Errors
///
/// - If a logs directory could not be located/created.
/// - If the logger could not be initialized.
pub fn configure_logger(file_name: &str) -> Result<(LoggerGuard, PathBuf), String> {
    let root_dir = PathBuf::from(".").canonicalize().map_err(|e| e.to_string())?;
    let logs_dir = root_dir.join("logs");
    if !logs_dir.exists() {
        std::fs::create_dir(&logs_dir).map_err(|e| e.to_string())?;
    }
    let log_path = logs_dir.join(format!("{file_name}.log"));

    let writer = FileAppender::builder().path(&log_path).rotate(Period::Day).build();

    let err_path = log_path.with_extension("err.log");

    let guard = ftlog::Builder::new()
        .max_log_level(LevelFilter::Debug)
        .root(writer)
        // the appender's own messages go to `err_path`
        .filter("ftlog::appender", "ftlog-appender", LevelFilter::Warn)
        .appender("ftlog-appender", FileAppender::new(err_path))
        .try_init()
        .map_err(|e| e.to_string())?;

    Ok((guard, log_path))
}

/// Converts a 1-indexed vertex label from the command line to a vertex index.
///
/// # Errors
///
/// * If `label` is zero.
pub fn vertex_index(label: usize) -> Result<usize, String> {
    label
        .checked_sub(1)
        .ok_or_else(|| "Vertex labels are 1-indexed; 0 is not a vertex.".to_string())
}

#[cfg(test)]
mod tests {
    use super::vertex_index;

    #[test]
    fn labels() -> Result<(), String> {
        assert_eq!(vertex_index(1)?, 0);
        assert_eq!(vertex_index(200)?, 199);
        assert!(vertex_index(0).is_err());
        Ok(())
    }
}
