//! Log lines for dataset and chart operations
//!
//! Every stage reports through these helpers so a run reads as one
//! consistent sequence: what started, how many rows it touched, which
//! charts landed where.

use std::path::Path;
use std::time::Duration;

/// Announce work on the dataset or the chart directory, e.g.
/// `Writing dataset to DB_compensacion.parquet`
pub fn log_operation_start(operation: &str, path: &Path) {
    log::info!("{operation} {}", path.display());
}

/// Report finished work with its row count and, when measured, its duration
///
/// `operation` is a past-tense verb such as "wrote" or "loaded".
pub fn log_operation_complete(operation: &str, path: &Path, rows: usize, elapsed: Option<Duration>) {
    log::info!("{}", completion_message(operation, path, rows, elapsed));
}

fn completion_message(operation: &str, path: &Path, rows: usize, elapsed: Option<Duration>) -> String {
    let mut message = format!("{operation} {rows} rows ({})", path.display());
    if let Some(duration) = elapsed {
        message.push_str(&format!(" in {duration:?}"));
    }
    message
}

/// Warn about a condition that does not stop the run
pub fn log_warning(message: &str, path: Option<&Path>) {
    match path {
        Some(path) => log::warn!("{message} [{}]", path.display()),
        None => log::warn!("{message}"),
    }
}

/// Record a chart file written by the renderer
pub fn log_chart_saved(slug: &str, path: &Path) {
    log::info!("Chart '{}' saved: {}", slug, path.display());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_message() {
        let path = Path::new("DB_compensacion.parquet");
        assert_eq!(
            completion_message("wrote", path, 5000, None),
            "wrote 5000 rows (DB_compensacion.parquet)"
        );

        let timed = completion_message("loaded", path, 2, Some(Duration::from_millis(15)));
        assert!(timed.starts_with("loaded 2 rows (DB_compensacion.parquet) in "));
        assert!(timed.ends_with("15ms"));
    }
}
