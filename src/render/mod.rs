//! Chart rendering
//!
//! The analyzer hands backend-independent [`Chart`] descriptions to a
//! [`ChartRenderer`]; [`SvgRenderer`] draws them with `plotters`.

pub mod chart;
pub mod svg;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::error::util::ensure_directory;

pub use chart::{Chart, ChartKind, Orientation, Series};
pub use svg::SvgRenderer;

/// Something that turns a chart description into an image file
pub trait ChartRenderer {
    /// File extension of the images this renderer writes
    fn extension(&self) -> &'static str;

    /// Render one chart into `dir`, returning the written path
    fn render(&mut self, chart: &Chart, dir: &Path) -> Result<PathBuf>;
}

/// Path a chart is written to inside the output directory
#[must_use]
pub fn chart_path(dir: &Path, slug: &str, extension: &str) -> PathBuf {
    dir.join(format!("{slug}.{extension}"))
}

/// Remove every regular file from the output directory
///
/// The directory is created when missing. Subdirectories and their
/// contents are kept. Returns the number of files removed.
pub fn clear_output_dir(dir: &Path) -> Result<usize> {
    ensure_directory(dir)?;

    let mut removed = 0;
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            fs::remove_file(entry.path())?;
            removed += 1;
        }
    }

    if removed > 0 {
        log::info!("Removed {} previous files from {}", removed, dir.display());
    }
    Ok(removed)
}
