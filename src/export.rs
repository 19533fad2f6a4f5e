use std::fs;
use std::path::Path;

use log::info;
use svg2pdf::usvg;
use svg2pdf::{ConversionOptions, PageOptions};

use crate::error::{Error, Result};

/// Converts the composed SVG figure to a PDF with vector text and writes it
/// in a single step, so a failed run never leaves a partial document behind.
pub fn export_pdf(document: &str, path: &Path) -> Result<()> {
    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();

    let tree =
        usvg::Tree::from_str(document, &options).map_err(|e| Error::Pdf(e.to_string()))?;
    let pdf = svg2pdf::to_pdf(
        &tree,
        ConversionOptions::default(),
        PageOptions::default(),
    )
    .map_err(|e| Error::Pdf(e.to_string()))?;

    fs::write(path, pdf).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    info!("wrote {}", path.display());
    Ok(())
}
