// PDF validation with lopdf - no external tools needed
use lopdf::Document;
use std::path::Path;

use crate::types::{FilingError, Result};

/// Load a PDF document using lopdf, mapping failures to our error kinds.
pub fn load_pdf(path: &Path) -> Result<Document> {
    if !path.exists() {
        return Err(FilingError::FileNotFound(path.to_path_buf()));
    }
    Document::load(path).map_err(|e| FilingError::InvalidPdf(format!("{}: {}", path.display(), e)))
}

pub fn get_page_count(path: &Path) -> Result<usize> {
    let document = load_pdf(path)?;
    let count = document.get_pages().len();
    if count == 0 {
        return Err(FilingError::InvalidPdf(format!("{} has no pages", path.display())));
    }
    Ok(count)
}
