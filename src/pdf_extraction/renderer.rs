// Page rendering using pdftoppm
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

use crate::config::OcrConfig;
use crate::types::{FilingError, Result};

/// PNGs for every page of a document. Files live until this is dropped.
pub struct RenderedPages {
    _dir: TempDir,
    pub pages: Vec<RenderedPage>,
}

#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub page_number: usize,
    pub path: PathBuf,
}

pub struct PageRenderer {
    pdftoppm: PathBuf,
    dpi: u32,
    grayscale: bool,
}

impl PageRenderer {
    pub fn new(config: &OcrConfig) -> Self {
        Self {
            pdftoppm: config.pdftoppm_path.clone(),
            dpi: config.dpi,
            grayscale: config.grayscale,
        }
    }

    pub fn render_all(&self, pdf_path: &Path) -> Result<RenderedPages> {
        let temp_dir = TempDir::new()?;
        let output_prefix = temp_dir.path().join("page");

        tracing::info!(pdf = %pdf_path.display(), dpi = self.dpi, "rendering pages");

        let output = Command::new(&self.pdftoppm)
            .arg("-png")
            .arg("-r")
            .arg(self.dpi.to_string())
            .arg(pdf_path)
            .arg(&output_prefix)
            .output()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => {
                    FilingError::ToolMissing(self.pdftoppm.display().to_string())
                }
                _ => FilingError::Io(e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(FilingError::Render(format!("pdftoppm failed: {}", stderr.trim())));
        }

        let mut pages = collect_pages(temp_dir.path())?;
        if pages.is_empty() {
            return Err(FilingError::Render("pdftoppm produced no images".to_string()));
        }
        pages.sort_by_key(|p| p.page_number);

        if self.grayscale {
            for page in &pages {
                to_grayscale(&page.path)?;
            }
        }

        tracing::debug!(pages = pages.len(), "rendered");
        Ok(RenderedPages { _dir: temp_dir, pages })
    }
}

// pdftoppm names output `page-1.png`, or `page-01.png` once the document has
// ten or more pages, so sort on the parsed number rather than the name.
fn collect_pages(dir: &Path) -> Result<Vec<RenderedPage>> {
    let mut pages = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().map(|ext| ext == "png").unwrap_or(false) {
            if let Some(page_number) = page_number_from_name(&path) {
                pages.push(RenderedPage { page_number, path });
            }
        }
    }
    Ok(pages)
}

fn page_number_from_name(path: &Path) -> Option<usize> {
    let stem = path.file_stem()?.to_str()?;
    stem.rsplit('-').next()?.parse().ok()
}

// Rewrites the page as 8-bit luma in place
fn to_grayscale(path: &Path) -> Result<()> {
    let luma = image::open(path)?.to_luma8();
    luma.save(path)?;
    Ok(())
}
