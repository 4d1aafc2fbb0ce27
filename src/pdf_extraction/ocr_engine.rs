// OCR Engine module wrapping the tesseract CLI
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::OcrConfig;
use crate::types::{FilingError, Result};

pub struct OcrEngine {
    tesseract: PathBuf,
    language: String,
    psm: u8,
}

impl OcrEngine {
    pub fn new(config: &OcrConfig) -> Self {
        Self {
            tesseract: config.tesseract_path.clone(),
            language: config.language.clone(),
            psm: config.psm,
        }
    }

    /// Recognize the text on one rendered page image.
    pub fn recognize(&self, image_path: &Path, page_number: usize) -> Result<String> {
        let output = Command::new(&self.tesseract)
            .arg(image_path)
            .arg("stdout")
            .arg("-l")
            .arg(&self.language)
            .arg("--psm")
            .arg(self.psm.to_string())
            .output()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => {
                    FilingError::ToolMissing(self.tesseract.display().to_string())
                }
                _ => FilingError::Io(e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(FilingError::Ocr {
                page: page_number,
                message: stderr.trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Check that pdftoppm and tesseract both respond.
pub fn tools_available(config: &OcrConfig) -> bool {
    let pdftoppm = Command::new(&config.pdftoppm_path).arg("-v").output().is_ok();
    let tesseract = Command::new(&config.tesseract_path)
        .arg("--version")
        .output()
        .is_ok();

    if !pdftoppm {
        tracing::debug!("pdftoppm not found - install poppler-utils for OCR support");
    }
    if !tesseract {
        tracing::debug!("tesseract not found - install tesseract-ocr for OCR support");
    }

    pdftoppm && tesseract
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_tesseract_is_tool_missing() {
        let config = OcrConfig {
            tesseract_path: PathBuf::from("/nonexistent/tesseract"),
            ..OcrConfig::default()
        };
        let engine = OcrEngine::new(&config);
        let err = engine.recognize(Path::new("page-1.png"), 1).unwrap_err();
        assert!(matches!(err, FilingError::ToolMissing(_)));
    }

    #[test]
    fn bogus_tools_are_unavailable() {
        let config = OcrConfig {
            pdftoppm_path: PathBuf::from("/nonexistent/pdftoppm"),
            tesseract_path: PathBuf::from("/nonexistent/tesseract"),
            ..OcrConfig::default()
        };
        assert!(!tools_available(&config));
    }
}
