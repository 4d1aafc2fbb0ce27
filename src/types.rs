// Core types and error handling for filingscan
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

// Error types
#[derive(Debug, thiserror::Error)]
pub enum FilingError {
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("not a readable PDF: {0}")]
    InvalidPdf(String),

    #[error("page rendering failed: {0}")]
    Render(String),

    #[error("OCR failed on page {page}: {message}")]
    Ocr { page: usize, message: String },

    #[error("required tool not found: {0}")]
    ToolMissing(String),

    #[error("lexicon error: {0}")]
    Lexicon(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, FilingError>;

/// OCR output for one page. Page numbers are 1-based.
#[derive(Debug, Clone, Serialize)]
pub struct PageText {
    pub page_number: usize,
    pub text: String,
    pub quality_score: f32,
}

/// All text pulled from a document, page by page.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DocumentText {
    pub pages: Vec<PageText>,
}

impl DocumentText {
    pub fn from_pages(pages: Vec<PageText>) -> Self {
        Self { pages }
    }

    /// Page texts concatenated with no separator.
    pub fn full_text(&self) -> String {
        self.pages.iter().map(|p| p.text.as_str()).collect()
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

/// A single extracted figure, e.g. `revenue: 11188 $M`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericMetric {
    pub name: String,
    pub value: Option<String>,
    pub unit: String,
}

impl NumericMetric {
    /// Leading numeric value, 0.0 when absent or unparsable.
    pub fn as_f64(&self) -> f64 {
        self.value
            .as_deref()
            .and_then(|v| v.parse::<f64>().ok())
            .unwrap_or(0.0)
    }
}

impl fmt::Display for NumericMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(v) => write!(f, "{} {}", v, self.unit),
            None => write!(f, "N/A {}", self.unit),
        }
    }
}

/// A labelled list of sentences, e.g. a segment and its updates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabeledItems {
    pub label: String,
    pub items: Vec<String>,
}

impl LabeledItems {
    pub fn new(label: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            label: label.into(),
            items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_display_uses_na_placeholder() {
        let m = NumericMetric {
            name: "cash".into(),
            value: None,
            unit: "$M".into(),
        };
        assert_eq!(m.to_string(), "N/A $M");
        assert_eq!(m.as_f64(), 0.0);
    }

    #[test]
    fn document_text_joins_pages_without_separator() {
        let doc = DocumentText::from_pages(vec![
            PageText { page_number: 1, text: "Item 1".into(), quality_score: 0.0 },
            PageText { page_number: 2, text: " Item 2".into(), quality_score: 0.0 },
        ]);
        assert_eq!(doc.full_text(), "Item 1 Item 2");
        assert_eq!(doc.page_count(), 2);
    }
}
