// Text extraction routing: tesseract OCR, pdftotext, or both
//
// Scanned filings have no usable text layer, so OCR is the default. Native
// mode calls `pdftotext -layout <pdf> -` and splits the output on form feeds.
// Auto mode tries the text layer first and falls back to OCR when the text
// scores below AUTO_QUALITY_THRESHOLD.

use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;

use super::basic::get_page_count;
use super::ocr_engine::OcrEngine;
use super::renderer::PageRenderer;
use crate::config::{AnalyzerConfig, ExtractionMode};
use crate::types::{DocumentText, FilingError, PageText, Result};

pub const AUTO_QUALITY_THRESHOLD: f32 = 0.6;

pub struct ExtractionRouter {
    mode: ExtractionMode,
    renderer: PageRenderer,
    engine: OcrEngine,
    pdftotext: PathBuf,
}

impl ExtractionRouter {
    pub fn new(config: &AnalyzerConfig) -> Self {
        Self {
            mode: config.mode,
            renderer: PageRenderer::new(&config.ocr),
            engine: OcrEngine::new(&config.ocr),
            pdftotext: config.ocr.pdftotext_path.clone(),
        }
    }

    pub fn extract(&self, pdf_path: &Path) -> Result<DocumentText> {
        let start = Instant::now();
        let page_count = get_page_count(pdf_path)?;
        tracing::info!(pdf = %pdf_path.display(), page_count, mode = ?self.mode, "extracting text");

        let document = match self.mode {
            ExtractionMode::Ocr => self.extract_ocr(pdf_path)?,
            ExtractionMode::Native => self.extract_native(pdf_path)?,
            ExtractionMode::Auto => match self.extract_native(pdf_path) {
                Ok(native) => {
                    let quality = mean_quality(&native);
                    if quality >= AUTO_QUALITY_THRESHOLD {
                        native
                    } else {
                        tracing::info!(quality, "text layer looks unusable, falling back to OCR");
                        self.extract_ocr(pdf_path)?
                    }
                }
                Err(err) => {
                    tracing::warn!(error = %err, "text layer unreadable, falling back to OCR");
                    self.extract_ocr(pdf_path)?
                }
            },
        };

        tracing::info!(
            pages = document.page_count(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "extraction complete"
        );
        Ok(document)
    }

    fn extract_ocr(&self, pdf_path: &Path) -> Result<DocumentText> {
        let rendered = self.renderer.render_all(pdf_path)?;
        let mut pages = Vec::with_capacity(rendered.pages.len());

        for page in &rendered.pages {
            let text = self.engine.recognize(&page.path, page.page_number)?;
            let quality_score = calculate_quality_score(&text);
            tracing::debug!(page = page.page_number, chars = text.len(), quality_score, "OCR page");
            if quality_score < AUTO_QUALITY_THRESHOLD {
                tracing::warn!(page = page.page_number, quality_score, "low OCR quality");
            }
            pages.push(PageText {
                page_number: page.page_number,
                text,
                quality_score,
            });
        }

        Ok(DocumentText::from_pages(pages))
    }

    fn extract_native(&self, pdf_path: &Path) -> Result<DocumentText> {
        let output = Command::new(&self.pdftotext)
            .arg("-layout")
            .arg(pdf_path)
            .arg("-")
            .output()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => {
                    FilingError::ToolMissing(self.pdftotext.display().to_string())
                }
                _ => FilingError::Io(e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(FilingError::Render(format!("pdftotext failed: {}", stderr.trim())));
        }

        let text = String::from_utf8_lossy(&output.stdout);
        Ok(split_form_feeds(&text))
    }
}

/// pdftotext ends every page with a form feed.
fn split_form_feeds(text: &str) -> DocumentText {
    let mut chunks: Vec<&str> = text.split('\x0c').collect();
    if chunks.len() > 1 && chunks.last().map(|c| c.trim().is_empty()).unwrap_or(false) {
        chunks.pop();
    }
    let pages = chunks
        .into_iter()
        .enumerate()
        .map(|(i, chunk)| PageText {
            page_number: i + 1,
            text: chunk.to_string(),
            quality_score: calculate_quality_score(chunk),
        })
        .collect();
    DocumentText::from_pages(pages)
}

fn mean_quality(document: &DocumentText) -> f32 {
    if document.pages.is_empty() {
        return 0.0;
    }
    let total: f32 = document.pages.iter().map(|p| p.quality_score).sum();
    total / document.pages.len() as f32
}

/// Heuristic 0..=1 score for extracted page text. Each check that passes
/// adds an equal share. Ratios are over chars, not bytes.
pub fn calculate_quality_score(text: &str) -> f32 {
    let char_count = text.chars().count();
    if char_count == 0 {
        return 0.0;
    }

    let checks = [
        char_count > 10,
        text.contains(". "),
        plausible_vowel_ratio(text, char_count),
        mostly_wordlike(text),
        plausible_whitespace_ratio(text, char_count),
    ];

    let passed = checks.iter().filter(|&&x| x).count() as f32;
    passed / checks.len() as f32
}

fn ratio(text: &str, char_count: usize, pred: impl Fn(char) -> bool) -> f32 {
    text.chars().filter(|c| pred(*c)).count() as f32 / char_count as f32
}

// Tesseract noise on scans tends to be consonant soup or runs of symbols
fn plausible_vowel_ratio(text: &str, char_count: usize) -> bool {
    let vowels = ratio(text, char_count, |c| "aeiouAEIOU".contains(c));
    (0.1..=0.6).contains(&vowels)
}

// More than half the tokens are word-sized and mostly letters. Figures
// like "11,188" don't count against the page since they come with prose.
fn mostly_wordlike(text: &str) -> bool {
    let mut total = 0usize;
    let mut wordlike = 0usize;
    for token in text.split_whitespace() {
        total += 1;
        let len = token.chars().count();
        if !(2..=20).contains(&len) {
            continue;
        }
        let letters = token.chars().filter(|c| c.is_alphabetic()).count();
        if letters as f32 / len as f32 > 0.7 {
            wordlike += 1;
        }
    }
    total > 0 && wordlike as f32 / total as f32 > 0.5
}

fn plausible_whitespace_ratio(text: &str, char_count: usize) -> bool {
    let spaces = ratio(text, char_count, char::is_whitespace);
    spaces > 0.05 && spaces < 0.5
}
