// Configuration for filingscan
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::types::{FilingError, Result};

pub const CONFIG_ENV: &str = "FILINGSCAN_CONFIG";
pub const PDFTOPPM_ENV: &str = "FILINGSCAN_PDFTOPPM";
pub const TESSERACT_ENV: &str = "FILINGSCAN_TESSERACT";
pub const PDFTOTEXT_ENV: &str = "FILINGSCAN_PDFTOTEXT";

/// How page text is obtained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionMode {
    /// Render every page and run tesseract
    #[default]
    Ocr,
    /// Use the embedded text layer via pdftotext
    Native,
    /// Text layer first, OCR when it looks like garbage
    Auto,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyzerConfig {
    pub mode: ExtractionMode,
    pub ocr: OcrConfig,
    pub lexicon_path: Option<PathBuf>,
    pub segments: Vec<String>,
    pub competitors: Vec<String>,
    /// Extra metric patterns. An entry whose name matches a built-in metric
    /// replaces it; anything else is appended.
    pub metrics: Vec<MetricPattern>,
    pub limits: Limits,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct OcrConfig {
    pub pdftoppm_path: PathBuf,
    pub tesseract_path: PathBuf,
    pub pdftotext_path: PathBuf,
    pub dpi: u32,
    pub language: String,
    /// Tesseract page segmentation mode
    pub psm: u8,
    pub grayscale: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MetricPattern {
    pub name: String,
    pub patterns: Vec<String>,
    pub unit: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Limits {
    pub guidance: usize,
    pub business_updates: usize,
    pub segment_updates: usize,
    pub tone: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            mode: ExtractionMode::default(),
            ocr: OcrConfig::default(),
            lexicon_path: None,
            segments: default_segments(),
            competitors: default_competitors(),
            metrics: Vec::new(),
            limits: Limits::default(),
        }
    }
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            pdftoppm_path: tool_path(PDFTOPPM_ENV, "pdftoppm"),
            tesseract_path: tool_path(TESSERACT_ENV, "tesseract"),
            pdftotext_path: tool_path(PDFTOTEXT_ENV, "pdftotext"),
            dpi: 300,
            language: "eng".to_string(),
            psm: 3,
            grayscale: true,
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            guidance: 5,
            business_updates: 2,
            segment_updates: 3,
            tone: 3,
        }
    }
}

fn default_segments() -> Vec<String> {
    ["Mobility", "Delivery", "Freight"].map(String::from).to_vec()
}

fn default_competitors() -> Vec<String> {
    ["Lyft", "DoorDash", "Grubhub", "Instacart"].map(String::from).to_vec()
}

// Get tool path from environment or fall back to PATH lookup
fn tool_path(var: &str, default: &str) -> PathBuf {
    env::var(var)
        .unwrap_or_else(|_| default.to_string())
        .into()
}

impl AnalyzerConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| FilingError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml(&content)
            .map_err(|e| FilingError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Resolve config: explicit path, then `$FILINGSCAN_CONFIG`, then the
    /// user config dir, then defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        if let Ok(path) = env::var(CONFIG_ENV) {
            return Self::load(Path::new(&path));
        }
        if let Some(path) = default_config_path() {
            if path.exists() {
                tracing::debug!(path = %path.display(), "loading user config");
                return Self::load(&path);
            }
        }
        Ok(Self::default())
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("filingscan").join("config.toml"))
}
