// filingscan: metrics, guidance, SWOT and tone from financial filings
pub mod analysis;
pub mod config;
pub mod nlp;
pub mod pdf_extraction;
pub mod report;
pub mod types;

pub use analysis::FilingAnalyzer;
pub use config::{AnalyzerConfig, ExtractionMode};
pub use report::{render_json, render_text, FilingReport, OutputFormat};
pub use types::{FilingError, Result};
