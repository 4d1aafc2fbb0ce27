// Filing analysis over extracted text
pub mod competitors;
pub mod guidance;
pub mod insights;
pub mod metrics;
pub mod sentiment;
pub mod swot;
pub mod tone;
pub mod updates;

pub use competitors::NO_COMPETITORS;
pub use metrics::{builtin_patterns, compile_table, MetricExtractor};
pub use sentiment::SectionSentiment;
pub use swot::Swot;
pub use tone::Tone;

use std::path::Path;

use crate::config::{AnalyzerConfig, ExtractionMode};
use crate::nlp::{split_sentences, Lexicon, Sentence};
use crate::pdf_extraction::{tools_available, ExtractionRouter};
use crate::report::FilingReport;
use crate::types::{FilingError, LabeledItems, NumericMetric, Result};

/// Holds one filing's text, split into sentences once, and runs every
/// analysis over it.
pub struct FilingAnalyzer {
    source: String,
    text: String,
    lower: String,
    sentences: Vec<Sentence>,
    config: AnalyzerConfig,
    lexicon: Lexicon,
    metrics: Vec<MetricExtractor>,
}

impl FilingAnalyzer {
    /// Extract text from a PDF and prepare it for analysis.
    pub fn open(path: &Path, config: AnalyzerConfig) -> Result<Self> {
        if !path.exists() {
            return Err(FilingError::FileNotFound(path.to_path_buf()));
        }
        if config.mode != ExtractionMode::Native && !tools_available(&config.ocr) {
            tracing::warn!("pdftoppm or tesseract not found, OCR will fail");
        }
        let document = ExtractionRouter::new(&config).extract(path)?;
        tracing::debug!(pages = document.page_count(), "document text ready");
        Ok(Self::from_text(document.full_text(), config)?.with_source(path.display().to_string()))
    }

    /// Analyze text that has already been extracted.
    pub fn from_text(text: impl Into<String>, config: AnalyzerConfig) -> Result<Self> {
        let text = text.into();
        let lexicon = Lexicon::with_extension(config.lexicon_path.as_deref())?;
        let metrics = compile_table(&config.metrics)?;
        let sentences = split_sentences(&text);
        tracing::debug!(
            chars = text.len(),
            sentences = sentences.len(),
            metrics = metrics.len(),
            "analyzer ready"
        );

        Ok(Self {
            source: String::from("<text>"),
            lower: text.to_lowercase(),
            text,
            sentences,
            config,
            lexicon,
            metrics,
        })
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    pub fn extract_numeric_metrics(&self) -> Vec<NumericMetric> {
        self.metrics.iter().map(|m| m.extract(&self.text)).collect()
    }

    pub fn extract_forward_guidance(&self) -> Vec<String> {
        guidance::extract_forward_guidance(&self.sentences, self.config.limits.guidance)
    }

    pub fn analyze_sentiment(&self) -> SectionSentiment {
        sentiment::analyze_sentiment(&self.text, &self.lexicon)
    }

    pub fn business_updates_summary(&self) -> Vec<LabeledItems> {
        updates::business_updates_summary(&self.sentences, self.config.limits.business_updates)
    }

    pub fn segment_specific_updates(&self) -> Vec<LabeledItems> {
        updates::segment_specific_updates(
            &self.sentences,
            &self.config.segments,
            self.config.limits.segment_updates,
        )
    }

    pub fn competitive_analysis(&self) -> Vec<String> {
        competitors::competitive_analysis(&self.lower, &self.sentences, &self.config.competitors)
    }

    pub fn swot_analysis(&self) -> Swot {
        self.swot_with(&self.extract_numeric_metrics())
    }

    fn swot_with(&self, metrics: &[NumericMetric]) -> Swot {
        swot::swot_analysis(&self.lower, metrics, &self.config.competitors)
    }

    pub fn uncover_hidden_insights(&self) -> Vec<String> {
        insights::uncover_hidden_insights(&self.lower, &self.sentences)
    }

    pub fn tone_analysis(&self) -> Tone {
        tone::tone_analysis(&self.sentences, &self.lexicon, self.config.limits.tone)
    }

    /// Run every analysis and collect the results.
    pub fn full_report(&self) -> FilingReport {
        let numeric_metrics = self.extract_numeric_metrics();
        let found = numeric_metrics.iter().filter(|m| m.value.is_some()).count();
        tracing::info!(source = %self.source, metrics_found = found, "building report");

        FilingReport {
            source: self.source.clone(),
            generated_at: chrono::Local::now().to_rfc3339(),
            swot: self.swot_with(&numeric_metrics),
            numeric_metrics,
            forward_guidance: self.extract_forward_guidance(),
            sentiment: self.analyze_sentiment(),
            business_updates: self.business_updates_summary(),
            segment_updates: self.segment_specific_updates(),
            competitive_analysis: self.competitive_analysis(),
            hidden_insights: self.uncover_hidden_insights(),
            tone: self.tone_analysis(),
        }
    }
}
