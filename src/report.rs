// Report assembly and rendering
use serde::Serialize;
use std::fmt;

use crate::analysis::{SectionSentiment, Swot, Tone};
use crate::types::{LabeledItems, NumericMetric};

// Balance sheet detail kept in JSON output only
const TEXT_HIDDEN_METRICS: &[&str] = &["total_assets", "cash"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Everything the analyzer found in one filing.
#[derive(Debug, Clone, Serialize)]
pub struct FilingReport {
    pub source: String,
    pub generated_at: String,
    pub numeric_metrics: Vec<NumericMetric>,
    pub forward_guidance: Vec<String>,
    pub sentiment: SectionSentiment,
    pub business_updates: Vec<LabeledItems>,
    pub segment_updates: Vec<LabeledItems>,
    pub competitive_analysis: Vec<String>,
    pub swot: Swot,
    pub hidden_insights: Vec<String>,
    pub tone: Tone,
}

impl FilingReport {
    pub fn render(&self, format: OutputFormat) -> serde_json::Result<String> {
        match format {
            OutputFormat::Text => Ok(render_text(self)),
            OutputFormat::Json => render_json(self),
        }
    }
}

pub fn render_text(report: &FilingReport) -> String {
    report.to_string()
}

pub fn render_json(report: &FilingReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

fn write_list(f: &mut fmt::Formatter<'_>, items: &[String]) -> fmt::Result {
    for item in items {
        writeln!(f, "- {}", item)?;
    }
    Ok(())
}

fn write_groups<'a, 'b, I>(f: &mut fmt::Formatter<'_>, groups: I) -> fmt::Result
where
    I: IntoIterator<Item = (&'a str, &'b [String])>,
{
    for (label, items) in groups {
        writeln!(f, "\n{}:", label)?;
        write_list(f, items)?;
    }
    Ok(())
}

fn labeled(groups: &[LabeledItems]) -> impl Iterator<Item = (&str, &[String])> {
    groups.iter().map(|g| (g.label.as_str(), g.items.as_slice()))
}

impl fmt::Display for FilingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### Key Metrics")?;
        for metric in &self.numeric_metrics {
            if !TEXT_HIDDEN_METRICS.contains(&metric.name.as_str()) {
                writeln!(f, "{}: {}", metric.name, metric)?;
            }
        }

        writeln!(f, "\n### Forward Guidance")?;
        write_list(f, &self.forward_guidance)?;

        writeln!(f, "\n### Sentiment")?;
        writeln!(f, "management_discussion: {:.3}", self.sentiment.management_discussion)?;
        writeln!(f, "risk_factors: {:.3}", self.sentiment.risk_factors)?;

        writeln!(f, "\n### Business Updates")?;
        write_groups(f, labeled(&self.business_updates))?;

        writeln!(f, "\n### Segment Performance")?;
        write_groups(f, labeled(&self.segment_updates))?;

        writeln!(f, "\n### Competitive Analysis")?;
        write_list(f, &self.competitive_analysis)?;

        writeln!(f, "\n### SWOT Analysis")?;
        write_groups(f, self.swot.quadrants())?;

        writeln!(f, "\n### Key Insights")?;
        write_list(f, &self.hidden_insights)?;

        writeln!(f, "\n### Tone Analysis")?;
        write_groups(f, self.tone.buckets())
    }
}
