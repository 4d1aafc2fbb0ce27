// SWOT classification from keyword presence and headline metrics
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::types::NumericMetric;

static LITIGATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"litigation|lawsuit").unwrap());

const REVENUE_STRENGTH_THRESHOLD: f64 = 10_000.0;
const MARGIN_STRENGTH_THRESHOLD: f64 = 5.0;
const LITIGATION_THRESHOLD: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Swot {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub opportunities: Vec<String>,
    pub threats: Vec<String>,
}

impl Swot {
    pub fn quadrants(&self) -> [(&'static str, &[String]); 4] {
        [
            ("Strengths", self.strengths.as_slice()),
            ("Weaknesses", self.weaknesses.as_slice()),
            ("Opportunities", self.opportunities.as_slice()),
            ("Threats", self.threats.as_slice()),
        ]
    }
}

fn metric_value(metrics: &[NumericMetric], name: &str) -> f64 {
    metrics
        .iter()
        .find(|m| m.name == name)
        .map(NumericMetric::as_f64)
        .unwrap_or(0.0)
}

fn metric_text<'a>(metrics: &'a [NumericMetric], name: &str) -> Option<&'a str> {
    metrics
        .iter()
        .find(|m| m.name == name)
        .and_then(|m| m.value.as_deref())
}

/// `11188` -> `11,188`; any fractional part is kept as is.
pub fn group_thousands(value: &str) -> String {
    let (sign, unsigned) = match value.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", value),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::new();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

pub fn swot_analysis(lower_text: &str, metrics: &[NumericMetric], competitors: &[String]) -> Swot {
    let has = |term: &str| lower_text.contains(term);
    let mut swot = Swot::default();

    let revenue = metric_value(metrics, "revenue");
    let operating_margin = metric_value(metrics, "operating_margin");
    let litigation_mentions = LITIGATION.find_iter(lower_text).count();

    // Strengths
    if revenue > REVENUE_STRENGTH_THRESHOLD {
        let shown = metric_text(metrics, "revenue").unwrap_or_default();
        swot.strengths.push(format!("Robust revenue base: ${}M.", group_thousands(shown)));
    }
    if has("partnership") {
        swot.strengths.push("Strategic partnerships boosting scale.".into());
    }
    if has("brand") {
        swot.strengths.push("Strong brand recognition.".into());
    }
    if operating_margin > MARGIN_STRENGTH_THRESHOLD {
        swot.strengths.push("Healthy operating margin.".into());
    }

    // Weaknesses
    if has("cost") && has("increase") {
        swot.weaknesses.push("Rising operating costs.".into());
    }
    if litigation_mentions > LITIGATION_THRESHOLD {
        swot.weaknesses.push("Persistent litigation risks.".into());
    }
    if has("debt") {
        swot.weaknesses.push("Debt burden detected.".into());
    }
    if operating_margin < 0.0 {
        swot.weaknesses.push("Negative operating margin.".into());
    }

    // Opportunities
    if has("expansion") || has("new market") {
        swot.opportunities.push("Growth via market expansion.".into());
    }
    if has("autonomous") {
        swot.opportunities.push("Innovation in autonomous tech.".into());
    }
    if has("demand") && has("increase") {
        swot.opportunities.push("Rising demand in core segments.".into());
    }
    if has("acquisition") {
        swot.opportunities.push("Growth through acquisitions.".into());
    }

    // Threats
    if has("regulation") {
        swot.threats.push("Regulatory challenges.".into());
    }
    if competitors.iter().take(2).any(|c| has(&c.to_lowercase())) {
        swot.threats.push("Competitive pressure from peers.".into());
    }
    if has("inflation") {
        swot.threats.push("Inflation impacting costs.".into());
    }
    if has("labor") && has("shortage") {
        swot.threats.push("Labor shortages.".into());
    }

    swot
}
