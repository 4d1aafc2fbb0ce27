// Numeric metric extraction driven by a table of regex patterns
use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::MetricPattern;
use crate::types::{NumericMetric, Result};

static SCALED_VALUE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(-?[\d.]+)\s*(billion|million|thousand|bn|mm)?$").unwrap()
});

// Prose fallbacks share the same tail: "$1.2 billion", "$845 million", "$3,010"
const MONEY_TAIL: &str = r"\s*\$\s*([\d,.]*\d\s*(?:billion|million|thousand)?)";

/// Patterns tried in order for every metric. The first capture wins.
pub fn builtin_patterns() -> Vec<MetricPattern> {
    // The subject opens a sentence or follows a consolidating word, so
    // "Mobility revenue was ..." never fills the total
    let prose = |subject: &str| {
        format!(
            r"(?i)(?:^|[.\n]\s*|\b(?:total|net|our|consolidated)\s+){}\s+(?:of|was|were|totaled|totalled|reached|(?:increased|decreased|grew|fell) to){}",
            subject, MONEY_TAIL
        )
    };
    let table = |row: &str| format!(r"{}\s*\$\s*(\d[\d,]*)\s*\$\s*[\d,]+", row);
    let balance = |row: &str| format!(r"{}\s*\$?\s*[\d,]+\s+\$?\s*(\d[\d,]*)", row);
    let margin = |segment: &str| format!(r"{}.*?Operating margin\s*([\d.-]+)%", segment);

    vec![
        metric("revenue", "$M", vec![table("Revenue"), prose("revenue")]),
        metric(
            "net_income",
            "$M",
            vec![
                r"Net income attributable to [^$]*?\$\s*(\d[\d,]*)\s*\$\s*[\d,]+".to_string(),
                prose("net income"),
            ],
        ),
        metric("total_assets", "$M", vec![balance("Total assets")]),
        metric("cash", "$M", vec![balance("Cash and cash equivalents")]),
        metric(
            "shares_outstanding",
            "K shares",
            vec![r"[\d,]+ and (\d[\d,]*) shares issued and outstanding".to_string()],
        ),
        metric("share_repurchases", "K shares", vec![r"Total\s*(\d[\d,]*)\s*[^\d]".to_string()]),
        metric("sbc", "$M", vec![table("Stock-based compensation expense")]),
        metric("mobility_revenue", "$M", vec![table("Mobility")]),
        metric("delivery_revenue", "$M", vec![table("Delivery")]),
        metric("freight_revenue", "$M", vec![table("Freight")]),
        metric(
            "operating_margin",
            "%",
            vec![
                r"Operating margin\s*([\d.-]+)%".to_string(),
                r"(?i)operating margin\s+(?:of|was)\s*(-?[\d.]+)%".to_string(),
            ],
        ),
        metric("mobility_operating_margin", "%", vec![margin("Mobility")]),
        metric("delivery_operating_margin", "%", vec![margin("Delivery")]),
        metric("freight_operating_margin", "%", vec![margin("Freight")]),
    ]
}

fn metric(name: &str, unit: &str, patterns: Vec<String>) -> MetricPattern {
    MetricPattern {
        name: name.to_string(),
        patterns,
        unit: unit.to_string(),
    }
}

/// A metric pattern with its regexes compiled.
#[derive(Debug, Clone)]
pub struct MetricExtractor {
    pub name: String,
    pub unit: String,
    patterns: Vec<Regex>,
}

impl MetricExtractor {
    pub fn compile(pattern: &MetricPattern) -> Result<Self> {
        let patterns = pattern
            .patterns
            .iter()
            .map(|p| Regex::new(p))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self {
            name: pattern.name.clone(),
            unit: pattern.unit.clone(),
            patterns,
        })
    }

    pub fn extract(&self, text: &str) -> NumericMetric {
        let value = self
            .patterns
            .iter()
            .find_map(|re| re.captures(text).and_then(|caps| caps.get(1)))
            .map(|m| normalize_value(m.as_str(), &self.unit));
        NumericMetric {
            name: self.name.clone(),
            value,
            unit: self.unit.clone(),
        }
    }
}

/// Built-in table with user patterns merged in: same name replaces,
/// anything new is appended.
pub fn compile_table(overrides: &[MetricPattern]) -> Result<Vec<MetricExtractor>> {
    let mut table = builtin_patterns();
    for user in overrides {
        match table.iter_mut().find(|m| m.name == user.name) {
            Some(existing) => *existing = user.clone(),
            None => table.push(user.clone()),
        }
    }
    table.iter().map(MetricExtractor::compile).collect()
}

/// Drop thousands separators and convert scale words into the metric's unit.
pub fn normalize_value(raw: &str, unit: &str) -> String {
    let cleaned = raw.replace(',', "");
    let cleaned = cleaned.trim();
    let Some(caps) = SCALED_VALUE.captures(cleaned) else {
        return cleaned.to_string();
    };
    let (Some(number), Some(scale)) = (caps.get(1), caps.get(2)) else {
        return caps.get(1).map(|m| m.as_str()).unwrap_or(cleaned).to_string();
    };
    let Ok(number) = number.as_str().parse::<f64>() else {
        return cleaned.to_string();
    };

    let magnitude = match scale.as_str().to_lowercase().as_str() {
        "billion" | "bn" => 1e9,
        "million" | "mm" => 1e6,
        _ => 1e3,
    };
    let unit_magnitude = match unit {
        "$M" => 1e6,
        "K shares" => 1e3,
        _ => 1.0,
    };
    format_number(number * magnitude / unit_magnitude)
}

fn format_number(value: f64) -> String {
    let rounded = (value * 1e6).round() / 1e6;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{}", rounded)
    }
}
