// Less obvious signals: litigation load, revenue geography, cost pressure
use once_cell::sync::Lazy;
use regex::Regex;

use crate::nlp::{geopolitical_entities, Sentence};

static LEGAL_MENTIONS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"litigation|lawsuit|legal proceeding").unwrap());

const LITIGATION_THRESHOLD: usize = 5;

pub fn uncover_hidden_insights(lower_text: &str, sentences: &[Sentence]) -> Vec<String> {
    let mut insights = Vec::new();

    let litigation_count = LEGAL_MENTIONS.find_iter(lower_text).count();
    if litigation_count > LITIGATION_THRESHOLD {
        insights.push(format!("High litigation risk: {} mentions.", litigation_count));
    }

    for sentence in sentences.iter().filter(|s| s.lower.contains("revenue")) {
        for place in geopolitical_entities(&sentence.text) {
            let insight = format!("Revenue tied to {} market.", place);
            if !insights.contains(&insight) {
                insights.push(insight);
            }
        }
    }

    if lower_text.contains("cost") && lower_text.contains("increase") {
        insights.push("Cost pressures detected.".to_string());
    }

    insights
}
