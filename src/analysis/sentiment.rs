// Section-level sentiment for MD&A and Risk Factors
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::nlp::Lexicon;

static MDA_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Management['\u{2019}]s Discussion and Analysis").unwrap());
static RISK_HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"Risk Factors").unwrap());
static ITEM_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"Item \d").unwrap());

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SectionSentiment {
    pub management_discussion: f64,
    pub risk_factors: f64,
}

/// Text from the first `heading` up to the next `Item <digit>` marker.
/// A section with no terminating marker is treated as absent.
pub fn section_span<'a>(text: &'a str, heading: &Regex) -> Option<&'a str> {
    let start = heading.find(text)?;
    let end = ITEM_MARKER.find_at(text, start.end())?;
    Some(&text[start.start()..end.start()])
}

pub fn analyze_sentiment(text: &str, lexicon: &Lexicon) -> SectionSentiment {
    let score = |heading: &Regex| {
        section_span(text, heading)
            .map(|span| lexicon.polarity(span))
            .unwrap_or(0.0)
    };
    SectionSentiment {
        management_discussion: score(&*MDA_HEADING),
        risk_factors: score(&*RISK_HEADING),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_stops_before_next_item() {
        let text = "Item 2. Management's Discussion and Analysis results were strong. Item 3. Other";
        assert_eq!(
            section_span(text, &MDA_HEADING),
            Some("Management's Discussion and Analysis results were strong. ")
        );
    }

    #[test]
    fn scores_each_section() {
        let text = "Management's Discussion and Analysis Results were excellent. \
            Item 1A. Risk Factors Conditions may be difficult. Item 2. Done";
        let sentiment = analyze_sentiment(text, &Lexicon::default());
        assert!((sentiment.management_discussion - 1.0).abs() < 1e-9);
        assert!((sentiment.risk_factors + 0.5).abs() < 1e-9);
    }

    #[test]
    fn missing_terminator_scores_zero() {
        let text = "Management's Discussion and Analysis Results were excellent.";
        assert_eq!(analyze_sentiment(text, &Lexicon::default()), SectionSentiment::default());
    }
}
