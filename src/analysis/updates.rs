// Business update categories and per-segment updates
use once_cell::sync::Lazy;
use regex::Regex;

use crate::nlp::{is_near_duplicate, numeric_tokens, Sentence};
use crate::types::LabeledItems;

static DOLLAR_AMOUNT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$\s*(\d[\d,]*)").unwrap());

struct UpdateCategory {
    label: &'static str,
    keywords: &'static [&'static str],
    metrics: &'static [&'static str],
    base_score: u32,
}

const CATEGORIES: &[UpdateCategory] = &[
    UpdateCategory {
        label: "Segment Performance",
        keywords: &["mobility", "delivery", "freight", "segment", "business unit"],
        metrics: &["revenue", "growth", "margin", "volume", "orders", "users"],
        base_score: 3,
    },
    UpdateCategory {
        label: "Strategic Initiatives",
        keywords: &["investment", "acquisition", "partnership", "expansion", "launch", "new market"],
        metrics: &["investment", "acquisition", "partnership", "expansion"],
        base_score: 2,
    },
    UpdateCategory {
        label: "Technology & Innovation",
        keywords: &["technology", "innovation", "product", "feature", "platform", "system"],
        metrics: &["development", "launch", "upgrade", "integration"],
        base_score: 2,
    },
];

// Financial statement captions, not narrative
const STATEMENT_TERMS: &[&str] = &[
    "condensed consolidated", "statements of operations", "assets", "liabilities",
];

/// Narrative updates grouped by category, top `limit` per category.
pub fn business_updates_summary(sentences: &[Sentence], limit: usize) -> Vec<LabeledItems> {
    let mut scored: Vec<Vec<(u32, String)>> = vec![Vec::new(); CATEGORIES.len()];
    let mut seen: Vec<String> = Vec::new();

    for sentence in sentences {
        if sentence.contains_any(STATEMENT_TERMS) {
            continue;
        }
        let numbers = numeric_tokens(&sentence.text);

        for (idx, category) in CATEGORIES.iter().enumerate() {
            if !sentence.contains_any(category.keywords) {
                continue;
            }
            let mut score = category.base_score;
            if sentence.contains_any(category.metrics) {
                score += 1;
            }
            if !numbers.is_empty() {
                score += 1;
            }

            let mut update = sentence.text.clone();
            if !numbers.is_empty() {
                update = format!("{} (Metrics: {})", update, numbers.join(", "));
            }

            if !is_near_duplicate(&sentence.lower, &seen) {
                scored[idx].push((score, update.clone()));
                seen.push(update);
            }
        }
    }

    CATEGORIES
        .iter()
        .zip(scored)
        .map(|(category, mut updates)| {
            updates.sort_by(|a, b| b.0.cmp(&a.0));
            let items = updates.into_iter().take(limit).map(|(_, u)| u).collect();
            LabeledItems::new(category.label, items)
        })
        .collect()
}

/// Sentences mentioning each segment. A sentence belongs to the first
/// segment it names.
pub fn segment_specific_updates(
    sentences: &[Sentence],
    segments: &[String],
    limit: usize,
) -> Vec<LabeledItems> {
    let needles: Vec<String> = segments.iter().map(|s| s.to_lowercase()).collect();
    let mut buckets: Vec<Vec<String>> = vec![Vec::new(); segments.len()];

    for sentence in sentences {
        let Some(idx) = needles.iter().position(|n| sentence.lower.contains(n.as_str())) else {
            continue;
        };
        if buckets[idx].len() >= limit {
            continue;
        }
        let mut update = sentence.text.clone();
        if let Some(caps) = DOLLAR_AMOUNT.captures(&sentence.text) {
            update.push_str(&format!(" (Revenue: ${}M)", caps[1].replace(',', "")));
        }
        buckets[idx].push(update);
    }

    segments
        .iter()
        .zip(buckets)
        .map(|(segment, items)| LabeledItems::new(segment.clone(), items))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::split_sentences;

    fn items<'a>(groups: &'a [LabeledItems], label: &str) -> &'a [String] {
        &groups.iter().find(|g| g.label == label).unwrap().items
    }

    #[test]
    fn categorizes_and_appends_metrics() {
        let text = "Mobility revenue grew 15% year over year. \
            We completed the acquisition of a grocery platform. \
            Total assets and liabilities are shown below.";
        let updates = business_updates_summary(&split_sentences(text), 2);
        assert_eq!(
            items(&updates, "Segment Performance"),
            ["Mobility revenue grew 15% year over year. (Metrics: 15%)"]
        );
        // "platform" would also match technology, but the first category claims it
        assert_eq!(
            items(&updates, "Strategic Initiatives"),
            ["We completed the acquisition of a grocery platform."]
        );
        assert!(items(&updates, "Technology & Innovation").is_empty());
    }

    #[test]
    fn keeps_top_scored_per_category() {
        let text = "Our segment results were mixed. \
            Delivery orders rose to 2.4 billion. \
            Freight volume was steady this quarter overall.";
        let updates = business_updates_summary(&split_sentences(text), 2);
        assert_eq!(
            items(&updates, "Segment Performance"),
            [
                "Delivery orders rose to 2.4 billion. (Metrics: 2.4, billion)",
                "Freight volume was steady this quarter overall.",
            ]
        );
    }

    #[test]
    fn segments_take_first_match_and_revenue() {
        let segments: Vec<String> = vec!["Mobility".into(), "Delivery".into(), "Freight".into()];
        let text = "Mobility and Delivery both grew, reaching $ 6,902 in total. \
            Delivery revenue was $3,321 for the quarter. \
            Freight was flat.";
        let updates = segment_specific_updates(&split_sentences(text), &segments, 3);
        assert_eq!(
            items(&updates, "Mobility"),
            ["Mobility and Delivery both grew, reaching $ 6,902 in total. (Revenue: $6902M)"]
        );
        assert_eq!(
            items(&updates, "Delivery"),
            ["Delivery revenue was $3,321 for the quarter. (Revenue: $3321M)"]
        );
        assert_eq!(items(&updates, "Freight"), ["Freight was flat."]);
    }

    #[test]
    fn bare_dollar_sign_is_not_revenue() {
        let segments = vec!["Freight".to_string()];
        let text = "Freight contracts are priced in $, not euros.";
        let updates = segment_specific_updates(&split_sentences(text), &segments, 3);
        assert_eq!(updates[0].items, ["Freight contracts are priced in $, not euros."]);
    }

    #[test]
    fn segment_limit_applies() {
        let segments = vec!["Freight".to_string()];
        let text = "Freight one. Freight two. Freight three. Freight four.";
        let updates = segment_specific_updates(&split_sentences(text), &segments, 3);
        assert_eq!(updates[0].items.len(), 3);
    }
}
