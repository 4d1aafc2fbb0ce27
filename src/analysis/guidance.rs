// Forward guidance: forward-looking sentences about financial results
use once_cell::sync::Lazy;
use regex::Regex;

use crate::nlp::{is_near_duplicate, Sentence};

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

const FORWARD_TERMS: &[&str] = &[
    "expect", "anticipate", "project", "future", "outlook", "forecast", "plan", "intend", "believe",
];
const FINANCIAL_TERMS: &[&str] = &[
    "revenue", "growth", "margin", "profit", "earnings", "cash flow", "expense", "investment",
    "market share", "guidance", "target", "goal", "estimate",
];
// Safe-harbor boilerplate
const EXCLUDE_TERMS: &[&str] = &[
    "forward-looking statements", "contain words such as", "similar terms or expressions",
    "identify forward-looking statements", "words such as", "similar terms",
];
const MIN_WORDS: usize = 6;

fn score(sentence: &Sentence) -> u32 {
    let mut score = 0;
    if sentence.contains_any(&["guidance", "target", "goal"]) {
        score += 2;
    }
    if sentence.contains_any(&["revenue", "growth", "margin"]) {
        score += 1;
    }
    if sentence.contains_any(&["increase", "decrease", "improve", "decline"]) {
        score += 1;
    }
    if sentence.word_count() > 8 {
        score += 1;
    }
    if sentence.text.contains(['$', '%']) {
        score += 2;
    }
    score
}

/// Highest-scoring distinct guidance sentences, at most `limit`.
pub fn extract_forward_guidance(sentences: &[Sentence], limit: usize) -> Vec<String> {
    let mut candidates: Vec<(u32, &str)> = sentences
        .iter()
        .filter(|s| !s.contains_any(EXCLUDE_TERMS))
        .filter(|s| s.contains_any(FORWARD_TERMS) && s.contains_any(FINANCIAL_TERMS))
        .map(|s| (score(s), s.text.as_str()))
        .collect();
    // Stable, so ties keep document order
    candidates.sort_by(|a, b| b.0.cmp(&a.0));

    let mut selected: Vec<String> = Vec::new();
    for (_, text) in candidates {
        if selected.len() >= limit {
            break;
        }
        if is_near_duplicate(text, &selected) {
            continue;
        }
        let cleaned = WHITESPACE.replace_all(text, " ").trim().to_string();
        if cleaned.split_whitespace().count() >= MIN_WORDS && cleaned.ends_with(['.', '!', '?']) {
            selected.push(cleaned);
        }
    }
    selected
}
