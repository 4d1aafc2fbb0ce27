// Rule-based sentence segmentation for OCR text
use once_cell::sync::Lazy;
use regex::Regex;

static PARAGRAPH_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n[ \t\r]*\n").unwrap());

const ABBREVIATIONS: &[&str] = &[
    "inc.", "corp.", "co.", "ltd.", "llc.", "u.s.", "u.k.", "no.", "nos.", "mr.", "ms.", "mrs.",
    "dr.", "vs.", "e.g.", "i.e.", "etc.", "approx.", "est.", "fig.", "jan.", "feb.", "mar.",
    "apr.", "jun.", "jul.", "aug.", "sep.", "sept.", "oct.", "nov.", "dec.",
];

// Capitalized "Item 1." or "Part II." is a heading, not a sentence end.
// A lowercase "page 5." still ends one.
const REFERENCE_WORDS: &[&str] = &["item", "note", "part", "section", "page"];

/// A sentence with its lowercase form cached for keyword checks.
#[derive(Debug, Clone, PartialEq)]
pub struct Sentence {
    pub text: String,
    pub lower: String,
}

impl Sentence {
    pub fn new(text: &str) -> Self {
        let text = text.trim().to_string();
        let lower = text.to_lowercase();
        Self { text, lower }
    }

    pub fn contains_any(&self, terms: &[&str]) -> bool {
        terms.iter().any(|t| self.lower.contains(t))
    }

    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

/// Split text into sentences on terminal punctuation and blank lines.
pub fn split_sentences(text: &str) -> Vec<Sentence> {
    let mut sentences = Vec::new();
    for paragraph in PARAGRAPH_BREAK.split(text) {
        split_paragraph(paragraph, &mut sentences);
    }
    sentences
}

fn split_paragraph(paragraph: &str, out: &mut Vec<Sentence>) {
    let chars: Vec<(usize, char)> = paragraph.char_indices().collect();
    let mut start = 0;

    for i in 0..chars.len() {
        let (pos, ch) = chars[i];
        if !matches!(ch, '.' | '!' | '?') {
            continue;
        }

        // Closing quotes and brackets stay with the sentence they end
        let mut j = i + 1;
        while j < chars.len() && matches!(chars[j].1, '"' | '\'' | ')' | ']' | '\u{201d}' | '\u{2019}') {
            j += 1;
        }
        if j < chars.len() && !chars[j].1.is_whitespace() {
            continue;
        }
        if ch == '.' && ends_with_abbreviation(&paragraph[start..pos + 1]) {
            continue;
        }
        if next_word_is_lowercase(&chars[j..]) {
            continue;
        }

        let end = chars.get(j).map(|(idx, _)| *idx).unwrap_or(paragraph.len());
        push_sentence(&paragraph[start..end], out);
        start = end;
    }

    push_sentence(&paragraph[start..], out);
}

fn push_sentence(raw: &str, out: &mut Vec<Sentence>) {
    if !raw.trim().is_empty() {
        out.push(Sentence::new(raw));
    }
}

fn ends_with_abbreviation(segment: &str) -> bool {
    let mut tokens = segment.split_whitespace().rev();
    let Some(token) = tokens.next() else {
        return false;
    };
    if let Some(previous) = tokens.next() {
        if is_heading_reference(previous, token) {
            return true;
        }
    }
    let token = token.trim_start_matches(|c: char| matches!(c, '(' | '"' | '\''));
    let lower = token.to_lowercase();
    if ABBREVIATIONS.contains(&lower.as_str()) {
        return true;
    }
    // Single-letter initials such as "J."
    let mut chars = token.chars();
    matches!((chars.next(), chars.next(), chars.next()), (Some(c), Some('.'), None) if c.is_uppercase())
}

fn is_heading_reference(word: &str, label: &str) -> bool {
    let capitalized = word.chars().next().map(char::is_uppercase).unwrap_or(false);
    capitalized
        && REFERENCE_WORDS.contains(&word.to_lowercase().as_str())
        && is_heading_label(label.trim_end_matches('.'))
}

// "1", "7A", "II"
fn is_heading_label(label: &str) -> bool {
    let digits = label.trim_end_matches(|c: char| c.is_ascii_alphabetic());
    let suffix_len = label.len() - digits.len();
    let numbered =
        !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) && suffix_len <= 1;
    let roman = !label.is_empty() && label.chars().all(|c| matches!(c, 'I' | 'V' | 'X' | 'L' | 'C'));
    numbered || roman
}

fn next_word_is_lowercase(rest: &[(usize, char)]) -> bool {
    rest.iter()
        .map(|(_, c)| *c)
        .find(|c| !c.is_whitespace())
        .map(|c| c.is_lowercase())
        .unwrap_or(false)
}
