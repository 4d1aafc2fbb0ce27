// Token-level helpers: number detection and word overlap
use std::collections::HashSet;

const NUMBER_WORDS: &[&str] = &[
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
    "hundred", "thousand", "million", "billion", "trillion",
];

/// True for tokens such as `1,204`, `3.5`, `1/2` or `billion`.
pub fn like_num(token: &str) -> bool {
    let token = token.trim_start_matches(|c: char| matches!(c, '+' | '-' | '~' | '\u{b1}'));
    if token.is_empty() {
        return false;
    }
    let digits: String = token.chars().filter(|c| *c != ',' && *c != '.').collect();
    if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
        return true;
    }
    if let Some((num, den)) = token.split_once('/') {
        let all_digits = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());
        if all_digits(num) && all_digits(den) {
            return true;
        }
    }
    NUMBER_WORDS.contains(&token.to_lowercase().as_str())
}

/// Numbers and percentages mentioned in a sentence, in order.
pub fn numeric_tokens(sentence: &str) -> Vec<String> {
    sentence
        .split_whitespace()
        .map(|raw| {
            raw.trim_matches(|c: char| matches!(c, '(' | ')' | ',' | '.' | ';' | ':' | '"' | '\''))
                .trim_start_matches('$')
        })
        .filter(|token| token.ends_with('%') || like_num(token))
        .map(str::to_string)
        .collect()
}

fn word_set(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// True when more than 70% of the candidate's words already appear in one
/// of the `seen` strings.
pub fn is_near_duplicate<'a, I>(candidate: &str, seen: I) -> bool
where
    I: IntoIterator<Item = &'a String>,
{
    let words = word_set(candidate);
    if words.is_empty() {
        return false;
    }
    seen.into_iter().any(|other| {
        let other_words = word_set(other);
        let shared = words.intersection(&other_words).count();
        shared as f64 / words.len() as f64 > 0.7
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_and_words_look_numeric() {
        assert!(like_num("11,188"));
        assert!(like_num("1.2"));
        assert!(like_num("-3"));
        assert!(like_num("3/4"));
        assert!(like_num("Billion"));
        assert!(!like_num("revenue"));
        assert!(!like_num("."));
        assert!(!like_num("Q3"));
    }

    #[test]
    fn numeric_tokens_strip_currency_and_punctuation() {
        assert_eq!(
            numeric_tokens("Revenue of $1.2 billion, up 15% (from 1,044)."),
            vec!["1.2", "billion", "15%", "1,044"]
        );
        assert!(numeric_tokens("No figures here.").is_empty());
    }

    #[test]
    fn near_duplicates_need_more_than_seventy_percent_overlap() {
        let seen = vec!["We expect revenue growth to continue next year.".to_string()];
        assert!(is_near_duplicate("We expect revenue growth to continue next year", &seen));
        assert!(!is_near_duplicate("Freight volumes declined sharply in Europe.", &seen));
        assert!(!is_near_duplicate("", &seen));
    }
}
