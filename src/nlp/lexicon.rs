// Polarity lexicon and sentence scoring
//
// Scores follow the usual adjective-lexicon approach: each known word has a
// polarity in [-1, 1], a preceding intensifier scales it, a preceding
// negator multiplies it by -0.5, and the text score is the mean over every
// scored word.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::types::{FilingError, Result};

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z]+(?:'[a-z]+)?").unwrap());

const NEGATORS: &[&str] = &["not", "no", "never", "without", "cannot"];
const NEGATION_WINDOW: usize = 2;

const BUILTIN_WORDS: &[(&str, f64)] = &[
    ("good", 0.7),
    ("great", 0.8),
    ("excellent", 1.0),
    ("strong", 0.433),
    ("stronger", 0.5),
    ("robust", 0.5),
    ("solid", 0.4),
    ("healthy", 0.5),
    ("positive", 0.227),
    ("favorable", 0.5),
    ("improved", 0.4),
    ("improving", 0.4),
    ("successful", 0.75),
    ("profitable", 0.5),
    ("confident", 0.5),
    ("optimistic", 0.4),
    ("significant", 0.375),
    ("higher", 0.25),
    ("record", 0.3),
    ("best", 1.0),
    ("better", 0.5),
    ("new", 0.136),
    ("growing", 0.2),
    ("efficient", 0.4),
    ("attractive", 0.5),
    ("stable", 0.2),
    ("resilient", 0.4),
    ("leading", 0.3),
    ("important", 0.4),
    ("effective", 0.6),
    ("able", 0.5),
    ("large", 0.214),
    ("available", 0.4),
    ("bad", -0.7),
    ("poor", -0.4),
    ("weak", -0.375),
    ("weaker", -0.4),
    ("negative", -0.3),
    ("adverse", -0.5),
    ("adversely", -0.5),
    ("unfavorable", -0.5),
    ("difficult", -0.5),
    ("challenging", -0.4),
    ("uncertain", -0.25),
    ("volatile", -0.3),
    ("unable", -0.5),
    ("lower", -0.2),
    ("declining", -0.3),
    ("unprofitable", -0.5),
    ("harmful", -0.5),
    ("severe", -0.6),
    ("substantial", -0.1),
    ("costly", -0.4),
    ("inadequate", -0.5),
    ("unexpected", -0.1),
    ("sudden", -0.1),
    ("worse", -0.4),
    ("worst", -1.0),
    ("failed", -0.5),
    ("impaired", -0.5),
    ("limited", -0.071),
    ("critical", -0.1),
    ("risky", -0.5),
    ("unsuccessful", -0.5),
    ("uncollectible", -0.4),
];

const BUILTIN_INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("highly", 1.3),
    ("extremely", 1.5),
    ("significantly", 1.3),
    ("substantially", 1.3),
    ("materially", 1.2),
    ("particularly", 1.2),
    ("especially", 1.2),
    ("slightly", 0.5),
    ("somewhat", 0.7),
];

#[derive(Debug, Clone)]
pub struct Lexicon {
    words: HashMap<String, f64>,
    intensifiers: HashMap<String, f64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LexiconFile {
    #[serde(default)]
    words: HashMap<String, f64>,
    #[serde(default)]
    intensifiers: HashMap<String, f64>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            words: to_map(BUILTIN_WORDS),
            intensifiers: to_map(BUILTIN_INTENSIFIERS),
        }
    }
}

fn to_map(entries: &[(&str, f64)]) -> HashMap<String, f64> {
    entries.iter().map(|(w, p)| (w.to_string(), *p)).collect()
}

impl Lexicon {
    /// Built-in lexicon, extended from `path` when one is given.
    pub fn with_extension(path: Option<&Path>) -> Result<Self> {
        let mut lexicon = Self::default();
        if let Some(path) = path {
            lexicon.extend_from_file(path)?;
        }
        Ok(lexicon)
    }

    pub fn extend_from_file(&mut self, path: &Path) -> Result<()> {
        let content = fs::read_to_string(path)
            .map_err(|e| FilingError::Lexicon(format!("{}: {}", path.display(), e)))?;
        self.extend_from_toml(&content)
            .map_err(|e| FilingError::Lexicon(format!("{}: {}", path.display(), e)))
    }

    fn extend_from_toml(&mut self, content: &str) -> std::result::Result<(), String> {
        let file: LexiconFile = toml::from_str(content).map_err(|e| e.to_string())?;
        for (word, polarity) in file.words {
            if !(-1.0..=1.0).contains(&polarity) {
                return Err(format!("polarity for '{}' must be within [-1, 1], got {}", word, polarity));
            }
            self.words.insert(word.to_lowercase(), polarity);
        }
        for (word, factor) in file.intensifiers {
            self.intensifiers.insert(word.to_lowercase(), factor);
        }
        tracing::debug!(words = self.words.len(), "lexicon extended");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Mean polarity of the scored words in `text`, 0.0 when none are known.
    pub fn polarity(&self, text: &str) -> f64 {
        // Typographic apostrophes from OCR count as ASCII ones
        let lower = text.to_lowercase().replace('\u{2019}', "'");
        let tokens: Vec<&str> = WORD.find_iter(&lower).map(|m| m.as_str()).collect();

        let mut total = 0.0;
        let mut scored = 0usize;
        for (i, token) in tokens.iter().enumerate() {
            let Some(&base) = self.words.get(*token) else {
                continue;
            };
            let mut polarity = base;
            if i > 0 {
                if let Some(factor) = self.intensifiers.get(tokens[i - 1]) {
                    polarity *= factor;
                }
            }
            let window = &tokens[i.saturating_sub(NEGATION_WINDOW)..i];
            if window.iter().any(|w| is_negator(w)) {
                polarity *= -0.5;
            }
            total += polarity.clamp(-1.0, 1.0);
            scored += 1;
        }

        if scored == 0 {
            0.0
        } else {
            total / scored as f64
        }
    }
}

fn is_negator(word: &str) -> bool {
    NEGATORS.contains(&word) || word.ends_with("n't")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn unknown_text_is_neutral() {
        assert_eq!(Lexicon::default().polarity("The quarter ended on June 30."), 0.0);
    }

    #[test]
    fn scores_average_over_known_words() {
        let lexicon = Lexicon::default();
        assert!(close(lexicon.polarity("Good and bad news."), 0.0));
        assert!(close(lexicon.polarity("Great results."), 0.8));
    }

    #[test]
    fn negation_flips_and_dampens() {
        let lexicon = Lexicon::default();
        assert!(close(lexicon.polarity("Results were not good."), -0.35));
        assert!(close(lexicon.polarity("It wasn't bad."), 0.35));
    }

    #[test]
    fn curly_apostrophe_still_negates() {
        let lexicon = Lexicon::default();
        assert!(close(lexicon.polarity("It wasn\u{2019}t good."), -0.35));
        assert!(close(
            lexicon.polarity("Results weren\u{2019}t strong."),
            lexicon.polarity("Results weren't strong.")
        ));
    }

    #[test]
    fn intensifiers_scale_and_clamp() {
        let lexicon = Lexicon::default();
        assert!(close(lexicon.polarity("very strong"), 0.433 * 1.3));
        assert!(close(lexicon.polarity("extremely excellent"), 1.0));
    }

    #[test]
    fn extension_file_adds_words() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[words]\nheadwinds = -0.4\n\n[intensifiers]\nnotably = 1.1").unwrap();
        let lexicon = Lexicon::with_extension(Some(file.path())).unwrap();
        assert!(close(lexicon.polarity("Headwinds persisted."), -0.4));
        assert!(lexicon.len() > BUILTIN_WORDS.len());
    }

    #[test]
    fn missing_or_bad_extension_is_lexicon_error() {
        let err = Lexicon::with_extension(Some(Path::new("/nonexistent/lexicon.toml"))).unwrap_err();
        assert!(matches!(err, FilingError::Lexicon(_)));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[words]\nboom = 4.0").unwrap();
        let err = Lexicon::with_extension(Some(file.path())).unwrap_err();
        assert!(matches!(err, FilingError::Lexicon(_)));
    }
}
