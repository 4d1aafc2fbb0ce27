// Management tone buckets
use serde::Serialize;

use crate::nlp::{Lexicon, Sentence};

const SURPRISE_TERMS: &[&str] = &["unexpected", "surprise", "sudden"];
const WEAKNESS_TERMS: &[&str] = &["decline", "loss", "weak", "challenge"];
const CAUTION_TERMS: &[&str] = &["risk", "uncertain", "caution", "may"];
const OPTIMISM_TERMS: &[&str] = &["growth", "strong", "opportunity", "confident"];

const OPTIMISM_MIN_POLARITY: f64 = 0.1;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Tone {
    pub surprises: Vec<String>,
    pub weaknesses: Vec<String>,
    pub caution: Vec<String>,
    pub optimism: Vec<String>,
}

impl Tone {
    pub fn buckets(&self) -> [(&'static str, &[String]); 4] {
        [
            ("Surprises", self.surprises.as_slice()),
            ("Weaknesses", self.weaknesses.as_slice()),
            ("Caution", self.caution.as_slice()),
            ("Optimism", self.optimism.as_slice()),
        ]
    }
}

fn push_limited(bucket: &mut Vec<String>, sentence: &Sentence, limit: usize) {
    if bucket.len() < limit {
        bucket.push(sentence.text.clone());
    }
}

/// A sentence can land in several buckets; each bucket keeps its first `limit`.
pub fn tone_analysis(sentences: &[Sentence], lexicon: &Lexicon, limit: usize) -> Tone {
    let mut tone = Tone::default();

    for sentence in sentences {
        let polarity = lexicon.polarity(&sentence.text);

        if sentence.contains_any(SURPRISE_TERMS) {
            push_limited(&mut tone.surprises, sentence, limit);
        }
        if sentence.contains_any(WEAKNESS_TERMS) && polarity < 0.0 {
            push_limited(&mut tone.weaknesses, sentence, limit);
        }
        if sentence.contains_any(CAUTION_TERMS) {
            push_limited(&mut tone.caution, sentence, limit);
        }
        if sentence.contains_any(OPTIMISM_TERMS) && polarity > OPTIMISM_MIN_POLARITY {
            push_limited(&mut tone.optimism, sentence, limit);
        }
    }

    tone
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::split_sentences;

    #[test]
    fn buckets_use_keywords_and_polarity() {
        let text = "An unexpected charge hit results. \
            The decline was severe. \
            The decline was good for focus. \
            Demand may soften. \
            We are confident in strong growth.";
        let tone = tone_analysis(&split_sentences(text), &Lexicon::default(), 3);
        assert_eq!(tone.surprises, vec!["An unexpected charge hit results."]);
        assert_eq!(tone.weaknesses, vec!["The decline was severe."]);
        assert_eq!(tone.caution, vec!["Demand may soften."]);
        assert_eq!(tone.optimism, vec!["We are confident in strong growth."]);
    }

    #[test]
    fn each_bucket_is_capped() {
        let text = "Risk one. Risk two. Risk three. Risk four.";
        let tone = tone_analysis(&split_sentences(text), &Lexicon::default(), 3);
        assert_eq!(tone.caution.len(), 3);
        assert!(tone.surprises.is_empty());
    }
}
