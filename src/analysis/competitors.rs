// Competitor mentions
use crate::nlp::Sentence;

pub const NO_COMPETITORS: &str = "No direct competitor mentions found.";

/// One line per competitor named in the filing, quoting the first sentence
/// that mentions it.
pub fn competitive_analysis(
    lower_text: &str,
    sentences: &[Sentence],
    competitors: &[String],
) -> Vec<String> {
    let analysis: Vec<String> = competitors
        .iter()
        .filter_map(|competitor| {
            let needle = competitor.to_lowercase();
            if !lower_text.contains(&needle) {
                return None;
            }
            sentences
                .iter()
                .find(|s| s.lower.contains(&needle))
                .map(|s| format!("{} competition: {}", competitor, s.text))
        })
        .collect();

    if analysis.is_empty() {
        vec![NO_COMPETITORS.to_string()]
    } else {
        analysis
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::split_sentences;

    fn competitors() -> Vec<String> {
        vec!["Lyft".into(), "DoorDash".into(), "Grubhub".into()]
    }

    #[test]
    fn quotes_first_mention_in_competitor_order() {
        let text = "DoorDash expanded into groceries. We compete with LYFT in most cities. \
            Lyft cut prices.";
        let sentences = split_sentences(text);
        assert_eq!(
            competitive_analysis(&text.to_lowercase(), &sentences, &competitors()),
            vec![
                "Lyft competition: We compete with LYFT in most cities.",
                "DoorDash competition: DoorDash expanded into groceries.",
            ]
        );
    }

    #[test]
    fn placeholder_when_nobody_is_mentioned() {
        let text = "We had a quiet quarter.";
        assert_eq!(
            competitive_analysis(&text.to_lowercase(), &split_sentences(text), &competitors()),
            vec![NO_COMPETITORS]
        );
    }
}
