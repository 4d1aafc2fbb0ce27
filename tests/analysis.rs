// tests/analysis.rs
use rstest::{fixture, rstest};
use std::path::PathBuf;

use filingscan::types::LabeledItems;
use filingscan::{AnalyzerConfig, FilingAnalyzer};

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

#[fixture]
fn quarterly() -> FilingAnalyzer {
    let text = std::fs::read_to_string(fixture_path("quarterly.txt")).unwrap();
    FilingAnalyzer::from_text(text, AnalyzerConfig::default()).unwrap()
}

fn metric(text: &str, name: &str) -> String {
    FilingAnalyzer::from_text(text, AnalyzerConfig::default())
        .unwrap()
        .extract_numeric_metrics()
        .into_iter()
        .find(|m| m.name == name)
        .unwrap()
        .to_string()
}

#[rstest]
#[case("Revenue $ 11,188 $ 9,292", "revenue", "11188 $M")]
#[case("Revenue of $1.2 billion for the quarter.", "revenue", "1200 $M")]
#[case("Net income attributable to common stockholders $ 1,017 $ 394", "net_income", "1017 $M")]
#[case("Stock-based compensation expense $ 436 $ 484", "sbc", "436 $M")]
#[case("Freight $ 1,276 $ 1,284", "freight_revenue", "1276 $M")]
#[case("Operating margin 7.2%", "operating_margin", "7.2 %")]
#[case("Mobility revenue was $6,902 million. Revenue was $11,188 million.", "revenue", "11188 $M")]
#[case("Total, net of shares withheld for taxes.", "share_repurchases", "N/A K shares")]
#[case("Nothing numeric in this filing.", "revenue", "N/A $M")]
fn metric_patterns(#[case] text: &str, #[case] name: &str, #[case] expected: &str) {
    assert_eq!(metric(text, name), expected);
}

#[test]
fn segment_revenue_first_keeps_total_for_swot() {
    let analyzer = FilingAnalyzer::from_text(
        "Mobility revenue was $6,902 million. Revenue was $11,188 million.",
        AnalyzerConfig::default(),
    )
    .unwrap();
    assert_eq!(
        analyzer.swot_analysis().strengths,
        vec!["Robust revenue base: $11,188M."]
    );
}

#[rstest]
fn guidance_from_fixture(quarterly: FilingAnalyzer) {
    assert_eq!(
        quarterly.extract_forward_guidance(),
        vec!["We expect revenue growth to continue next year as demand increases."]
    );
}

#[rstest]
fn sentiment_sections_from_fixture(quarterly: FilingAnalyzer) {
    let sentiment = quarterly.analyze_sentiment();
    assert!(sentiment.management_discussion > 0.0);
    assert!((sentiment.risk_factors - -0.375).abs() < 1e-9);
}

#[rstest]
fn updates_from_fixture(quarterly: FilingAnalyzer) {
    let updates = quarterly.business_updates_summary();
    assert_eq!(
        updates[0],
        LabeledItems::new(
            "Segment Performance",
            vec![
                "Mobility revenue was $6,902 for the quarter. (Metrics: 6,902)".to_string(),
                "Delivery revenue grew 15% in Brazil. (Metrics: 15%)".to_string(),
            ]
        )
    );
    assert_eq!(
        updates[1].items,
        vec!["Our strong brand and partnership network remain healthy."]
    );
    assert!(updates[2].items.is_empty());

    let segments = quarterly.segment_specific_updates();
    assert_eq!(
        segments[0].items,
        vec!["Mobility revenue was $6,902 for the quarter. (Revenue: $6902M)"]
    );
    assert_eq!(segments[1].items, vec!["Delivery revenue grew 15% in Brazil."]);
    assert!(segments[2].items.is_empty());
}

#[rstest]
fn swot_and_insights_from_fixture(quarterly: FilingAnalyzer) {
    let swot = quarterly.swot_analysis();
    assert_eq!(
        swot.strengths,
        vec![
            "Robust revenue base: $11,188M.",
            "Strategic partnerships boosting scale.",
            "Strong brand recognition.",
        ]
    );
    assert!(swot.weaknesses.is_empty());
    assert_eq!(swot.opportunities, vec!["Rising demand in core segments."]);
    assert_eq!(
        swot.threats,
        vec!["Regulatory challenges.", "Competitive pressure from peers."]
    );

    assert_eq!(
        quarterly.uncover_hidden_insights(),
        vec!["Revenue tied to Brazil market."]
    );
    assert_eq!(
        quarterly.competitive_analysis(),
        vec!["Lyft competition: Lyft continues to compete aggressively on price."]
    );
}

#[rstest]
fn tone_from_fixture(quarterly: FilingAnalyzer) {
    let tone = quarterly.tone_analysis();
    assert_eq!(
        tone.optimism,
        vec!["Our strong brand and partnership network remain healthy."]
    );
    assert!(tone
        .caution
        .contains(&"Regulation is uncertain and may be adverse.".to_string()));
    assert!(tone.surprises.is_empty());
    assert!(tone.weaknesses.is_empty());
}

#[rstest]
#[case(1, 1)]
#[case(5, 1)]
fn guidance_limit_from_config(#[case] limit: usize, #[case] expected: usize) {
    let mut config = AnalyzerConfig::default();
    config.limits.guidance = limit;
    let text = std::fs::read_to_string(fixture_path("quarterly.txt")).unwrap();
    let analyzer = FilingAnalyzer::from_text(text, config).unwrap();
    assert_eq!(analyzer.extract_forward_guidance().len(), expected);
}
