// Geopolitical entity lookup backed by a fixed gazetteer
use once_cell::sync::Lazy;
use regex::Regex;

const GAZETTEER: &[&str] = &[
    // Countries
    "United States", "U.S.", "USA", "Canada", "Mexico", "Brazil", "Argentina", "Chile",
    "Colombia", "Peru", "United Kingdom", "U.K.", "UK", "Ireland", "France", "Germany",
    "Spain", "Portugal", "Italy", "Netherlands", "Belgium", "Switzerland", "Austria", "Sweden",
    "Norway", "Denmark", "Finland", "Poland", "Czech Republic", "Romania", "Greece", "Ukraine",
    "Russia", "Israel", "Egypt", "Saudi Arabia", "United Arab Emirates", "Qatar", "Kenya",
    "Nigeria", "South Africa", "India", "Pakistan", "Bangladesh", "Sri Lanka", "China",
    "Hong Kong", "Taiwan", "Japan", "South Korea", "Korea", "Singapore", "Malaysia",
    "Indonesia", "Thailand", "Vietnam", "Philippines", "Australia", "New Zealand",
    // U.S. states
    "Alabama", "Alaska", "Arizona", "Arkansas", "California", "Colorado", "Connecticut",
    "Delaware", "Florida", "Hawaii", "Idaho", "Illinois", "Indiana", "Iowa", "Kansas",
    "Kentucky", "Louisiana", "Maine", "Maryland", "Massachusetts", "Michigan", "Minnesota",
    "Mississippi", "Missouri", "Montana", "Nebraska", "Nevada", "New Hampshire", "New Jersey",
    "New Mexico", "New York", "North Carolina", "North Dakota", "Ohio", "Oklahoma", "Oregon",
    "Pennsylvania", "Rhode Island", "South Carolina", "South Dakota", "Tennessee", "Texas",
    "Utah", "Vermont", "Virginia", "West Virginia", "Wisconsin", "Wyoming", "Puerto Rico",
    // Cities
    "New York City", "San Francisco", "Los Angeles", "Chicago", "Seattle", "Boston",
    "Miami", "London", "Paris", "Berlin", "Amsterdam", "Madrid", "Toronto", "Sao Paulo",
    "Mexico City", "Tokyo", "Sydney", "Melbourne", "Dubai", "Mumbai", "Delhi", "Bangalore",
    "Shanghai", "Beijing",
];

static GPE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let mut names: Vec<&str> = GAZETTEER.to_vec();
    // Alternation is leftmost-first, so longer names must come first
    names.sort_by_key(|name| std::cmp::Reverse(name.len()));
    let alternatives: Vec<String> = names
        .iter()
        .map(|name| {
            let tail = if name.ends_with(|c: char| c.is_alphanumeric()) { r"\b" } else { "" };
            format!(r"\b{}{}", regex::escape(name), tail)
        })
        .collect();
    Regex::new(&alternatives.join("|")).unwrap()
});

/// Place names mentioned in `text`, in order of appearance.
pub fn geopolitical_entities(text: &str) -> Vec<String> {
    GPE_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_countries_and_cities() {
        assert_eq!(
            geopolitical_entities("Revenue in Brazil and New York City grew."),
            vec!["Brazil", "New York City"]
        );
    }

    #[test]
    fn dotted_abbreviations_match() {
        assert_eq!(geopolitical_entities("Most revenue came from the U.S. in Q2."), vec!["U.S."]);
    }

    #[test]
    fn partial_words_do_not_match() {
        assert!(geopolitical_entities("Indianapolis and Texasville").is_empty());
        assert!(geopolitical_entities("revenue from india").is_empty());
    }
}
