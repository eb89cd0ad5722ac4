//! Word-list vegetarian classifier
//!
//! A dish counts as vegetarian when its normalized name or description
//! contains a safe word (e.g. "vegan"), or contains none of the danger
//! words (meat and seafood terms). Safe words win over danger words, so
//! "vegan bacon" passes.

/// Classifies dishes from their text using safe/danger word lists
pub struct VegetarianClassifier {
    safe_words: Vec<String>,
    danger_words: Vec<String>,
}

impl VegetarianClassifier {
    pub fn new(safe_words: Vec<String>, danger_words: Vec<String>) -> Self {
        Self {
            safe_words: safe_words.iter().map(|w| normalize(w)).collect(),
            danger_words: danger_words.iter().map(|w| normalize(w)).collect(),
        }
    }

    pub fn is_vegetarian(&self, name: &str, description: &str) -> bool {
        let name = normalize(name);
        let description = normalize(description);

        if self
            .safe_words
            .iter()
            .any(|word| name.contains(word) || description.contains(word))
        {
            return true;
        }

        !self
            .danger_words
            .iter()
            .any(|word| name.contains(word) || description.contains(word))
    }
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Collapse runs of whitespace and turn sentence breaks into semicolons,
/// so descriptions read well on one SMS line
pub fn tidy_description(description: &str) -> String {
    description
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace('.', ";")
        .trim_end_matches(';')
        .to_string()
}
