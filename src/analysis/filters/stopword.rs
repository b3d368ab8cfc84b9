use std::collections::HashSet;

use crate::analysis::filter::TokenFilter;
use crate::analysis::token::Token;

pub struct StopWordFilter {
    pub stop_words: HashSet<String>,
}

impl StopWordFilter {
    pub fn new(stop_words: Vec<String>) -> Self {
        StopWordFilter {
            stop_words: stop_words.into_iter().collect(),
        }
    }

    /// Fixed English stop-word set. Runs after lowercasing.
    pub fn english() -> Self {
        let words = vec![
            "a", "an", "and", "are", "as", "at", "be", "by", "for",
            "from", "has", "he", "in", "is", "it", "its", "of", "on",
            "that", "the", "to", "was", "will", "with",
        ]
        .into_iter()
        .map(String::from)
        .collect();

        StopWordFilter::new(words)
    }
}

impl TokenFilter for StopWordFilter {
    fn filter(&self, tokens: Vec<Token>) -> Vec<Token> {
        tokens
            .into_iter()
            .filter(|token| !self.stop_words.contains(&token.text))
            .collect()
    }

    fn name(&self) -> &str {
        "stop_words"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_stop_words_and_keeps_positions() {
        let filter = StopWordFilter::english();
        let tokens = vec![
            Token::new("the".to_string(), 0),
            Token::new("great".to_string(), 1),
            Token::new("escape".to_string(), 2),
        ];
        let kept = filter.filter(tokens);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].text, "great");
        assert_eq!(kept[0].position, 1);
    }
}
