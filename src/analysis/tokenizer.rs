use crate::analysis::token::Token;

pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<Token>;

    fn name(&self) -> &str;
}

/// Splits on runs of whitespace, nothing else. Film text is short prose;
/// the query side splits the same way so index and query terms line up.
#[derive(Debug, Clone, Default)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        text.split_whitespace()
            .enumerate()
            .map(|(position, word)| Token::new(word.to_string(), position as u32))
            .collect()
    }

    fn name(&self) -> &str {
        "whitespace"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_whitespace_runs() {
        let tokens = WhitespaceTokenizer.tokenize("The  Great \t Escape");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["The", "Great", "Escape"]);
        assert_eq!(tokens[2].position, 2);
    }

    #[test]
    fn blank_text_yields_no_tokens() {
        assert!(WhitespaceTokenizer.tokenize("   ").is_empty());
    }
}
