use crate::analysis::filter::TokenFilter;
use crate::analysis::filters::lowercase::LowercaseFilter;
use crate::analysis::filters::stopword::StopWordFilter;
use crate::analysis::token::Token;
use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};

/// Text analysis pipeline
pub struct Analyzer {
    pub tokenizer: Box<dyn Tokenizer>,
    pub filters: Vec<Box<dyn TokenFilter>>,
    pub name: String,
}

impl Analyzer {
    pub fn new(name: String, tokenizer: Box<dyn Tokenizer>) -> Self {
        Analyzer {
            tokenizer,
            filters: Vec::new(),
            name,
        }
    }

    pub fn add_filter(mut self, filter: Box<dyn TokenFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn analyze(&self, text: &str) -> Vec<Token> {
        let mut tokens = self.tokenizer.tokenize(text);

        for filter in &self.filters {
            tokens = filter.filter(tokens);
        }

        tokens
    }

    /// The one pipeline used on both the build and query sides: whitespace
    /// split, lowercase, English stop words out.
    pub fn film_text() -> Self {
        Analyzer::new(
            "film_text".to_string(),
            Box::new(WhitespaceTokenizer),
        )
        .add_filter(Box::new(LowercaseFilter))
        .add_filter(Box::new(StopWordFilter::english()))
    }
}
