/// Token representation
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub text: String,
    /// Position in the original token stream. Filters that drop tokens keep
    /// the remaining positions untouched, so phrase adjacency still sees
    /// the gap left by a removed token.
    pub position: u32,
}

impl Token {
    pub fn new(text: String, position: u32) -> Self {
        Token { text, position }
    }
}
