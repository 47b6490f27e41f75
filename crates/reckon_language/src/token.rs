//! Token types for the Reckon expression language.
//!
//! Tokens are the output of the scanner and flow through every later
//! stage; the normalizer rewrites them in place and the hint pass fills
//! in the UI annotations.

/// A classified fragment of source text.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// The classification of this token.
    pub kind: TokenKind,
    /// The exact substring this token represents. Operators are single
    /// characters; numbers keep their full lexical form including any
    /// `0x` prefix or fused sign.
    pub text: String,
    /// Nesting level of enclosing parentheses (UI annotation, filled by
    /// the hint pass; zero until then).
    pub depth: u32,
    /// Identifier shared by exactly one open/close parenthesis pair,
    /// unique across the token sequence (UI annotation).
    pub pair: Option<u32>,
}

impl Token {
    /// Creates a new token with empty UI annotations.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            depth: 0,
            pair: None,
        }
    }

    /// Creates the null token that seeds "previous token" tracking.
    #[must_use]
    pub fn null() -> Self {
        Self::new(TokenKind::Null, "")
    }

    /// Returns true if this token has the given kind.
    #[must_use]
    pub fn is_kind(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// Returns the single operator character of an Operator token.
    ///
    /// Returns `None` when the token is not an operator or its text is
    /// not exactly one character.
    #[must_use]
    pub fn operator_symbol(&self) -> Option<char> {
        if self.kind == TokenKind::Operator && self.text.chars().count() == 1 {
            self.text.chars().next()
        } else {
            None
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} : '{}'", self.kind.name(), self.text)
    }
}

/// An ordered sequence of tokens; insertion order is significant and
/// preserved end to end.
pub type TokenList = Vec<Token>;

/// Token classifications for the Reckon expression language.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// Absence of a token; seeds lookbehind state, never scanned.
    Null,
    /// A run of spaces.
    Whitespace,
    /// Numeric literal, decimal or `0x` hexadecimal, possibly signed.
    Number,
    /// Single-character operator.
    Operator,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `,`
    Comma,
    /// Alphanumeric name, not yet resolved.
    Identifier,
    /// Captured function call: full `name(args...)` text.
    Function,
    /// `;` statement separator.
    Semicolon,
    /// Identifier resolved to a VM variable reference (bytecode path).
    Variable,
    /// Synthesized token standing for a whole expression (diagnostics).
    Expression,
    /// Character the scanner could not classify.
    Unknown,
}

impl TokenKind {
    /// Returns a human-readable name for this token kind.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Whitespace => "whitespace",
            Self::Number => "number",
            Self::Operator => "operator",
            Self::OpenParen => "'('",
            Self::CloseParen => "')'",
            Self::Comma => "','",
            Self::Identifier => "identifier",
            Self::Function => "function",
            Self::Semicolon => "';'",
            Self::Variable => "variable",
            Self::Expression => "expression",
            Self::Unknown => "unknown",
        }
    }
}
