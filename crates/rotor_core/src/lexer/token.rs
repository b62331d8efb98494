//! Lexical tokens.

use std::fmt;

/// The syntactic category of a lexical token.
///
/// The [`TokenKind::as_str`] names are a stable public tag set; downstream
/// parse-table construction keys on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A line terminator, or a block comment spanning one.
    LineTerminator,
    /// Any punctuator except `/`, `/=`, and `}`.
    Punctuator,
    /// `/` or `/=` when the lexical goal reads them as operators.
    DivPunctuator,
    /// `}` when the lexical goal reads it as a plain brace.
    RightBracePunctuator,
    /// One of the reserved keywords.
    Keyword,
    /// A word reserved for future use (`enum`).
    FutureReservedWord,
    /// `true` or `false`.
    BooleanLiteral,
    /// `null`.
    NullLiteral,
    /// An identifier; the value carries decoded Unicode escapes.
    IdentifierName,
    /// Decimal numeric literal, with optional fraction and exponent.
    DecimalLiteral,
    /// `0b…` / `0B…` literal; the value excludes the prefix.
    BinaryIntegerLiteral,
    /// `0o…` / `0O…` literal; the value excludes the prefix.
    OctalIntegerLiteral,
    /// `0x…` / `0X…` literal; the value excludes the prefix.
    HexIntegerLiteral,
    /// String literal; the value excludes the quotes and keeps escape
    /// sequences verbatim.
    StringLiteral,
    /// `/pattern/flags`, kept verbatim including the delimiters.
    RegularExpressionLiteral,
    /// A complete template literal with no substitutions: `` `…` ``.
    NoSubstitionTemplate,
    /// Opening span of a substituted template: `` `…${ ``.
    TemplateHead,
    /// Middle span between two substitutions: `}…${`.
    TemplateMiddle,
    /// Closing span of a substituted template: ``}…` ``.
    TemplateTail,
}

impl TokenKind {
    /// The stable name of this token kind.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::LineTerminator => "LineTerminator",
            TokenKind::Punctuator => "Punctuator",
            TokenKind::DivPunctuator => "DivPunctuator",
            TokenKind::RightBracePunctuator => "RightBracePunctuator",
            TokenKind::Keyword => "Keyword",
            TokenKind::FutureReservedWord => "FutureReservedWord",
            TokenKind::BooleanLiteral => "BooleanLiteral",
            TokenKind::NullLiteral => "NullLiteral",
            TokenKind::IdentifierName => "IdentifierName",
            TokenKind::DecimalLiteral => "DecimalLiteral",
            TokenKind::BinaryIntegerLiteral => "BinaryIntegerLiteral",
            TokenKind::OctalIntegerLiteral => "OctalIntegerLiteral",
            TokenKind::HexIntegerLiteral => "HexIntegerLiteral",
            TokenKind::StringLiteral => "StringLiteral",
            TokenKind::RegularExpressionLiteral => "RegularExpressionLiteral",
            TokenKind::NoSubstitionTemplate => "NoSubstitionTemplate",
            TokenKind::TemplateHead => "TemplateHead",
            TokenKind::TemplateMiddle => "TemplateMiddle",
            TokenKind::TemplateTail => "TemplateTail",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single lexical token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The syntactic category.
    pub kind: TokenKind,
    /// The materialized lexeme.  Escape sequences are kept verbatim except
    /// in identifiers, where they are decoded.
    pub value: String,
    /// Zero-based code-point offset at which the token starts.
    pub pos: usize,
}

impl Token {
    /// Construct a token.
    pub fn new(kind: TokenKind, value: impl Into<String>, pos: usize) -> Self {
        Self {
            kind,
            value: value.into(),
            pos,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?}, {})", self.kind, self.value, self.pos)
    }
}
