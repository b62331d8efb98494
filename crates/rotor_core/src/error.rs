//! Error types for the Rotor front-end.

use thiserror::Error;

/// All errors that can be produced by the Rotor front-end.
///
/// Lexer errors carry the zero-based code-point offset at which scanning
/// failed and, where meaningful, the offending code point itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RotorError {
    /// A `/* … */` comment ran past the end of the input.
    #[error("unterminated block comment starting at offset {0}")]
    UnterminatedComment(usize),

    /// A string literal was not closed before a line terminator or the end
    /// of the input.
    #[error("unterminated string literal starting at offset {0}")]
    UnterminatedString(usize),

    /// A string or template literal contained an escape form the lexical
    /// grammar does not admit (e.g. `\8`).
    #[error("invalid character {found:?} in string literal at offset {pos}")]
    InvalidStringCharacter {
        /// Offset of the offending code point.
        pos: usize,
        /// The offending code point.
        found: char,
    },

    /// A regular expression literal was not closed before a line terminator
    /// or the end of the input.
    #[error("unterminated regular expression literal starting at offset {0}")]
    UnterminatedRegExp(usize),

    /// A `\uXXXX` or `\u{…}` sequence inside an identifier did not decode
    /// to a code point that is valid at its position.
    #[error("invalid Unicode escape sequence in identifier at offset {0}")]
    InvalidIdentifierEscape(usize),

    /// No scanner matched at the current position.
    #[error("unexpected character {found:?} at offset {pos}")]
    UnexpectedCharacter {
        /// Offset of the offending code point.
        pos: usize,
        /// The offending code point.
        found: char,
    },

    /// A grammar production violated a structural invariant (should not
    /// occur on well-formed input).
    #[error("malformed production `{name}`: {reason}")]
    MalformedProduction {
        /// Name of the offending production.
        name: String,
        /// Human-readable description of the violation.
        reason: String,
    },
}

/// Convenient `Result` alias for fallible front-end operations.
pub type RotorResult<T> = Result<T, RotorError>;
