//! Goal-directed ECMAScript 8 lexical analyzer.
//!
//! - [`token`] — token kinds and the token value model.
//! - [`tables`] — fixed character, keyword, and punctuator tables.
//! - [`unicode`] — identifier predicates and `\u` escape handling.
//! - [`scanner`] — per-token-kind scanners.
//! - [`driver`] — the [`Lexer`] driver and [`LexicalGoal`] dispatch.

/// The [`Lexer`] driver and lexical-goal dispatch.
pub mod driver;
/// Per-token-kind scanners.
pub mod scanner;
/// Fixed character, keyword, and punctuator tables.
pub mod tables;
/// Token kinds and the token value model.
pub mod token;
/// Unicode identifier predicates and escape handling.
pub mod unicode;

pub use driver::{Lexer, LexicalGoal};
pub use token::{Token, TokenKind};
