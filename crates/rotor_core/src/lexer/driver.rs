//! Goal-directed tokenisation driver.
//!
//! The ECMAScript lexical grammar is ambiguous in isolation: a `/` may be
//! a division operator or open a regular expression, and a `}` may be a
//! plain brace or resume a template literal.  The parser resolves the
//! ambiguity by handing the lexer a [`LexicalGoal`] for the current
//! position; the driver dispatches to the matching scanners.

use crate::error::{RotorError, RotorResult};
use crate::lexer::scanner::{
    comment_kind, scan_comment, scan_div_punctuator, scan_identifier, scan_line_terminator,
    scan_numeric_literal, scan_punctuator, scan_regexp_literal, scan_reserved_word,
    scan_right_brace_punctuator, scan_string_literal, scan_template_literal, skip_white_space,
};
use crate::lexer::token::{Token, TokenKind};

// ─────────────────────────────────────────────────────────────────────────────
// LexicalGoal
// ─────────────────────────────────────────────────────────────────────────────

/// The lexical goal symbol supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexicalGoal {
    /// `/` is a division operator; `}` is a plain brace.
    InputElementDiv,
    /// `/` opens a regular expression; `}` is a plain brace.
    InputElementRegExp,
    /// `/` opens a regular expression; `}` resumes a template.
    InputElementRegExpOrTemplateTail,
    /// `/` is a division operator; `}` resumes a template.
    InputElementTemplateTail,
}

impl LexicalGoal {
    /// Whether a `/` at the current position opens a regular expression
    /// literal rather than a division operator.
    pub fn slash_starts_regexp(self) -> bool {
        matches!(
            self,
            LexicalGoal::InputElementRegExp | LexicalGoal::InputElementRegExpOrTemplateTail
        )
    }

    /// Whether a `}` at the current position resumes a template literal
    /// rather than closing a block.
    pub fn brace_starts_template(self) -> bool {
        matches!(
            self,
            LexicalGoal::InputElementTemplateTail
                | LexicalGoal::InputElementRegExpOrTemplateTail
        )
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Lexer
// ─────────────────────────────────────────────────────────────────────────────

/// The tokenisation driver.
///
/// Tokens accumulate across [`Lexer::tokenise`] calls until [`Lexer::reset`]
/// is invoked; the `tokenise_up_to_*` entry points reset implicitly.  When
/// scanning fails, the tokens recognised before the failure remain available
/// through [`Lexer::tokens`].
///
/// # Example
///
/// ```
/// use rotor_core::lexer::{Lexer, LexicalGoal, TokenKind};
///
/// let mut lexer = Lexer::new();
/// let tokens = lexer
///     .tokenise("let x = 42;", LexicalGoal::InputElementDiv)
///     .unwrap();
/// assert_eq!(tokens.len(), 5);
/// assert_eq!(tokens[3].kind, TokenKind::DecimalLiteral);
/// ```
#[derive(Debug, Default)]
pub struct Lexer {
    tokens: Vec<Token>,
}

impl Lexer {
    /// Create a driver with an empty token buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard all accumulated tokens.
    pub fn reset(&mut self) {
        self.tokens.clear();
    }

    /// The tokens accumulated so far, including those recognised before a
    /// scanning failure.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Tokenise all of `input` under `goal`, appending to the accumulated
    /// token list, and return the full list.
    pub fn tokenise(&mut self, input: &str, goal: LexicalGoal) -> RotorResult<&[Token]> {
        let buf: Vec<char> = input.chars().collect();
        let mut pos = 0;
        while pos < buf.len() {
            pos = skip_white_space(pos, &buf);
            if pos >= buf.len() {
                break;
            }
            let (token, next) = next_token(pos, &buf, goal)?;
            if let Some(token) = token {
                self.tokens.push(token);
            }
            pos = next;
        }
        Ok(&self.tokens)
    }

    /// Tokenise through the first token of the given kind (inclusive) and
    /// return the code-point index just after it.  Resets the accumulated
    /// token list first.  Returns the input length if no such token occurs.
    pub fn tokenise_up_to_type(
        &mut self,
        input: &str,
        kind: TokenKind,
        goal: LexicalGoal,
    ) -> RotorResult<usize> {
        self.tokenise_up_to(input, goal, |t| t.kind == kind)
    }

    /// Like [`Lexer::tokenise_up_to_type`], but the token must match on
    /// both kind and value.
    pub fn tokenise_up_to_token(
        &mut self,
        input: &str,
        kind: TokenKind,
        value: &str,
        goal: LexicalGoal,
    ) -> RotorResult<usize> {
        self.tokenise_up_to(input, goal, |t| t.kind == kind && t.value == value)
    }

    fn tokenise_up_to(
        &mut self,
        input: &str,
        goal: LexicalGoal,
        wanted: impl Fn(&Token) -> bool,
    ) -> RotorResult<usize> {
        self.reset();
        let buf: Vec<char> = input.chars().collect();
        let mut pos = 0;
        while pos < buf.len() {
            pos = skip_white_space(pos, &buf);
            if pos >= buf.len() {
                break;
            }
            let (token, next) = next_token(pos, &buf, goal)?;
            pos = next;
            if let Some(token) = token {
                let found = wanted(&token);
                self.tokens.push(token);
                if found {
                    return Ok(pos);
                }
            }
        }
        Ok(pos)
    }
}

/// Scan one token at `pos` (which points at a non-whitespace code point).
///
/// Comment openers are checked before the goal-directed `/` dispatch so
/// that a goal of [`LexicalGoal::InputElementDiv`] cannot split `//` into
/// two operators.  After the goal-dependent forms the scanners run in a
/// fixed order; the first to match wins.
fn next_token(pos: usize, buf: &[char], goal: LexicalGoal) -> RotorResult<(Option<Token>, usize)> {
    let c = buf[pos];
    if let Some(kind) = comment_kind(pos, buf) {
        return scan_comment(pos, buf, kind);
    }
    if c == '/' {
        if goal.slash_starts_regexp() {
            if let Some((token, next)) = scan_regexp_literal(pos, buf)? {
                return Ok((Some(token), next));
            }
        } else if let Some((token, next)) = scan_div_punctuator(pos, buf) {
            return Ok((Some(token), next));
        }
    }
    if c == '}' {
        if goal.brace_starts_template() {
            if let Some((token, next)) = scan_template_literal(pos, buf) {
                return Ok((Some(token), next));
            }
        } else if let Some((token, next)) = scan_right_brace_punctuator(pos, buf) {
            return Ok((Some(token), next));
        }
    }
    if let Some((token, next)) = scan_line_terminator(pos, buf) {
        return Ok((Some(token), next));
    }
    if let Some((token, next)) = scan_punctuator(pos, buf) {
        return Ok((Some(token), next));
    }
    if let Some((token, next)) = scan_reserved_word(pos, buf) {
        return Ok((Some(token), next));
    }
    if let Some((token, next)) = scan_identifier(pos, buf)? {
        return Ok((Some(token), next));
    }
    if let Some((token, next)) = scan_numeric_literal(pos, buf) {
        return Ok((Some(token), next));
    }
    if let Some((token, next)) = scan_string_literal(pos, buf)? {
        return Ok((Some(token), next));
    }
    if let Some((token, next)) = scan_template_literal(pos, buf) {
        return Ok((Some(token), next));
    }
    Err(RotorError::UnexpectedCharacter { pos, found: c })
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
