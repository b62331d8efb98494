//! Per-token-kind scanners over a code-point buffer.
//!
//! Every scanner takes the zero-based code-point index to start at plus the
//! full input, and returns the recognised token together with the index of
//! the first code point after it.  A scanner that does not match returns
//! `None` without consuming anything; comments are the exception, they can
//! consume input while producing no token.  Scanners that can detect a
//! malformed construct return a `RotorResult` instead.

use crate::error::{RotorError, RotorResult};
use crate::lexer::tables::{
    MAX_PUNCTUATOR_LENGTH, MAX_RESERVED_WORD_LENGTH, is_line_terminator, is_punctuator,
    is_white_space, reserved_word_kind,
};
use crate::lexer::token::{Token, TokenKind};
use crate::lexer::unicode::{
    decode_unicode_escape, is_identifier_part_char, is_identifier_start_char, unicode_escape_end,
};

// ─────────────────────────────────────────────────────────────────────────────
// Whitespace and line terminators
// ─────────────────────────────────────────────────────────────────────────────

/// Index of the first non-whitespace code point at or after `pos`.
pub fn skip_white_space(pos: usize, buf: &[char]) -> usize {
    let mut i = pos;
    while i < buf.len() && is_white_space(buf[i]) {
        i += 1;
    }
    i
}

/// Scan a single line terminator.  `<CR><LF>` is one token.
pub fn scan_line_terminator(pos: usize, buf: &[char]) -> Option<(Token, usize)> {
    let c = buf[pos];
    if !is_line_terminator(c) {
        return None;
    }
    if c == '\r' && buf.get(pos + 1).copied() == Some('\n') {
        return Some((Token::new(TokenKind::LineTerminator, "\r\n", pos), pos + 2));
    }
    Some((Token::new(TokenKind::LineTerminator, c, pos), pos + 1))
}

// ─────────────────────────────────────────────────────────────────────────────
// Comments
// ─────────────────────────────────────────────────────────────────────────────

/// The two comment shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentKind {
    /// `// …` up to the next line terminator.
    SingleLine,
    /// `/* … */`.
    MultiLine,
}

/// Classify the comment opening at `pos`, if any.
pub fn comment_kind(pos: usize, buf: &[char]) -> Option<CommentKind> {
    if buf[pos] != '/' {
        return None;
    }
    match buf.get(pos + 1).copied() {
        Some('/') => Some(CommentKind::SingleLine),
        Some('*') => Some(CommentKind::MultiLine),
        _ => None,
    }
}

/// Consume a comment starting at `pos` (including its opening delimiter).
///
/// Single-line comments and block comments without a line terminator yield
/// no token.  A block comment that spans a line terminator is materialized
/// as a [`TokenKind::LineTerminator`] token carrying the entire comment
/// text, which downstream semicolon handling relies on.
pub fn scan_comment(
    pos: usize,
    buf: &[char],
    kind: CommentKind,
) -> RotorResult<(Option<Token>, usize)> {
    let mut i = pos + 2;
    match kind {
        CommentKind::SingleLine => {
            while i < buf.len() && !is_line_terminator(buf[i]) {
                i += 1;
            }
            Ok((None, i))
        }
        CommentKind::MultiLine => {
            let mut contains_terminator = false;
            while i + 1 < buf.len() {
                if buf[i] == '*' && buf[i + 1] == '/' {
                    let end = i + 2;
                    if contains_terminator {
                        let value: String = buf[pos..end].iter().collect();
                        return Ok((Some(Token::new(TokenKind::LineTerminator, value, pos)), end));
                    }
                    return Ok((None, end));
                }
                if is_line_terminator(buf[i]) {
                    contains_terminator = true;
                }
                i += 1;
            }
            Err(RotorError::UnterminatedComment(pos))
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Punctuators
// ─────────────────────────────────────────────────────────────────────────────

/// Longest-match scan against the punctuator table.
pub fn scan_punctuator(pos: usize, buf: &[char]) -> Option<(Token, usize)> {
    let max = MAX_PUNCTUATOR_LENGTH.min(buf.len() - pos);
    for len in (1..=max).rev() {
        let candidate: String = buf[pos..pos + len].iter().collect();
        if is_punctuator(&candidate) {
            return Some((Token::new(TokenKind::Punctuator, candidate, pos), pos + len));
        }
    }
    None
}

/// Scan `/` or `/=`.  Only called when the lexical goal reads a slash as
/// an operator.
pub fn scan_div_punctuator(pos: usize, buf: &[char]) -> Option<(Token, usize)> {
    if buf[pos] != '/' {
        return None;
    }
    if buf.get(pos + 1).copied() == Some('=') {
        return Some((Token::new(TokenKind::DivPunctuator, "/=", pos), pos + 2));
    }
    Some((Token::new(TokenKind::DivPunctuator, "/", pos), pos + 1))
}

/// Scan `}`.  Only called when the lexical goal reads a right brace as a
/// plain punctuator.
pub fn scan_right_brace_punctuator(pos: usize, buf: &[char]) -> Option<(Token, usize)> {
    if buf[pos] != '}' {
        return None;
    }
    Some((
        Token::new(TokenKind::RightBracePunctuator, "}", pos),
        pos + 1,
    ))
}

// ─────────────────────────────────────────────────────────────────────────────
// Reserved words and identifiers
// ─────────────────────────────────────────────────────────────────────────────

/// Scan a reserved word, a future reserved word, a boolean literal, or the
/// null literal.
///
/// The whole lower-case run must equal a table entry and must not continue
/// as identifier text: `constructor` and `classes` are identifiers even
/// though they begin with keywords.
pub fn scan_reserved_word(pos: usize, buf: &[char]) -> Option<(Token, usize)> {
    let mut end = pos;
    while end < buf.len() && buf[end].is_ascii_lowercase() {
        end += 1;
        if end - pos > MAX_RESERVED_WORD_LENGTH {
            return None;
        }
    }
    if end == pos {
        return None;
    }
    if let Some(c) = buf.get(end).copied()
        && (is_identifier_part_char(c) || c == '\\')
    {
        return None;
    }
    let word: String = buf[pos..end].iter().collect();
    let kind = reserved_word_kind(&word)?;
    Some((Token::new(kind, word, pos), end))
}

/// Scan an *IdentifierName*.
///
/// The emitted value carries Unicode escapes in decoded form.  An escape
/// that decodes to a code point invalid at its position is an error; a
/// backslash that does not open a well-formed escape simply ends the
/// identifier.
pub fn scan_identifier(pos: usize, buf: &[char]) -> RotorResult<Option<(Token, usize)>> {
    let mut value = String::new();
    let mut i;
    let c = buf[pos];
    if is_identifier_start_char(c) {
        value.push(c);
        i = pos + 1;
    } else if c == '\\' && unicode_escape_end(pos + 1, buf).is_some() {
        match decode_unicode_escape(pos + 1, buf) {
            Some((decoded, next)) if is_identifier_start_char(decoded) => {
                value.push(decoded);
                i = next;
            }
            _ => return Err(RotorError::InvalidIdentifierEscape(pos)),
        }
    } else {
        return Ok(None);
    }

    while i < buf.len() {
        let c = buf[i];
        if is_identifier_part_char(c) {
            value.push(c);
            i += 1;
        } else if c == '\\' && unicode_escape_end(i + 1, buf).is_some() {
            match decode_unicode_escape(i + 1, buf) {
                Some((decoded, next)) if is_identifier_part_char(decoded) => {
                    value.push(decoded);
                    i = next;
                }
                _ => return Err(RotorError::InvalidIdentifierEscape(i)),
            }
        } else {
            break;
        }
    }
    Ok(Some((Token::new(TokenKind::IdentifierName, value, pos), i)))
}

// ─────────────────────────────────────────────────────────────────────────────
// Numeric literals
// ─────────────────────────────────────────────────────────────────────────────

/// Scan a numeric literal: decimal first, then the three prefixed radices.
pub fn scan_numeric_literal(pos: usize, buf: &[char]) -> Option<(Token, usize)> {
    scan_decimal_literal(pos, buf)
        .or_else(|| scan_binary_integer_literal(pos, buf))
        .or_else(|| scan_octal_integer_literal(pos, buf))
        .or_else(|| scan_hex_integer_literal(pos, buf))
}

#[derive(PartialEq, Clone, Copy)]
enum DecimalPart {
    Integer,
    Fraction,
    Exponent,
}

/// Scan a decimal literal: optional integer part, optional fraction,
/// optional signed exponent.
///
/// A leading `0` is accepted only directly before `.`, `e`, or `E`, which
/// keeps the scanner away from `0b` / `0o` / `0x` prefixes.  The value is
/// reconstructed from the recognised parts, so `E` is normalised to `e`.
pub fn scan_decimal_literal(pos: usize, buf: &[char]) -> Option<(Token, usize)> {
    let mut part = DecimalPart::Integer;
    let mut int_literal = String::new();
    let mut fraction = String::new();
    let mut exponent = String::new();
    let mut i = pos;
    let mut reached_end = false;
    while !reached_end && i < buf.len() {
        let c = buf[i];
        if i == pos {
            let next = buf.get(i + 1).copied().unwrap_or('0');
            if ('1'..='9').contains(&c) || (c == '0' && matches!(next, '.' | 'e' | 'E')) {
                int_literal.push(c);
            } else if c == '.' {
                part = DecimalPart::Fraction;
            } else {
                reached_end = true;
            }
        } else if c.is_ascii_digit() {
            match part {
                DecimalPart::Integer => int_literal.push(c),
                DecimalPart::Fraction => fraction.push(c),
                DecimalPart::Exponent => exponent.push(c),
            }
        } else if c == '.' && part == DecimalPart::Integer {
            part = DecimalPart::Fraction;
        } else if (c == 'e' || c == 'E')
            && ((part == DecimalPart::Integer && !int_literal.is_empty())
                || (part == DecimalPart::Fraction && !fraction.is_empty()))
        {
            part = DecimalPart::Exponent;
        } else if (c == '-' || c == '+') && part == DecimalPart::Exponent && exponent.is_empty() {
            exponent.push(c);
        } else {
            reached_end = true;
        }
        i += 1;
    }
    if int_literal.is_empty() && fraction.is_empty() && exponent.is_empty() {
        return None;
    }
    if reached_end {
        // The loop overshot onto the code point that ended the literal.
        i -= 1;
    }
    let mut value = int_literal;
    if !fraction.is_empty() {
        value.push('.');
        value.push_str(&fraction);
    }
    if !exponent.is_empty() {
        value.push('e');
        value.push_str(&exponent);
    }
    Some((Token::new(TokenKind::DecimalLiteral, value, pos), i))
}

fn scan_radix_integer(
    pos: usize,
    buf: &[char],
    markers: [char; 2],
    kind: TokenKind,
    is_digit: fn(char) -> bool,
) -> Option<(Token, usize)> {
    if buf[pos] != '0' {
        return None;
    }
    let marker = buf.get(pos + 1).copied()?;
    if marker != markers[0] && marker != markers[1] {
        return None;
    }
    let digits_start = pos + 2;
    let mut i = digits_start;
    while i < buf.len() && is_digit(buf[i]) {
        i += 1;
    }
    if i == digits_start {
        return None;
    }
    let value: String = buf[digits_start..i].iter().collect();
    Some((Token::new(kind, value, pos), i))
}

/// Scan `0b…` / `0B…`.  The value excludes the prefix.
pub fn scan_binary_integer_literal(pos: usize, buf: &[char]) -> Option<(Token, usize)> {
    scan_radix_integer(pos, buf, ['b', 'B'], TokenKind::BinaryIntegerLiteral, |c| {
        c == '0' || c == '1'
    })
}

/// Scan `0o…` / `0O…`.  The value excludes the prefix.
pub fn scan_octal_integer_literal(pos: usize, buf: &[char]) -> Option<(Token, usize)> {
    scan_radix_integer(pos, buf, ['o', 'O'], TokenKind::OctalIntegerLiteral, |c| {
        ('0'..='7').contains(&c)
    })
}

/// Scan `0x…` / `0X…`.  The value excludes the prefix.
pub fn scan_hex_integer_literal(pos: usize, buf: &[char]) -> Option<(Token, usize)> {
    scan_radix_integer(pos, buf, ['x', 'X'], TokenKind::HexIntegerLiteral, |c| {
        c.is_ascii_hexdigit()
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Escape-sequence helpers shared by strings and templates
// ─────────────────────────────────────────────────────────────────────────────

/// `' " \ b f n r t v`.
fn is_single_escape_character(c: char) -> bool {
    matches!(c, '\'' | '"' | '\\' | 'b' | 'f' | 'n' | 'r' | 't' | 'v')
}

/// An *EscapeCharacter* introduces one of the structured escape forms and
/// therefore cannot stand as a *NonEscapeCharacter*.
fn is_escape_character(c: char) -> bool {
    is_single_escape_character(c) || c.is_ascii_digit() || c == 'x' || c == 'u'
}

fn is_non_escape_character(c: char) -> bool {
    !is_escape_character(c) && !is_line_terminator(c)
}

/// End index of the escape sequence whose backslash sits at `pos`, if it
/// is one the string grammar admits: `\0`, a Unicode escape, a hex escape,
/// a single-escape character, or a non-escape character.
fn string_escape_end(pos: usize, buf: &[char]) -> Option<usize> {
    if buf[pos] != '\\' {
        return None;
    }
    let c = buf.get(pos + 1).copied()?;
    if c == '0' {
        return Some(pos + 2);
    }
    if c == 'u' {
        return unicode_escape_end(pos + 1, buf);
    }
    if c == 'x' {
        let both_hex = buf.get(pos + 2).copied().is_some_and(|d| d.is_ascii_hexdigit())
            && buf.get(pos + 3).copied().is_some_and(|d| d.is_ascii_hexdigit());
        return both_hex.then_some(pos + 4);
    }
    (is_single_escape_character(c) || is_non_escape_character(c)).then_some(pos + 2)
}

/// End index of the line-terminator sequence at `pos` (`<CR><LF>` is one
/// sequence).
fn line_terminator_sequence_end(pos: usize, buf: &[char]) -> usize {
    if buf[pos] == '\r' && buf.get(pos + 1).copied() == Some('\n') {
        pos + 2
    } else {
        pos + 1
    }
}

/// End index of a line continuation (`\` followed by a line-terminator
/// sequence) whose backslash sits at `pos`.
fn line_continuation_end(pos: usize, buf: &[char]) -> Option<usize> {
    if buf[pos] != '\\' {
        return None;
    }
    let c = buf.get(pos + 1).copied()?;
    if !is_line_terminator(c) {
        return None;
    }
    Some(line_terminator_sequence_end(pos + 1, buf))
}

// ─────────────────────────────────────────────────────────────────────────────
// String literals
// ─────────────────────────────────────────────────────────────────────────────

/// Scan a string literal opened by `"` or `'`.
///
/// The value excludes the delimiting quotes and keeps escape sequences
/// verbatim.  A bare line terminator or the end of input before the
/// closing quote is an error.
pub fn scan_string_literal(pos: usize, buf: &[char]) -> RotorResult<Option<(Token, usize)>> {
    let quote = buf[pos];
    if quote != '"' && quote != '\'' {
        return Ok(None);
    }
    let mut value = String::new();
    let mut i = pos + 1;
    loop {
        if i >= buf.len() {
            return Err(RotorError::UnterminatedString(pos));
        }
        let c = buf[i];
        if c == quote {
            i += 1;
            break;
        }
        if let Some(next) = string_escape_end(i, buf) {
            value.extend(buf[i..next].iter());
            i = next;
        } else if let Some(next) = line_continuation_end(i, buf) {
            value.extend(buf[i..next].iter());
            i = next;
        } else if c == '\\' {
            match buf.get(i + 1).copied() {
                None => return Err(RotorError::UnterminatedString(pos)),
                Some(found) => {
                    return Err(RotorError::InvalidStringCharacter { pos: i + 1, found });
                }
            }
        } else if is_line_terminator(c) {
            return Err(RotorError::UnterminatedString(pos));
        } else {
            value.push(c);
            i += 1;
        }
    }
    Ok(Some((Token::new(TokenKind::StringLiteral, value, pos), i)))
}

// ─────────────────────────────────────────────────────────────────────────────
// Regular expression literals
// ─────────────────────────────────────────────────────────────────────────────

/// Scan a regular expression literal `/body/flags`.
///
/// The body is non-empty, its first code point may not be `*` (that would
/// be a comment), and `[…]` classes protect any `/` inside them.  Flags
/// are identifier-part code points.  The value is the whole literal,
/// verbatim.
pub fn scan_regexp_literal(pos: usize, buf: &[char]) -> RotorResult<Option<(Token, usize)>> {
    if buf[pos] != '/' {
        return Ok(None);
    }
    let Some(mut i) = regexp_char_end(pos + 1, buf, true) else {
        return Ok(None);
    };
    loop {
        if i >= buf.len() {
            return Err(RotorError::UnterminatedRegExp(pos));
        }
        if buf[i] == '/' {
            break;
        }
        let Some(next) = regexp_char_end(i, buf, false) else {
            return Err(RotorError::UnterminatedRegExp(pos));
        };
        i = next;
    }
    // Flags: identifier-part code points, Unicode escapes included.
    let mut j = i + 1;
    loop {
        match buf.get(j).copied() {
            Some(c) if is_identifier_part_char(c) => j += 1,
            Some('\\') => match unicode_escape_end(j + 1, buf) {
                Some(end) => j = end,
                None => break,
            },
            _ => break,
        }
    }
    let value: String = buf[pos..j].iter().collect();
    Ok(Some((
        Token::new(TokenKind::RegularExpressionLiteral, value, pos),
        j,
    )))
}

/// End index of one regular-expression body element at `pos`: a `\`
/// sequence, a `[…]` class, or a bare non-terminator.
fn regexp_char_end(pos: usize, buf: &[char], first: bool) -> Option<usize> {
    let c = buf.get(pos).copied()?;
    if c == '\\' {
        return regexp_backslash_end(pos, buf);
    }
    if c == '[' {
        return regexp_class_end(pos, buf);
    }
    if is_line_terminator(c) || c == '/' {
        return None;
    }
    if first && c == '*' {
        return None;
    }
    Some(pos + 1)
}

fn regexp_backslash_end(pos: usize, buf: &[char]) -> Option<usize> {
    let c = buf.get(pos + 1).copied()?;
    (!is_line_terminator(c)).then_some(pos + 2)
}

fn regexp_class_end(pos: usize, buf: &[char]) -> Option<usize> {
    let mut i = pos + 1;
    loop {
        let c = buf.get(i).copied()?;
        if c == ']' {
            return Some(i + 1);
        }
        if c == '\\' {
            i = regexp_backslash_end(i, buf)?;
        } else if is_line_terminator(c) {
            return None;
        } else {
            i += 1;
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Template literals
// ─────────────────────────────────────────────────────────────────────────────

/// Scan a template-literal fragment opened by a backtick, or by the `}`
/// that closes a substitution.
///
/// The token kind follows from the opener and whether the fragment ends in
/// `` ` `` or `${`; the value excludes both delimiters.
pub fn scan_template_literal(pos: usize, buf: &[char]) -> Option<(Token, usize)> {
    let opener = buf[pos];
    if opener != '`' && opener != '}' {
        return None;
    }
    let mut i = pos + 1;
    loop {
        match buf.get(i).copied() {
            None => return None,
            Some('`') => {
                let kind = if opener == '`' {
                    TokenKind::NoSubstitionTemplate
                } else {
                    TokenKind::TemplateTail
                };
                let value: String = buf[pos + 1..i].iter().collect();
                return Some((Token::new(kind, value, pos), i + 1));
            }
            Some('$') if buf.get(i + 1).copied() == Some('{') => {
                let kind = if opener == '`' {
                    TokenKind::TemplateHead
                } else {
                    TokenKind::TemplateMiddle
                };
                let value: String = buf[pos + 1..i].iter().collect();
                return Some((Token::new(kind, value, pos), i + 2));
            }
            Some('$') => i += 1,
            Some(c) => {
                if let Some(next) = string_escape_end(i, buf) {
                    i = next;
                } else if let Some(next) = line_continuation_end(i, buf) {
                    i = next;
                } else if is_line_terminator(c) {
                    i = line_terminator_sequence_end(i, buf);
                } else if c != '\\' {
                    i += 1;
                } else {
                    return None;
                }
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
