//! Character classification for the Star lexical grammar.
//!
//! Input is UTF-8 (`&str`); classification is per `char`. Identifiers are
//! ASCII-only: letters, digits, and `_`. Any character outside every class
//! here becomes an `InvalidToken` of length one, so the classes never need
//! to be exhaustive over Unicode.

/// Returns true for whitespace that stays within a line: space, tab,
/// vertical tab, form feed.
#[inline]
pub fn is_inline_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\u{000B}' | '\u{000C}')
}

/// Returns true for characters that break a line (`\n`, `\r`).
#[inline]
pub fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r')
}

/// Returns true if `c` can start an identifier.
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Returns true if `c` can continue an identifier.
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
