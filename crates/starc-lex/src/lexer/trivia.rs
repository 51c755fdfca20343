//! Whitespace and line separator lexing.
//!
//! Whitespace is not skipped: it is emitted as `Space` and
//! `LineSeparator` tokens so the token stream covers the whole input.

use crate::chars;
use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a maximal run of inline whitespace.
    pub(crate) fn lex_space(&mut self) -> TokenKind {
        while chars::is_inline_space(self.cursor.current_char()) {
            self.cursor.advance();
        }
        TokenKind::Space
    }

    /// Lexes one line separator.
    ///
    /// `\r\n` is normalized to a single token; a lone `\r` or `\n` is a
    /// separator on its own.
    pub(crate) fn lex_line_separator(&mut self) -> TokenKind {
        if self.cursor.current_char() == '\r' {
            self.cursor.advance();
            self.cursor.match_char('\n');
        } else {
            self.cursor.advance();
        }
        TokenKind::LineSeparator
    }
}
