//! Comment lexing.
//!
//! Star has only single-line comments. The comment token stops before
//! the line break, which is emitted as its own `LineSeparator`.

use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a `//` comment to the end of the line.
    pub(crate) fn lex_line_comment(&mut self) -> TokenKind {
        self.cursor.advance();
        self.cursor.advance();

        while !self.cursor.is_at_end() && !self.cursor.at_line_break() {
            self.cursor.advance();
        }
        TokenKind::SingleLineComment
    }
}
