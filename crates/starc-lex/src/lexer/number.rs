//! Number literal lexing.

use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a number literal: a maximal digit run with at most one
    /// decimal point that must be followed by a digit.
    ///
    /// No exponent, sign, or radix prefixes; `1e9` lexes as a number and
    /// an identifier. Extending the grammar means extending this method
    /// only.
    pub(crate) fn lex_number(&mut self) -> TokenKind {
        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }

        if self.cursor.current_char() == '.' && self.cursor.peek_char(1).is_ascii_digit() {
            self.cursor.advance();
            while self.cursor.current_char().is_ascii_digit() {
                self.cursor.advance();
            }
        }

        TokenKind::Number
    }
}
