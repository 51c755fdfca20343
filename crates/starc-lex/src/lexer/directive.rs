//! Directive lexing.
//!
//! A `#` that begins an identifier run lexes as one `Directive` token,
//! `#` included in the lexeme. Whether a directive is a meta directive
//! is not a lexical property; see [`Classifier`](crate::Classifier).
//! Directive expansion happens in later phases, never here.

use crate::chars;
use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a `#name` directive.
    ///
    /// Only called when the character after `#` can start an identifier;
    /// a bare `#` falls through to the invalid-character rule.
    pub(crate) fn lex_directive(&mut self) -> TokenKind {
        self.cursor.advance();
        while chars::is_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }
        TokenKind::Directive
    }
}
