//! Identifier lexing.
//!
//! There is no reserved-word table at this layer. Names that mean
//! something special (resources, directive keywords) are reclassified
//! by [`Classifier`](crate::Classifier) after lexing.

use crate::chars;
use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a maximal identifier run.
    pub(crate) fn lex_identifier(&mut self) -> TokenKind {
        while chars::is_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }
        TokenKind::Identifier
    }
}
