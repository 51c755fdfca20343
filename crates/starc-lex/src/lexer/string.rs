//! String literal lexing.
//!
//! Lexemes are raw source text: the delimiting quotes and any escape
//! sequences stay in the lexeme unprocessed. Unescaping is a consumer
//! concern; rewriting lexemes here would break input reconstruction.

use starc_util::DiagnosticCode;

use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a double-quoted string literal.
    ///
    /// A backslash consumes the following character without
    /// interpretation, so `\"` and `\\` never terminate the string.
    /// Strings may span lines; only the end of input unterminates one,
    /// in which case the partial span becomes an `InvalidToken`.
    pub(crate) fn lex_string(&mut self) -> TokenKind {
        self.cursor.advance();

        loop {
            if self.cursor.is_at_end() {
                self.report_error(
                    DiagnosticCode::E0002,
                    "unterminated string literal".to_string(),
                );
                return TokenKind::InvalidToken;
            }

            let c = self.cursor.current_char();
            if c == '\\' {
                self.cursor.advance();
                if !self.cursor.is_at_end() {
                    self.cursor.advance();
                }
            } else {
                self.cursor.advance();
                if c == '"' {
                    return TokenKind::String;
                }
            }
        }
    }
}
