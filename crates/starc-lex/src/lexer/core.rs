//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its dispatch loop.

use starc_util::{DiagnosticBuilder, DiagnosticCode, FileId, Handler, Span};

use crate::chars;
use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// Lexer for the Star language.
///
/// The lexer transforms source text into a stream of [`Token`]s covering
/// every byte of the input: whitespace, line separators, and comments are
/// emitted as tokens of their own kinds rather than skipped, and bytes
/// that match no rule become [`TokenKind::InvalidToken`]. The lexer never
/// fails; anything it wants to report goes to the shared [`Handler`] as a
/// diagnostic value.
///
/// Tokens are produced lazily, one per [`Lexer::next_token`] call, and
/// the lexer implements [`Iterator`]. There is no end-of-file token; the
/// stream ends when `next_token` returns `None`.
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Collector for lexical diagnostics.
    handler: &'a Handler,

    /// File the source came from, recorded on every span.
    file_id: FileId,

    /// Starting byte offset of the current token.
    token_start: usize,

    /// Line where the current token starts (1-based).
    token_start_line: u32,

    /// Column where the current token starts (0-based).
    token_start_column: u32,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code.
    pub fn new(source: &'a str, handler: &'a Handler) -> Self {
        Self::with_file_id(source, handler, FileId::DUMMY)
    }

    /// Creates a new lexer whose spans carry the given file id.
    pub fn with_file_id(source: &'a str, handler: &'a Handler, file_id: FileId) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            file_id,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 0,
        }
    }

    /// Returns the next token, or `None` at the end of the input.
    ///
    /// Rules are tried in a fixed precedence order; each consumes the
    /// maximal span it can (maximal munch) before the token is emitted.
    pub fn next_token(&mut self) -> Option<Token<'a>> {
        if self.cursor.is_at_end() {
            return None;
        }

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        let kind = match self.cursor.current_char() {
            c if chars::is_inline_space(c) => self.lex_space(),
            c if chars::is_line_break(c) => self.lex_line_separator(),
            '/' if self.cursor.peek_char(1) == '/' => self.lex_line_comment(),
            '"' => self.lex_string(),
            c if c.is_ascii_digit() => self.lex_number(),
            c if chars::is_ident_start(c) => self.lex_identifier(),
            '#' if chars::is_ident_start(self.cursor.peek_char(1)) => self.lex_directive(),
            '(' => self.lex_single(TokenKind::LeftParenthesis),
            ')' => self.lex_single(TokenKind::RightParenthesis),
            '[' => self.lex_single(TokenKind::LeftBracket),
            ']' => self.lex_single(TokenKind::RightBracket),
            '{' => self.lex_single(TokenKind::LeftBrace),
            '}' => self.lex_single(TokenKind::RightBrace),
            ',' => self.lex_single(TokenKind::Comma),
            ';' => self.lex_single(TokenKind::Semicolon),
            c => {
                self.cursor.advance();
                self.report_error(
                    DiagnosticCode::E0001,
                    format!("unexpected character '{}'", c),
                );
                TokenKind::InvalidToken
            },
        };

        Some(self.finish_token(kind))
    }

    /// Consumes one character and returns the given kind.
    fn lex_single(&mut self, kind: TokenKind) -> TokenKind {
        self.cursor.advance();
        kind
    }

    /// Builds the token for the span consumed since `token_start`.
    fn finish_token(&self, kind: TokenKind) -> Token<'a> {
        let span = Span::with_file(
            self.token_start,
            self.cursor.position(),
            self.file_id,
            self.token_start_line,
            self.token_start_column,
        );
        Token::new(kind, self.cursor.slice_from(self.token_start), span)
    }

    /// Records a lexical error covering the current token span.
    pub(crate) fn report_error(&self, code: DiagnosticCode, message: String) {
        let span = Span::with_file(
            self.token_start,
            self.cursor.position(),
            self.file_id,
            self.token_start_line,
            self.token_start_column,
        );
        DiagnosticBuilder::error(message)
            .code(code)
            .span(span)
            .emit(self.handler);
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (0-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}
