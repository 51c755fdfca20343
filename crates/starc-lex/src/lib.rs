//! starc-lex - Lexical Analyzer for the Star Language
//!
//! This crate provides a complete lexer (tokenizer) for Star source
//! text. It transforms source code into a stream of tokens that can be
//! consumed by a parser, a syntax highlighter, or a test harness.
//!
//! # Overview
//!
//! The lexer is total over its input: every byte belongs to exactly one
//! token. Whitespace, line separators, and comments come out as tokens
//! of their own kinds, and bytes that match no rule come out as
//! `InvalidToken` rather than an error, so tooling can always make
//! progress on malformed input. Concatenating the lexemes of the
//! produced stream reconstructs the input exactly.
//!
//! Tokens are produced lazily: each call to [`Lexer::next_token`] scans
//! one token, and the lexer implements [`Iterator`], so a consumer can
//! stop early at no cost. Lexing never fails and never panics; anything
//! worth reporting is recorded on the shared
//! [`Handler`](starc_util::Handler) as a diagnostic value.
//!
//! # Example Usage
//!
//! ```
//! use starc_lex::{Lexer, TokenKind};
//! use starc_util::Handler;
//!
//! let source = "say(\"hi\", 2);";
//! let handler = Handler::new();
//!
//! for token in Lexer::new(source, &handler) {
//!     println!("{token}");
//! }
//!
//! let handler = Handler::new();
//! let mut lexer = Lexer::new(source, &handler);
//! let first = lexer.next_token().unwrap();
//! assert_eq!(first.kind, TokenKind::Identifier);
//! assert_eq!(first.lexeme, "say");
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for source traversal
//! - [`chars`] - Character classification for the lexical grammar
//! - [`classify`] - Post-lex keyword classification
//!
//! # Token Categories
//!
//! - **Trivia**: `Space`, `LineSeparator`, `SingleLineComment` - emitted,
//!   never skipped
//! - **Names**: `Identifier`, and `Directive` for `#name`
//! - **Literals**: `String` (quotes kept in the lexeme), `Number`
//! - **Delimiters**: `()`, `[]`, `{}`, `,`, `;`
//! - **Recovery**: `InvalidToken` for anything else
//! - **Classified**: `MetaDirective`, `Resource` - produced only by the
//!   [`Classifier`] pass, never by the lexer core

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod classify;
pub mod cursor;
pub mod lexer;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use classify::Classifier;
pub use cursor::Cursor;
pub use lexer::Lexer;
pub use token::{Token, TokenKind};

#[cfg(test)]
mod tests {
    use super::*;
    use starc_util::Handler;

    /// Helper to collect (kind, lexeme) pairs from source.
    fn lex_all(source: &str) -> Vec<(TokenKind, String)> {
        let handler = Handler::new();
        Lexer::new(source, &handler)
            .map(|t| (t.kind, t.lexeme.to_string()))
            .collect()
    }

    #[test]
    fn test_call_statement() {
        assert_eq!(
            lex_all("foo(1, 2);"),
            vec![
                (TokenKind::Identifier, "foo".to_string()),
                (TokenKind::LeftParenthesis, "(".to_string()),
                (TokenKind::Number, "1".to_string()),
                (TokenKind::Comma, ",".to_string()),
                (TokenKind::Space, " ".to_string()),
                (TokenKind::Number, "2".to_string()),
                (TokenKind::RightParenthesis, ")".to_string()),
                (TokenKind::Semicolon, ";".to_string()),
            ]
        );
    }

    #[test]
    fn test_comment_line() {
        assert_eq!(
            lex_all("// comment\n"),
            vec![
                (TokenKind::SingleLineComment, "// comment".to_string()),
                (TokenKind::LineSeparator, "\n".to_string()),
            ]
        );
    }

    #[test]
    fn test_string_literal() {
        assert_eq!(
            lex_all("\"abc\""),
            vec![(TokenKind::String, "\"abc\"".to_string())]
        );
    }

    #[test]
    fn test_unterminated_string_spans_rest_of_input() {
        assert_eq!(
            lex_all("\"unterminated"),
            vec![(TokenKind::InvalidToken, "\"unterminated".to_string())]
        );
    }

    #[test]
    fn test_unmatched_symbol_then_recovery() {
        assert_eq!(
            lex_all("@ab"),
            vec![
                (TokenKind::InvalidToken, "@".to_string()),
                (TokenKind::Identifier, "ab".to_string()),
            ]
        );
    }

    #[test]
    fn test_line_and_column_positions() {
        let handler = Handler::new();
        let tokens: Vec<_> = Lexer::new("a\nb", &handler).collect();

        assert_eq!(tokens[0].lexeme, "a");
        assert_eq!(tokens[0].line(), 1);
        assert_eq!(tokens[0].column(), 0);

        assert_eq!(tokens[1].kind, TokenKind::LineSeparator);
        assert_eq!(tokens[1].line(), 1);

        assert_eq!(tokens[2].lexeme, "b");
        assert_eq!(tokens[2].line(), 2);
        assert_eq!(tokens[2].column(), 0);
    }

    #[test]
    fn test_empty_input() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_reconstruction_of_a_full_program() {
        let source = "#shape(point) {\n    position(1, 2); // origin\n    label(\"home\");\n}\n";
        let handler = Handler::new();
        let joined: String = Lexer::new(source, &handler).map(|t| t.lexeme).fold(
            String::new(),
            |mut acc, lexeme| {
                acc.push_str(lexeme);
                acc
            },
        );
        assert_eq!(joined, source);
        assert!(!handler.has_errors());
    }

    #[test]
    fn test_early_termination_is_cheap() {
        let handler = Handler::new();
        let mut lexer = Lexer::new("a b c d e f", &handler);
        let first = lexer.next_token().unwrap();
        assert_eq!(first.lexeme, "a");
        drop(lexer);
    }

    #[test]
    fn test_identical_input_identical_output() {
        let source = "say(\"hi\"); @ 3.5 #go";
        let h1 = Handler::new();
        let h2 = Handler::new();
        let a: Vec<_> = Lexer::new(source, &h1).collect();
        let b: Vec<_> = Lexer::new(source, &h2).collect();
        assert_eq!(a, b);
    }
}
