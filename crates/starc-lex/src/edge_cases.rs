//! Edge case tests for starc-lex.

#[cfg(test)]
mod tests {
    use crate::{Lexer, TokenKind};
    use starc_util::Handler;

    fn lex_all(source: &str) -> Vec<(TokenKind, String)> {
        let handler = Handler::new();
        Lexer::new(source, &handler)
            .map(|t| (t.kind, t.lexeme.to_string()))
            .collect()
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex_all(source).into_iter().map(|(k, _)| k).collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_single_char_inputs() {
        assert_eq!(kinds("a"), vec![TokenKind::Identifier]);
        assert_eq!(kinds("1"), vec![TokenKind::Number]);
        assert_eq!(kinds(" "), vec![TokenKind::Space]);
        assert_eq!(kinds(";"), vec![TokenKind::Semicolon]);
        assert_eq!(kinds("\u{0}"), vec![TokenKind::InvalidToken]);
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let tokens = lex_all(&name);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].1.len(), 10000);
    }

    #[test]
    fn test_edge_long_space_run() {
        let run = " ".repeat(4096);
        assert_eq!(lex_all(&run), vec![(TokenKind::Space, run.clone())]);
    }

    #[test]
    fn test_edge_non_ascii_is_invalid_per_char() {
        // One InvalidToken per character, multi-byte characters included
        assert_eq!(
            kinds("é£"),
            vec![TokenKind::InvalidToken, TokenKind::InvalidToken]
        );
    }

    #[test]
    fn test_edge_invalid_lexemes_cover_multibyte() {
        let tokens = lex_all("é");
        assert_eq!(tokens, vec![(TokenKind::InvalidToken, "é".to_string())]);
    }

    #[test]
    fn test_edge_mixed_line_endings() {
        assert_eq!(
            lex_all("a\nb\r\nc\rd"),
            vec![
                (TokenKind::Identifier, "a".to_string()),
                (TokenKind::LineSeparator, "\n".to_string()),
                (TokenKind::Identifier, "b".to_string()),
                (TokenKind::LineSeparator, "\r\n".to_string()),
                (TokenKind::Identifier, "c".to_string()),
                (TokenKind::LineSeparator, "\r".to_string()),
                (TokenKind::Identifier, "d".to_string()),
            ]
        );
    }

    #[test]
    fn test_edge_line_numbers_across_crlf() {
        let handler = Handler::new();
        let tokens: Vec<_> = Lexer::new("a\r\nb", &handler).collect();
        assert_eq!(tokens[0].line(), 1);
        assert_eq!(tokens[2].line(), 2);
        assert_eq!(tokens[2].column(), 0);
    }

    #[test]
    fn test_edge_columns_count_characters_per_line() {
        let handler = Handler::new();
        let tokens: Vec<_> = Lexer::new("ab cd", &handler).collect();
        assert_eq!(tokens[0].column(), 0); // "ab"
        assert_eq!(tokens[1].column(), 2); // " "
        assert_eq!(tokens[2].column(), 3); // "cd"
    }

    #[test]
    fn test_edge_string_containing_comment_syntax() {
        assert_eq!(
            lex_all("\"// not a comment\""),
            vec![(TokenKind::String, "\"// not a comment\"".to_string())]
        );
    }

    #[test]
    fn test_edge_comment_containing_string_syntax() {
        assert_eq!(
            lex_all("// \"not a string\""),
            vec![(TokenKind::SingleLineComment, "// \"not a string\"".to_string())]
        );
    }

    #[test]
    fn test_edge_adjacent_strings() {
        assert_eq!(
            lex_all("\"a\"\"b\""),
            vec![
                (TokenKind::String, "\"a\"".to_string()),
                (TokenKind::String, "\"b\"".to_string()),
            ]
        );
    }

    #[test]
    fn test_edge_directive_at_end_of_input() {
        assert_eq!(kinds("#go"), vec![TokenKind::Directive]);
    }

    #[test]
    fn test_edge_whitespace_only_input() {
        assert_eq!(
            kinds(" \t \n  "),
            vec![
                TokenKind::Space,
                TokenKind::LineSeparator,
                TokenKind::Space
            ]
        );
    }

    #[test]
    fn test_edge_diagnostics_accumulate_per_invalid_token() {
        let handler = Handler::new();
        let tokens: Vec<_> = Lexer::new("@ $ %", &handler).collect();
        let invalid = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::InvalidToken)
            .count();
        assert_eq!(invalid, 3);
        assert_eq!(handler.error_count(), 3);
    }
}

#[cfg(test)]
mod properties {
    use crate::Lexer;
    use proptest::prelude::*;
    use starc_util::Handler;

    proptest! {
        /// Concatenating lexemes reconstructs the input exactly, for any
        /// input at all: no gaps, no overlaps, no dropped bytes.
        #[test]
        fn prop_lexemes_reconstruct_input(input in any::<String>()) {
            let handler = Handler::new();
            let joined: String = Lexer::new(&input, &handler)
                .map(|t| t.lexeme)
                .collect();
            prop_assert_eq!(joined, input);
        }

        /// The lexer never produces an empty token.
        #[test]
        fn prop_no_empty_tokens(input in any::<String>()) {
            let handler = Handler::new();
            for token in Lexer::new(&input, &handler) {
                prop_assert!(!token.lexeme.is_empty());
                prop_assert!(token.span.start < token.span.end);
            }
        }

        /// Token spans are adjacent and in order.
        #[test]
        fn prop_spans_tile_the_input(input in any::<String>()) {
            let handler = Handler::new();
            let mut expected_start = 0;
            for token in Lexer::new(&input, &handler) {
                prop_assert_eq!(token.span.start, expected_start);
                expected_start = token.span.end;
            }
            prop_assert_eq!(expected_start, input.len());
        }

        /// Lexing the same input twice gives the same tokens.
        #[test]
        fn prop_deterministic(input in any::<String>()) {
            let h1 = Handler::new();
            let h2 = Handler::new();
            let a: Vec<_> = Lexer::new(&input, &h1).collect();
            let b: Vec<_> = Lexer::new(&input, &h2).collect();
            prop_assert_eq!(a, b);
        }
    }
}
