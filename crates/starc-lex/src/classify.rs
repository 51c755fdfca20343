//! Keyword classification pass.
//!
//! The lexer core has no reserved words: every name is an `Identifier`
//! and every `#name` is a `Directive`. Which names are meta directives
//! and which identifiers name resources is configuration, registered on
//! a [`Classifier`] and applied as a pass over the token stream. The
//! pass only rewrites token kinds; lexemes and spans are untouched, so
//! the stream still covers the input exactly.

use starc_util::FxHashSet;

use crate::token::{Token, TokenKind};

/// Reclassifies registered names in a token stream.
///
/// # Example
///
/// ```
/// use starc_lex::{Classifier, Lexer, TokenKind};
/// use starc_util::Handler;
///
/// let mut classifier = Classifier::new();
/// classifier.register_meta_directive("include");
/// classifier.register_resource("stdl");
///
/// let handler = Handler::new();
/// let lexer = Lexer::new("#include stdl", &handler);
/// let kinds: Vec<_> = classifier
///     .classify_all(lexer)
///     .map(|t| t.kind)
///     .collect();
///
/// assert_eq!(
///     kinds,
///     vec![
///         TokenKind::MetaDirective,
///         TokenKind::Space,
///         TokenKind::Resource,
///     ]
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct Classifier {
    /// Directive names (without the `#`) that classify as meta.
    meta_directives: FxHashSet<String>,
    /// Identifier lexemes that classify as resources.
    resources: FxHashSet<String>,
}

impl Classifier {
    /// Creates a classifier with no registered names.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a directive name (without the leading `#`) as meta.
    pub fn register_meta_directive(&mut self, name: impl Into<String>) {
        self.meta_directives.insert(name.into());
    }

    /// Registers an identifier as a resource name.
    pub fn register_resource(&mut self, name: impl Into<String>) {
        self.resources.insert(name.into());
    }

    /// Classifies one token, rewriting its kind if its name is
    /// registered. All other tokens pass through unchanged.
    pub fn classify<'a>(&self, token: Token<'a>) -> Token<'a> {
        match token.kind {
            TokenKind::Directive => {
                let name = token.lexeme.strip_prefix('#').unwrap_or(token.lexeme);
                if self.meta_directives.contains(name) {
                    token.with_kind(TokenKind::MetaDirective)
                } else {
                    token
                }
            },
            TokenKind::Identifier if self.resources.contains(token.lexeme) => {
                token.with_kind(TokenKind::Resource)
            },
            _ => token,
        }
    }

    /// Classifies every token of a stream, lazily.
    pub fn classify_all<'s, 'a>(
        &'s self,
        tokens: impl Iterator<Item = Token<'a>> + 's,
    ) -> impl Iterator<Item = Token<'a>> + 's {
        tokens.map(|t| self.classify(t))
    }
}
