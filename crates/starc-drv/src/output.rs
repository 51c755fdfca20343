//! Token stream emission.
//!
//! Three formats: `text` (one row per token), `json` (one JSON object
//! per file, JSON Lines style), and `summary` (per-kind counts).

use std::io::Write;

use serde::Serialize;
use starc_lex::{Token, TokenKind};
use starc_util::{FxHashMap, SourceFile};

use crate::error::Result;

/// Owned, serializable snapshot of a token for `--emit json`.
#[derive(Debug, Serialize)]
pub struct TokenRecord {
    /// Category name, e.g. `"Identifier"`.
    pub kind: &'static str,
    /// The literal source text.
    pub lexeme: String,
    /// Line the token starts on (1-based).
    pub line: u32,
    /// Column the token starts at (0-based).
    pub column: u32,
    /// Start byte offset.
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

impl TokenRecord {
    /// Builds a record from a borrowed token.
    pub fn from_token(token: &Token<'_>) -> Self {
        Self {
            kind: token.kind.name(),
            lexeme: token.lexeme.to_string(),
            line: token.line(),
            column: token.column(),
            start: token.span.start,
            end: token.span.end,
        }
    }
}

/// One JSON object per file.
#[derive(Debug, Serialize)]
struct FileDump<'n> {
    file: &'n str,
    tokens: Vec<TokenRecord>,
}

/// Writes one `file:line:column: Kind lexeme` row per token.
pub fn emit_text<'a>(
    file: &SourceFile,
    tokens: impl Iterator<Item = Token<'a>>,
    out: &mut impl Write,
) -> Result<()> {
    for token in tokens {
        writeln!(
            out,
            "{}:{}:{}: {} {:?}",
            file.name(),
            token.line(),
            token.column(),
            token.kind,
            token.lexeme
        )?;
    }
    Ok(())
}

/// Writes one JSON object for the file's whole token stream.
pub fn emit_json<'a>(
    file: &SourceFile,
    tokens: impl Iterator<Item = Token<'a>>,
    out: &mut impl Write,
) -> Result<()> {
    let dump = FileDump {
        file: file.name(),
        tokens: tokens.map(|t| TokenRecord::from_token(&t)).collect(),
    };
    serde_json::to_writer(&mut *out, &dump)?;
    writeln!(out)?;
    Ok(())
}

/// Writes per-kind token counts in kind declaration order.
pub fn emit_summary<'a>(
    file: &SourceFile,
    tokens: impl Iterator<Item = Token<'a>>,
    out: &mut impl Write,
) -> Result<()> {
    let mut counts: FxHashMap<TokenKind, usize> = FxHashMap::default();
    let mut total = 0usize;
    for token in tokens {
        *counts.entry(token.kind).or_insert(0) += 1;
        total += 1;
    }

    writeln!(out, "{}: {} tokens", file.name(), total)?;
    for kind in TokenKind::ALL {
        if let Some(count) = counts.get(&kind) {
            writeln!(out, "  {}: {}", kind, count)?;
        }
    }
    Ok(())
}
