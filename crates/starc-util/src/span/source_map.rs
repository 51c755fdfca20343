//! Source map for managing source files and computing source locations.
//!
//! This module provides the [`SourceMap`] type for managing multiple source
//! files and computing line/column information from byte offsets.

use std::sync::Arc;

use super::{FileId, Span};
use crate::error::{SourceMapError, SourceMapResult};

/// A source file with its content and metadata
///
/// # Examples
///
/// ```
/// use starc_util::span::SourceFile;
///
/// let file = SourceFile::new(0, "main.star", "say(\"hi\")");
/// assert_eq!(file.name(), "main.star");
/// assert_eq!(file.content(), "say(\"hi\")");
/// ```
#[derive(Clone)]
pub struct SourceFile {
    /// Unique file identifier
    id: FileId,
    /// File name (path or display name)
    name: String,
    /// File content
    content: Arc<str>,
    /// Precomputed line start offsets
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file
    pub fn new(id: usize, name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        Self {
            id: FileId(id),
            name: name.into(),
            content,
            line_starts,
        }
    }

    /// Compute line start offsets from content
    fn line_starts(content: &str) -> Arc<[usize]> {
        let mut line_starts = vec![0];
        for (i, ch) in content.char_indices() {
            if ch == '\n' {
                line_starts.push(i + 1);
            }
        }
        line_starts.into()
    }

    /// Get the file identifier
    #[inline]
    pub fn id(&self) -> FileId {
        self.id
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the file content
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the total number of lines
    ///
    /// # Examples
    ///
    /// ```
    /// use starc_util::span::SourceFile;
    ///
    /// let file = SourceFile::new(0, "main.star", "line1\nline2\nline3");
    /// assert_eq!(file.line_count(), 3);
    /// ```
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Compute the (line, column) of a byte offset
    ///
    /// Lines are 1-based, columns are 0-based byte counts from the line
    /// start. Returns an error if the offset is past the end of the file.
    ///
    /// # Examples
    ///
    /// ```
    /// use starc_util::span::SourceFile;
    ///
    /// let file = SourceFile::new(0, "main.star", "ab\ncd");
    /// assert_eq!(file.location(0).unwrap(), (1, 0));
    /// assert_eq!(file.location(4).unwrap(), (2, 1));
    /// ```
    pub fn location(&self, offset: usize) -> SourceMapResult<(u32, u32)> {
        if offset > self.content.len() {
            return Err(SourceMapError::SpanOutOfBounds {
                file_len: self.content.len(),
                span_start: offset,
                span_end: offset,
            });
        }
        let line_index = match self.line_starts.binary_search(&offset) {
            Ok(i) => i,
            Err(i) => i - 1,
        };
        let column = offset - self.line_starts[line_index];
        Ok((line_index as u32 + 1, column as u32))
    }

    /// Extract the text covered by a span
    ///
    /// Returns an error if the span is inverted or out of bounds.
    pub fn span_text(&self, span: Span) -> SourceMapResult<&str> {
        if span.start > span.end {
            return Err(SourceMapError::InvalidSpan {
                start: span.start,
                end: span.end,
            });
        }
        if span.end > self.content.len() {
            return Err(SourceMapError::SpanOutOfBounds {
                file_len: self.content.len(),
                span_start: span.start,
                span_end: span.end,
            });
        }
        Ok(&self.content[span.start..span.end])
    }
}

/// A collection of source files indexed by [`FileId`]
///
/// # Examples
///
/// ```
/// use starc_util::span::SourceMap;
///
/// let mut sources = SourceMap::new();
/// let id = sources.add("main.star", "say(\"hi\")");
/// assert_eq!(sources.get(id).unwrap().name(), "main.star");
/// ```
#[derive(Clone, Default)]
pub struct SourceMap {
    files: Vec<SourceFile>,
}

impl SourceMap {
    /// Create an empty source map
    pub fn new() -> Self {
        Self { files: Vec::new() }
    }

    /// Add a file, returning its assigned id
    pub fn add(&mut self, name: impl Into<String>, content: impl Into<Arc<str>>) -> FileId {
        let id = self.files.len();
        self.files.push(SourceFile::new(id, name, content));
        FileId(id)
    }

    /// Look up a file by id
    pub fn get(&self, id: FileId) -> Option<&SourceFile> {
        self.files.get(id.index())
    }

    /// Look up a file by id, failing with a descriptive error
    pub fn get_or_err(&self, id: FileId) -> SourceMapResult<&SourceFile> {
        self.get(id)
            .ok_or_else(|| SourceMapError::FileNotFound(format!("file id {}", id.index())))
    }

    /// Iterate over all files in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &SourceFile> {
        self.files.iter()
    }

    /// Number of files in the map
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns true if the map holds no files
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
