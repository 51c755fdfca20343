//! starc-util - Core Utilities and Foundation Types
//!
//! This crate provides the foundation types shared by every phase of the
//! Star compiler front end:
//!
//! - [`span`] - Source locations ([`Span`], [`FileId`]) and source file
//!   management ([`SourceFile`], [`SourceMap`])
//! - [`diagnostic`] - Diagnostic reporting ([`Diagnostic`], [`Handler`],
//!   [`DiagnosticBuilder`], [`DiagnosticCode`])
//! - [`error`] - Error types for fallible utility operations
//!
//! # Example
//!
//! ```
//! use starc_util::{DiagnosticBuilder, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unexpected character '@'")
//!     .span(Span::new(4, 5, 1, 4))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! assert_eq!(handler.error_count(), 1);
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level};
pub use error::{SourceMapError, SourceMapResult};
pub use span::{FileId, SourceFile, SourceMap, Span};

// Re-export the hash types used throughout the workspace
pub use rustc_hash::{FxHashMap, FxHashSet};
