//! pasc-util - Core Utilities and Foundation Types
//!
//! Shared building blocks for the pasc toolchain:
//!
//! - [`span`] - source locations (byte offsets plus line/column)
//! - [`diagnostic`] - error reporting with codes and source snippets
//! - [`error`] - error types for the utilities themselves
//!
//! # Example
//!
//! ```
//! use pasc_util::{Diagnostic, DiagnosticCode, Span};
//!
//! let diag = Diagnostic::error("unexpected character '@'", Span::new(2, 3, 1, 3))
//!     .with_code(DiagnosticCode::E0001);
//! assert_eq!(diag.code, Some(DiagnosticCode::E0001));
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticCode, Level, SourceSnippet};
pub use error::{SourceMapError, SourceMapResult};
pub use span::Span;

// Re-export commonly used types
pub use rustc_hash::FxHashMap;
