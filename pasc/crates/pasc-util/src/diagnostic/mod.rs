//! Diagnostic module - Error reporting infrastructure.
//!
//! This module provides types for creating and rendering diagnostics
//! with attached notes and help messages.
//!
//! # Examples
//!
//! ```
//! use pasc_util::diagnostic::{Diagnostic, DiagnosticCode, SourceSnippet};
//! use pasc_util::Span;
//!
//! let source = "a @ b";
//! let span = Span::new(2, 3, 1, 3);
//! let diag = Diagnostic::error("unexpected character '@'", span)
//!     .with_code(DiagnosticCode::E0001)
//!     .with_snippet(SourceSnippet::from_source(source, span).unwrap())
//!     .with_help("remove the character");
//!
//! let rendered = diag.render(false);
//! assert!(rendered.starts_with("error[E0001]: unexpected character '@'"));
//! ```

mod codes;
mod snippet;

pub use codes::DiagnosticCode;
pub use snippet::SourceSnippet;

use crate::Span;
use std::fmt;

/// Diagnostic severity level
///
/// The scanner stops at its first problem, so every diagnostic it raises is
/// an error.
///
/// # Examples
///
/// ```
/// use pasc_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Level {
    /// An error that stops processing
    Error,
}

impl Level {
    /// Returns the canonical name for this level
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Level::Error => "error",
        }
    }

    /// Returns the ANSI color code for this level
    #[inline]
    pub const fn color_code(&self) -> &'static str {
        match self {
            Level::Error => "31", // Red
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
    /// Source code snippets for display
    pub snippets: Vec<SourceSnippet>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a note to the diagnostic
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help suggestion
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Add a source snippet
    pub fn with_snippet(mut self, snippet: SourceSnippet) -> Self {
        self.snippets.push(snippet);
        self
    }

    /// Render the diagnostic as multi-line terminal text.
    ///
    /// Layout:
    ///
    /// ```text
    /// error[E0001]: unexpected character '@'
    ///  --> 1:3
    ///   1 | a @ b
    ///     |   ^
    ///   = help: remove the character
    /// ```
    ///
    /// `use_color` wraps the level header in ANSI escapes.
    pub fn render(&self, use_color: bool) -> String {
        let header = match self.code {
            Some(code) => format!("{}[{}]", self.level, code),
            None => self.level.to_string(),
        };
        let header = if use_color {
            format!("\x1b[1;{}m{}\x1b[0m", self.level.color_code(), header)
        } else {
            header
        };

        let mut out = format!("{}: {}\n", header, self.message);
        if self.span != Span::DUMMY {
            out.push_str(&format!(" --> {}\n", self.span));
        }
        for snippet in &self.snippets {
            out.push_str(&snippet.format());
            out.push('\n');
        }
        for note in &self.notes {
            out.push_str(&format!("  = note: {}\n", note));
        }
        for help in &self.helps {
            out.push_str(&format!("  = help: {}\n", help));
        }
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(false))
    }
}
