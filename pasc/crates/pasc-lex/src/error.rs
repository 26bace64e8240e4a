//! Lexical errors.

use pasc_util::{Diagnostic, DiagnosticCode, SourceSnippet, Span};
use thiserror::Error;

/// Error raised when the scanner cannot produce a token.
///
/// Scanning stops at the first error; the lexer does not resynchronize.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LexError {
    /// A character that starts no token.
    #[error("unexpected character '{character}' at {span}")]
    UnexpectedCharacter {
        /// The offending character
        character: char,
        /// Where it was found
        span: Span,
    },
}

impl LexError {
    /// Returns the source location of the error.
    pub fn span(&self) -> Span {
        match self {
            LexError::UnexpectedCharacter { span, .. } => *span,
        }
    }

    /// Returns the diagnostic code for this error.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexError::UnexpectedCharacter { .. } => DiagnosticCode::E0001,
        }
    }

    /// Builds a renderable diagnostic, quoting the offending line of `source`.
    ///
    /// If the span cannot be resolved against `source` the diagnostic is
    /// returned without a snippet.
    ///
    /// ```
    /// use pasc_lex::tokenize;
    ///
    /// let source = "a @ b";
    /// let err = tokenize(source).unwrap_err();
    /// let text = err.to_diagnostic(source).render(false);
    /// assert!(text.contains("error[E0001]"));
    /// assert!(text.contains("  1 | a @ b"));
    /// assert!(text.contains("= note: scanning stopped at 1:3"));
    /// ```
    pub fn to_diagnostic(&self, source: &str) -> Diagnostic {
        let (message, label, help) = match self {
            LexError::UnexpectedCharacter { character, .. } => (
                format!("unexpected character '{}'", character),
                "not valid here",
                "remove the character or replace it with a valid token",
            ),
        };

        let mut diagnostic = Diagnostic::error(message, self.span())
            .with_code(self.code())
            .with_note(format!("scanning stopped at {}", self.span()))
            .with_help(help);
        if let Ok(snippet) = SourceSnippet::from_source(source, self.span()) {
            diagnostic = diagnostic.with_snippet(snippet.with_label(label));
        }
        diagnostic
    }
}
