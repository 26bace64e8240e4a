//! Source code snippets for diagnostics.

use crate::error::{SourceMapError, SourceMapResult};
use crate::Span;

/// A source code snippet for display in diagnostics
///
/// Contains the source line affected by the diagnostic, with the offending
/// column range highlighted by carets.
///
/// # Examples
///
/// ```
/// use pasc_util::diagnostic::SourceSnippet;
///
/// let snippet = SourceSnippet::new("a := @;", 1, 6, 7, Some("not a token"));
/// assert!(snippet.format().contains('^'));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// The source line content
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// Column where the issue starts (1-based)
    pub start_column: usize,
    /// Column where the issue ends (1-based, exclusive)
    pub end_column: usize,
    /// Optional label to display under the highlighted range
    pub label: Option<String>,
}

impl SourceSnippet {
    /// Create a new source snippet
    pub fn new(
        line: impl Into<String>,
        line_number: usize,
        start_column: usize,
        end_column: usize,
        label: Option<impl Into<String>>,
    ) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column,
            end_column,
            label: label.map(Into::into),
        }
    }

    /// Cut the line a span starts on out of `source`.
    ///
    /// The highlighted range is clipped to the end of that line, so a span
    /// crossing a newline underlines only its first line.
    ///
    /// # Examples
    ///
    /// ```
    /// use pasc_util::{SourceSnippet, Span};
    ///
    /// let source = "BEGIN\n  x := @\nEND.";
    /// let snippet = SourceSnippet::from_source(source, Span::new(13, 14, 2, 8)).unwrap();
    /// assert_eq!(snippet.line, "  x := @");
    /// assert_eq!(snippet.start_column, 8);
    /// assert_eq!(snippet.end_column, 9);
    /// ```
    pub fn from_source(source: &str, span: Span) -> SourceMapResult<Self> {
        if span.start > span.end {
            return Err(SourceMapError::InvalidSpan {
                start: span.start,
                end: span.end,
            });
        }
        if span.end > source.len() {
            return Err(SourceMapError::SpanOutOfBounds {
                source_len: source.len(),
                span_start: span.start,
                span_end: span.end,
            });
        }

        let line_index = (span.line as usize).saturating_sub(1);
        let line = source
            .split('\n')
            .nth(line_index)
            .ok_or_else(|| SourceMapError::InvalidLineNumber {
                line: span.line as usize,
                max_lines: source.split('\n').count(),
            })?;
        let line = line.strip_suffix('\r').unwrap_or(line);

        let start_column = span.column.max(1) as usize;
        let line_width = line.chars().count();
        let highlighted = source
            .get(span.start..span.end)
            .map(|text| text.chars().take_while(|c| *c != '\n').count())
            .unwrap_or(0);
        let end_column = (start_column + highlighted).min(line_width + 1);

        Ok(Self::new(line, span.line as usize, start_column, end_column, None::<String>))
    }

    /// Set the label for this snippet
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Format the snippet for display
    ///
    /// Returns the numbered source line followed by a caret line pointing
    /// at the highlighted range.
    pub fn format(&self) -> String {
        let line_num_width = self.line_number.to_string().len().max(3);
        let mut result = String::new();

        result.push_str(&format!(
            "{:>width$} | {}\n",
            self.line_number,
            self.line,
            width = line_num_width
        ));

        result.push_str(&format!("{:>width$} | ", "", width = line_num_width));

        let underline_start = self.start_column.saturating_sub(1);
        let underline_len = self.end_column.saturating_sub(self.start_column).max(1);

        result.push_str(&" ".repeat(underline_start));
        result.push_str(&"^".repeat(underline_len));

        if let Some(ref label) = self.label {
            result.push_str(&format!(" {}", label));
        }

        result
    }
}
