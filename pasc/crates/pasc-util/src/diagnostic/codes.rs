//! Diagnostic codes for categorizing errors.
//!
//! # Examples
//!
//! ```
//! use pasc_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E0001;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 1);
//! assert_eq!(code.as_str(), "E0001");
//! ```

use std::fmt;

/// A unique code identifying a diagnostic message
///
/// Diagnostic codes follow the format `{prefix}{number}` where `prefix` is
/// a short category letter ("E" for errors) and `number` is zero-padded to
/// four digits.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "E" for error)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    ///
    /// # Examples
    ///
    /// ```
    /// use pasc_util::diagnostic::DiagnosticCode;
    ///
    /// let code = DiagnosticCode::new("E", 1001);
    /// assert_eq!(code.as_str(), "E1001");
    /// ```
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string (e.g., "E0001")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // =========================================================================
    // SCANNER ERROR CODES (E0001-E0999)
    // =========================================================================

    /// E0001: Unexpected character
    pub const E0001: Self = Self::new("E", 1);
}

impl fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_padding() {
        assert_eq!(DiagnosticCode::new("W", 7).as_str(), "W0007");
        assert_eq!(DiagnosticCode::new("E", 12345).as_str(), "E12345");
    }

    #[test]
    fn test_scanner_codes() {
        assert_eq!(DiagnosticCode::E0001.to_string(), "E0001");
        assert_ne!(DiagnosticCode::E0001, DiagnosticCode::new("E", 2));
    }

    #[test]
    fn test_debug_format() {
        assert_eq!(
            format!("{:?}", DiagnosticCode::E0001),
            "DiagnosticCode(E0001)"
        );
    }
}
