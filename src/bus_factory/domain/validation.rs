//! Validation diagnostics produced by specifications.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lazily produced validation results borrowed from their specification.
pub type ValidationResults<'a> = Box<dyn Iterator<Item = ValidationResult> + 'a>;

/// Severity of a validation result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationDisposition {
    /// Informational; the configuration is acceptable.
    Success,
    /// Suspicious but usable configuration.
    Warning,
    /// A defect that should stop the bus from being built.
    Failure,
}

impl ValidationDisposition {
    /// Returns the canonical string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Failure => "failure",
        }
    }
}

impl fmt::Display for ValidationDisposition {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// One diagnostic about a configuration subject.
///
/// # Examples
///
/// ```
/// use warren::bus_factory::domain::ValidationResult;
///
/// let result = ValidationResult::failure("Host", "At least one host must be defined");
/// assert!(result.is_failure());
/// assert_eq!(result.to_string(), "[failure] Host: At least one host must be defined");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    disposition: ValidationDisposition,
    key: String,
    message: String,
}

impl ValidationResult {
    /// Creates a result with an explicit disposition.
    #[must_use]
    pub fn new(
        disposition: ValidationDisposition,
        key: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            disposition,
            key: key.into(),
            message: message.into(),
        }
    }

    /// Creates a failure result.
    #[must_use]
    pub fn failure(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ValidationDisposition::Failure, key, message)
    }

    /// Creates a warning result.
    #[must_use]
    pub fn warning(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ValidationDisposition::Warning, key, message)
    }

    /// Creates a success result.
    #[must_use]
    pub fn success(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ValidationDisposition::Success, key, message)
    }

    /// Returns the disposition.
    #[must_use]
    pub const fn disposition(&self) -> ValidationDisposition {
        self.disposition
    }

    /// Returns the configuration subject the result refers to.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns `true` for failures.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        self.disposition == ValidationDisposition::Failure
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[{}] {}: {}", self.disposition, self.key, self.message)
    }
}
