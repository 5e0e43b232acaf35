//! Failure taxonomy for sequence construction, indexing and evaluation.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What went wrong, where in the sequence, and how to avoid it.
///
/// `code` is a short kebab-case tag (`"negative-index"`, `"overflow"`, ...)
/// that stays stable across releases; `message` is free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable kebab-case tag.
    pub code: String,
    /// Free-text description.
    pub message: String,
    /// Offending indices and operands keyed by role, e.g. `index` or `lhs`.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub context: BTreeMap<String, String>,
    /// Suggested way around the failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Payload without context or hint.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Records the rendered `value` under `role`; a repeated role overwrites.
    pub fn with_context(mut self, role: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(role.into(), value.to_string());
        self
    }

    /// Attaches a remediation hint.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Rendered value recorded under `role`, if any.
    pub fn context_value(&self, role: &str) -> Option<&str> {
        self.context.get(role).map(String::as_str)
    }
}

/// Every failure a sequence can report, grouped by when it arises.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum SeqError {
    /// Construction arguments are missing, ambiguous or unrecognised.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(ErrorInfo),
    /// A sequence was indexed with a key that is not an integer.
    #[error("invalid index type: {0}")]
    InvalidIndexType(ErrorInfo),
    /// A sequence was indexed with a negative or unrepresentable integer.
    #[error("invalid index value: {0}")]
    InvalidIndexValue(ErrorInfo),
    /// An arithmetic operator failed while evaluating a term.
    #[error("arithmetic failure: {0}")]
    Arithmetic(ErrorInfo),
    /// A fold without an initial value was asked to reduce zero terms.
    #[error("empty reduction: {0}")]
    EmptyReduction(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        let mut pairs = self.context.iter();
        if let Some((key, value)) = pairs.next() {
            write!(f, " ({key}={value}")?;
            for (key, value) in pairs {
                write!(f, ", {key}={value}")?;
            }
            write!(f, ")")?;
        }
        match &self.hint {
            Some(hint) => write!(f, "; {hint}"),
            None => Ok(()),
        }
    }
}

impl SeqError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            SeqError::InvalidConfiguration(info)
            | SeqError::InvalidIndexType(info)
            | SeqError::InvalidIndexValue(info)
            | SeqError::Arithmetic(info)
            | SeqError::EmptyReduction(info) => info,
        }
    }

    /// Stable code of the underlying failure, e.g. `"division-by-zero"`.
    pub fn code(&self) -> &str {
        &self.info().code
    }

    /// Whether the error was caused by the index rather than by evaluation.
    pub fn is_index_error(&self) -> bool {
        matches!(
            self,
            SeqError::InvalidIndexType(_) | SeqError::InvalidIndexValue(_)
        )
    }
}
