//! Error types for environment variable unmarshaling

use crate::duration::DurationError;
use std::num::{ParseFloatError, ParseIntError};

/// Errors that can occur while populating a record from the environment.
///
/// Traversal stops at the first error. Fields assigned earlier in
/// declaration order keep their new values.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The target is absent or is not a record.
    #[error("target must be a present, mutable reference to a record")]
    InvalidValue,

    /// A tagged field is not `pub` and cannot be assigned.
    #[error("field '{field}' must be exported (declared `pub`) to carry an env tag")]
    UnexportedField {
        /// Name of the offending field
        field: &'static str,
    },

    /// The field's type has no coercion rule.
    #[error("field '{field}' has unsupported type {type_name}")]
    UnsupportedType {
        /// Name of the field
        field: &'static str,
        /// Fully qualified type name of the field
        type_name: &'static str,
    },

    /// The resolved string does not parse as the field's type.
    #[error("failed to parse '{key}' for field '{field}' as {type_name}: {source}")]
    Coercion {
        /// Name of the field
        field: &'static str,
        /// Environment key the value came from, or `default` for the tag's default literal
        key: String,
        /// Fully qualified type name that parsing was attempted for
        type_name: &'static str,
        /// Error reported by the underlying parser
        source: ParseError,
    },
}

/// Stable identity of an [`Error`], for dispatching without matching on payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidValue,
    UnexportedField,
    UnsupportedType,
    Coercion,
}

impl Error {
    /// Kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidValue => ErrorKind::InvalidValue,
            Self::UnexportedField { .. } => ErrorKind::UnexportedField,
            Self::UnsupportedType { .. } => ErrorKind::UnsupportedType,
            Self::Coercion { .. } => ErrorKind::Coercion,
        }
    }

    /// Create an unexported field error (used by macro-generated code)
    #[doc(hidden)]
    pub fn unexported(field: &'static str) -> Self {
        Self::UnexportedField { field }
    }

    pub(crate) fn unsupported<T>(field: &'static str) -> Self {
        Self::UnsupportedType {
            field,
            type_name: std::any::type_name::<T>(),
        }
    }

    pub(crate) fn coercion<T>(
        field: &'static str,
        key: impl Into<String>,
        source: ParseError,
    ) -> Self {
        Self::Coercion {
            field,
            key: key.into(),
            type_name: std::any::type_name::<T>(),
            source,
        }
    }
}

/// Failure to parse a string under a leaf type's grammar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid boolean literal '{0}'")]
    Bool(String),

    #[error(transparent)]
    Int(#[from] ParseIntError),

    #[error(transparent)]
    Float(#[from] ParseFloatError),

    #[error("value '{0}' is out of range")]
    OutOfRange(String),

    #[error(transparent)]
    Duration(#[from] DurationError),
}
