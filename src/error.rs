use std::fmt;

use miette::Diagnostic;
use thiserror::Error;

/// An error that can occur when resolving a field name.
#[derive(Diagnostic, Error)]
#[error(transparent)]
#[diagnostic(transparent)]
pub struct Error {
    kind: ErrorKind,
}

#[derive(Debug, Diagnostic, Error, PartialEq, Eq)]
pub(crate) enum ErrorKind {
    #[error("property has no name")]
    #[diagnostic(
        code(field_naming::invalid_input),
        help("a field name can only be derived from a named property")
    )]
    InvalidInput,
    #[error("unknown field naming strategy '{name}'")]
    #[diagnostic(
        code(field_naming::unknown_strategy),
        help("expected one of 'property-name', 'snake-case', 'camel-case-abbreviating' or 'camel-case-splitting:<delimiter>'")
    )]
    UnknownStrategy { name: String },
}

impl Error {
    pub(crate) fn from_kind(kind: ErrorKind) -> Self {
        Error { kind }
    }

    /// Creates an instance of [`struct@Error`] indicating that a property has no name.
    ///
    /// Returned by every [`FieldNamingStrategy`](crate::FieldNamingStrategy) when
    /// [`Property::name`](crate::Property::name) returns `None`.
    pub fn invalid_input() -> Self {
        Error::from_kind(ErrorKind::InvalidInput)
    }

    #[cfg(test)]
    pub(crate) fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Returns true if this is an instance of [`Error::invalid_input()`].
    pub fn is_invalid_input(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidInput)
    }

    /// Returns true if this error was caused by parsing an unrecognized
    /// [`NamingStrategy`](crate::NamingStrategy) name.
    pub fn is_unknown_strategy(&self) -> bool {
        matches!(self.kind, ErrorKind::UnknownStrategy { .. })
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::InvalidInput | ErrorKind::UnknownStrategy { .. } => write!(f, "{}", self),
        }
    }
}
