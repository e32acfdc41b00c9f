//! Error types raised by argument validation and by the `Optional` container.
//!
//! Two failure categories exist:
//!
//! - [`InvalidArgumentError`]: a required argument was absent, or a value was
//!   extracted from an empty container.
//! - [`IllegalAccessError`]: code tried to instantiate the static-only
//!   [`Assert`](crate::assert::Assert) namespace.
//!
//! [`ContractError`] unifies both so callers can match on the category with
//! [`ContractError::kind`].
//!
//! # Examples
//!
//! ```rust
//! use presence::error::{ContractError, ContractErrorKind, InvalidArgumentError};
//!
//! let error: ContractError = InvalidArgumentError::new("value is null").into();
//! assert_eq!(error.kind(), ContractErrorKind::InvalidArgument);
//! assert_eq!(format!("{error}"), "value is null");
//! ```

use std::fmt;

/// Raised when a method has been passed an illegal or inappropriate argument.
///
/// # Examples
///
/// ```rust
/// use presence::error::InvalidArgumentError;
///
/// let error = InvalidArgumentError::new("value is not defined");
/// assert_eq!(error.message(), "value is not defined");
/// assert_eq!(format!("{error}"), "value is not defined");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InvalidArgumentError {
    message: String,
}

impl InvalidArgumentError {
    /// Creates a new error carrying the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the human readable description of the failed check.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for InvalidArgumentError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.message)
    }
}

impl std::error::Error for InvalidArgumentError {}

/// Raised when code attempts to instantiate a type that only exists as a
/// namespace of associated functions.
///
/// # Examples
///
/// ```rust
/// use presence::assert::Assert;
///
/// let error = Assert::new().unwrap_err();
/// assert_eq!(error.message(), "Assert is a utility type");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IllegalAccessError {
    message: String,
}

impl IllegalAccessError {
    /// Creates a new error carrying the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the human readable description of the refused access.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for IllegalAccessError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.message)
    }
}

impl std::error::Error for IllegalAccessError {}

/// The category of a [`ContractError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractErrorKind {
    /// See [`InvalidArgumentError`].
    InvalidArgument,
    /// See [`IllegalAccessError`].
    IllegalAccess,
}

/// Either of the two failures this crate can produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractError {
    /// A required argument was absent, or an empty container was unwrapped.
    InvalidArgument(InvalidArgumentError),
    /// A static-only namespace was instantiated.
    IllegalAccess(IllegalAccessError),
}

impl ContractError {
    /// Returns the failure category, for matching without destructuring.
    pub const fn kind(&self) -> ContractErrorKind {
        match self {
            Self::InvalidArgument(_) => ContractErrorKind::InvalidArgument,
            Self::IllegalAccess(_) => ContractErrorKind::IllegalAccess,
        }
    }

    /// Returns the message carried by the wrapped error.
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidArgument(error) => error.message(),
            Self::IllegalAccess(error) => error.message(),
        }
    }
}

impl fmt::Display for ContractError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(error) => write!(formatter, "{error}"),
            Self::IllegalAccess(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for ContractError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidArgument(error) => Some(error),
            Self::IllegalAccess(error) => Some(error),
        }
    }
}

impl From<InvalidArgumentError> for ContractError {
    fn from(error: InvalidArgumentError) -> Self {
        Self::InvalidArgument(error)
    }
}

impl From<IllegalAccessError> for ContractError {
    fn from(error: IllegalAccessError) -> Self {
        Self::IllegalAccess(error)
    }
}

/// Failure of [`Optional::try_or_else_throw`](crate::optional::Optional::try_or_else_throw).
///
/// The supplier's own error travels unmodified in [`OrElseThrowError::Supplied`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrElseThrowError<E> {
    /// The container was empty and no supplier was given.
    InvalidArgument(InvalidArgumentError),
    /// The error produced by the supplier.
    Supplied(E),
}

impl<E> OrElseThrowError<E> {
    /// Returns the supplier's error, if that is what this failure carries.
    pub fn into_supplied(self) -> Option<E> {
        match self {
            Self::Supplied(error) => Some(error),
            Self::InvalidArgument(_) => None,
        }
    }
}

impl<E: fmt::Display> fmt::Display for OrElseThrowError<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(error) => write!(formatter, "{error}"),
            Self::Supplied(error) => write!(formatter, "{error}"),
        }
    }
}

impl<E> std::error::Error for OrElseThrowError<E>
where
    E: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidArgument(error) => Some(error),
            Self::Supplied(error) => Some(error),
        }
    }
}

impl<E> From<InvalidArgumentError> for OrElseThrowError<E> {
    fn from(error: InvalidArgumentError) -> Self {
        Self::InvalidArgument(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::error::Error;

    #[rstest]
    fn test_invalid_argument_display() {
        let error = InvalidArgumentError::new("value is null");
        assert_eq!(format!("{error}"), "value is null");
    }

    #[rstest]
    fn test_illegal_access_display() {
        let error = IllegalAccessError::new("Assert is a utility type");
        assert_eq!(format!("{error}"), "Assert is a utility type");
    }

    #[rstest]
    #[case(InvalidArgumentError::new("a").into(), ContractErrorKind::InvalidArgument)]
    #[case(IllegalAccessError::new("b").into(), ContractErrorKind::IllegalAccess)]
    fn test_contract_error_kind(#[case] error: ContractError, #[case] expected: ContractErrorKind) {
        assert_eq!(error.kind(), expected);
    }

    #[rstest]
    fn test_contract_error_message_and_display() {
        let error = ContractError::from(IllegalAccessError::new("no instances"));
        assert_eq!(error.message(), "no instances");
        assert_eq!(format!("{error}"), "no instances");
    }

    #[rstest]
    fn test_contract_error_source_is_wrapped_error() {
        let error = ContractError::from(InvalidArgumentError::new("value is null"));
        let source = error.source().map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("value is null"));
    }

    #[rstest]
    fn test_leaf_errors_have_no_source() {
        assert!(InvalidArgumentError::new("x").source().is_none());
        assert!(IllegalAccessError::new("x").source().is_none());
    }

    #[rstest]
    fn test_invalid_argument_equality() {
        assert_eq!(InvalidArgumentError::new("x"), InvalidArgumentError::new("x"));
        assert_ne!(InvalidArgumentError::new("x"), InvalidArgumentError::new("y"));
    }

    #[rstest]
    fn test_or_else_throw_error_into_supplied() {
        let supplied: OrElseThrowError<IllegalAccessError> =
            OrElseThrowError::Supplied(IllegalAccessError::new("custom"));
        assert_eq!(
            supplied.into_supplied(),
            Some(IllegalAccessError::new("custom"))
        );

        let invalid: OrElseThrowError<IllegalAccessError> =
            InvalidArgumentError::new("value is null").into();
        assert_eq!(invalid.into_supplied(), None);
    }

    #[rstest]
    fn test_or_else_throw_error_display() {
        let error: OrElseThrowError<InvalidArgumentError> =
            OrElseThrowError::Supplied(InvalidArgumentError::new("boom"));
        assert_eq!(format!("{error}"), "boom");
    }
}
