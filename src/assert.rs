//! Argument validation primitives.
//!
//! Absence is represented by `Option::None` throughout this crate. A value
//! that was never supplied and a value that was deliberately left absent are
//! the same thing at this boundary; the two checks differ only in the message
//! they report, so callers can say *why* the value is unusable.
//!
//! # Examples
//!
//! ```rust
//! use presence::assert::Assert;
//!
//! assert_eq!(Assert::require_present(Some(10)), Ok(10));
//!
//! let error = Assert::require_not_missing(None::<i32>, None).unwrap_err();
//! assert_eq!(error.message(), "value is null");
//!
//! let error = Assert::require_supplied(None::<i32>, Some("mapper is required")).unwrap_err();
//! assert_eq!(error.message(), "mapper is required");
//! ```

use crate::error::{IllegalAccessError, InvalidArgumentError};

const NULL_MESSAGE: &str = "value is null";
const NOT_DEFINED_MESSAGE: &str = "value is not defined";

/// Namespace for the validation checks.
///
/// `Assert` has no public constructor; it cannot be built with a struct
/// literal outside this crate:
///
/// ```compile_fail
/// use presence::assert::Assert;
///
/// let instance = Assert { _private: () };
/// ```
///
/// [`Assert::new`] is the only way to ask for an instance, and it always
/// refuses with [`IllegalAccessError`].
#[derive(Debug)]
pub struct Assert {
    _private: (),
}

impl Assert {
    /// Refuses to create an instance.
    ///
    /// # Errors
    ///
    /// Always returns [`IllegalAccessError`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::assert::Assert;
    ///
    /// assert!(Assert::new().is_err());
    /// ```
    pub fn new() -> Result<Self, IllegalAccessError> {
        Err(IllegalAccessError::new("Assert is a utility type"))
    }

    /// Returns the value if it is present.
    ///
    /// Absence is a single concept here, so the supplied check is the one
    /// that reports, with its default message.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgumentError`] if `value` is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::assert::Assert;
    ///
    /// assert_eq!(Assert::require_present(Some("text")), Ok("text"));
    /// assert!(Assert::require_present(None::<&str>).is_err());
    /// ```
    pub fn require_present<T>(value: Option<T>) -> Result<T, InvalidArgumentError> {
        Self::require_supplied(value, None)
    }

    /// Returns the value unless it is the absent marker.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgumentError`] carrying `message`, or
    /// `"value is null"` when no message is given.
    pub fn require_not_missing<T>(
        value: Option<T>,
        message: Option<&str>,
    ) -> Result<T, InvalidArgumentError> {
        value.ok_or_else(|| Self::violation("require_not_missing", message, NULL_MESSAGE))
    }

    /// Returns the value unless it was never supplied.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgumentError`] carrying `message`, or
    /// `"value is not defined"` when no message is given.
    pub fn require_supplied<T>(
        value: Option<T>,
        message: Option<&str>,
    ) -> Result<T, InvalidArgumentError> {
        value.ok_or_else(|| Self::violation("require_supplied", message, NOT_DEFINED_MESSAGE))
    }

    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn violation(check: &str, message: Option<&str>, default: &str) -> InvalidArgumentError {
        let message = message.unwrap_or(default);
        #[cfg(feature = "tracing")]
        tracing::debug!(check, message, "argument validation failed");
        InvalidArgumentError::new(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug, Clone, PartialEq)]
    struct Named {
        name: String,
    }

    #[rstest]
    fn test_new_is_refused() {
        let error = Assert::new().unwrap_err();
        assert_eq!(error, IllegalAccessError::new("Assert is a utility type"));
    }

    #[rstest]
    fn test_require_present_rejects_none() {
        let error = Assert::require_present(None::<i32>).unwrap_err();
        assert_eq!(error.message(), "value is not defined");
    }

    #[rstest]
    fn test_require_present_returns_value() {
        assert_eq!(Assert::require_present(Some(10)), Ok(10));
        assert_eq!(
            Assert::require_present(Some("ForTestPurpose")),
            Ok("ForTestPurpose")
        );
        let named = Named {
            name: "ForTestPurpose".to_string(),
        };
        assert_eq!(Assert::require_present(Some(named.clone())), Ok(named));
    }

    #[rstest]
    #[case(None, "value is null")]
    #[case(Some("There is an error"), "There is an error")]
    fn test_require_not_missing_message(#[case] message: Option<&str>, #[case] expected: &str) {
        let error = Assert::require_not_missing(None::<i32>, message).unwrap_err();
        assert_eq!(error.message(), expected);
    }

    #[rstest]
    #[case(None, "value is not defined")]
    #[case(Some("There is an error"), "There is an error")]
    fn test_require_supplied_message(#[case] message: Option<&str>, #[case] expected: &str) {
        let error = Assert::require_supplied(None::<i32>, message).unwrap_err();
        assert_eq!(error.message(), expected);
    }

    #[rstest]
    fn test_checks_return_value_unchanged() {
        assert_eq!(Assert::require_not_missing(Some(10), None), Ok(10));
        assert_eq!(Assert::require_supplied(Some("text"), Some("unused")), Ok("text"));
    }

    #[rstest]
    fn test_nested_none_is_a_value() {
        assert_eq!(Assert::require_present(Some(None::<i32>)), Ok(None));
    }
}
