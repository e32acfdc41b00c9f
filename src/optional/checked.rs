//! Combinators whose callbacks may be missing at runtime.
//!
//! Callbacks that come from a registry, a plugin table or configuration are
//! naturally `Option<F>`. These methods accept such callbacks and check them
//! with [`Assert`] only on the branch that would invoke them: a missing
//! predicate on an empty container is fine, a missing supplier on a present
//! one is fine.
//!
//! Callbacks whose result is itself mandatory (the flat-map mapper and the
//! `or` supplier) return `Option<Optional<_>>`, and a `None` result is
//! rejected as well.
//!
//! # Examples
//!
//! ```rust
//! use presence::optional::Optional;
//!
//! type Predicate = fn(&i32) -> bool;
//!
//! let registered: Option<Predicate> = None;
//!
//! assert_eq!(Optional::<i32>::empty().try_filter(registered), Ok(Optional::empty()));
//! assert!(Optional::of(10).try_filter(registered).is_err());
//! ```

use super::container::Optional;
use crate::assert::Assert;
use crate::error::{InvalidArgumentError, OrElseThrowError};

impl<T> Optional<T> {
    /// [`filter`](Optional::filter) with a predicate that may be missing.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgumentError`] if a value is present and `predicate`
    /// is `None`.
    pub fn try_filter<P>(self, predicate: Option<P>) -> Result<Self, InvalidArgumentError>
    where
        P: FnOnce(&T) -> bool,
    {
        if self.is_empty() {
            return Ok(Self::empty());
        }
        let predicate = Assert::require_present(predicate)?;
        Ok(self.filter(predicate))
    }

    /// [`map_nullable`](Optional::map_nullable) with a mapper that may be
    /// missing. A mapper returning `None` yields an empty container.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgumentError`] if a value is present and `mapper` is
    /// `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    ///
    /// let mapper = Some(|n: i32| n.checked_mul(2));
    /// assert_eq!(Optional::of(21).try_map(mapper), Ok(Optional::of(42)));
    /// assert_eq!(Optional::of(i32::MAX).try_map(mapper), Ok(Optional::empty()));
    /// ```
    pub fn try_map<U, F>(self, mapper: Option<F>) -> Result<Optional<U>, InvalidArgumentError>
    where
        F: FnOnce(T) -> Option<U>,
    {
        if self.is_empty() {
            return Ok(Optional::empty());
        }
        let mapper = Assert::require_present(mapper)?;
        Ok(self.map_nullable(mapper))
    }

    /// [`flat_map`](Optional::flat_map) with a mapper that may be missing and
    /// whose result is required.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgumentError`] if a value is present and either
    /// `mapper` is `None` or the mapper returns `None`.
    pub fn try_flat_map<U, F>(
        self,
        mapper: Option<F>,
    ) -> Result<Optional<U>, InvalidArgumentError>
    where
        F: FnOnce(T) -> Option<Optional<U>>,
    {
        let Some(value) = self.into_option() else {
            return Ok(Optional::empty());
        };
        let mapper = Assert::require_present(mapper)?;
        Assert::require_not_missing(mapper(value), None)
    }

    /// [`or`](Optional::or) with a supplier that may be missing and whose
    /// result is required.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgumentError`] if the container is empty and either
    /// `supplier` is `None` or the supplier returns `None`.
    pub fn try_or<S>(self, supplier: Option<S>) -> Result<Self, InvalidArgumentError>
    where
        S: FnOnce() -> Option<Self>,
    {
        if self.is_present() {
            return Ok(self);
        }
        let supplier = Assert::require_present(supplier)?;
        Assert::require_not_missing(supplier(), None)
    }

    /// [`or_else_get`](Optional::or_else_get) with a supplier that may be
    /// missing.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgumentError`] if the container is empty and
    /// `supplier` is `None`.
    pub fn try_or_else_get<S>(self, supplier: Option<S>) -> Result<T, InvalidArgumentError>
    where
        S: FnOnce() -> T,
    {
        match self.into_option() {
            Some(value) => Ok(value),
            None => Assert::require_present(supplier).map(|supplier| supplier()),
        }
    }

    /// [`or_else_throw`](Optional::or_else_throw) with a supplier that may be
    /// missing.
    ///
    /// # Errors
    ///
    /// If the container is empty, returns [`OrElseThrowError::Supplied`] with
    /// the supplier's error, or [`OrElseThrowError::InvalidArgument`] if
    /// `supplier` is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::error::OrElseThrowError;
    /// use presence::optional::Optional;
    ///
    /// let result = Optional::<i32>::empty().try_or_else_throw(Some(|| "not found"));
    /// assert_eq!(result, Err(OrElseThrowError::Supplied("not found")));
    /// ```
    pub fn try_or_else_throw<E, S>(self, supplier: Option<S>) -> Result<T, OrElseThrowError<E>>
    where
        S: FnOnce() -> E,
    {
        match self.into_option() {
            Some(value) => Ok(value),
            None => {
                let supplier = Assert::require_present(supplier)?;
                Err(OrElseThrowError::Supplied(supplier()))
            }
        }
    }

    /// [`if_present`](Optional::if_present) with an action that may be
    /// missing.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgumentError`] if a value is present and `action` is
    /// `None`.
    pub fn try_if_present<A>(&self, action: Option<A>) -> Result<(), InvalidArgumentError>
    where
        A: FnOnce(&T),
    {
        if let Some(value) = self.as_option() {
            let action = Assert::require_present(action)?;
            action(value);
        }
        Ok(())
    }

    /// [`if_present_or_else`](Optional::if_present_or_else) with actions that
    /// may be missing. Only the branch that runs is required.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgumentError`] if the required action is `None`.
    pub fn try_if_present_or_else<A, E>(
        &self,
        action: Option<A>,
        empty_action: Option<E>,
    ) -> Result<(), InvalidArgumentError>
    where
        A: FnOnce(&T),
        E: FnOnce(),
    {
        match self.as_option() {
            Some(value) => Assert::require_present(action).map(|action| action(value)),
            None => Assert::require_present(empty_action).map(|empty_action| empty_action()),
        }
    }
}
