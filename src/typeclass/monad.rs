//! Monad type class - sequencing computations within a context.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use presence::optional::Optional;
//! use presence::typeclass::Monad;
//!
//! fn parse_positive(text: &str) -> Optional<i32> {
//!     Optional::of_nullable(text.parse::<i32>().ok()).filter(|n| *n > 0)
//! }
//!
//! let result = Monad::flat_map(Optional::of("42"), parse_positive)
//!     .and_then(|n| Optional::of(n * 2));
//! assert_eq!(result, Optional::of(84));
//! ```

use super::applicative::Applicative;
use crate::optional::Optional;

/// An applicative whose next step may depend on the previous step's value.
pub trait Monad: Applicative {
    /// Sequences a computation that produces a new context.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map`.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two contexts, discarding the first value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    /// use presence::typeclass::Monad;
    ///
    /// assert_eq!(Optional::of(1).then(Optional::of("next")), Optional::of("next"));
    /// assert_eq!(Optional::<i32>::empty().then(Optional::of("next")), Optional::empty());
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<A> Monad for Optional<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(A) -> Optional<B>,
    {
        Self::flat_map(self, function)
    }
}
