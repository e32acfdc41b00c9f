//! Applicative type class - combining independent computations.
//!
//! `Applicative` extends [`Functor`] with `pure`, which lifts a value into
//! the context, and `map2`, which combines two contexts. For `Optional`, a
//! combination is present only when every input is present.
//!
//! # Laws
//!
//! ```text
//! pure(a).map2(pure(b), f) == pure(f(a, b))
//! fa.map2(pure(()), |a, _| a) == fa
//! ```
//!
//! # Examples
//!
//! ```rust
//! use presence::optional::Optional;
//! use presence::typeclass::Applicative;
//!
//! let sum = Optional::of(1).map2(Optional::of(2), |x, y| x + y);
//! assert_eq!(sum, Optional::of(3));
//!
//! let missing = Optional::of(1).map2(Optional::<i32>::empty(), |x, y| x + y);
//! assert_eq!(missing, Optional::empty());
//! ```

use super::functor::Functor;
use crate::optional::Optional;

/// A functor that can lift plain values and combine independent contexts.
pub trait Applicative: Functor {
    /// Lifts a value into the context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    /// use presence::typeclass::Applicative;
    ///
    /// let lifted: Optional<i32> = <Optional<()>>::pure(42);
    /// assert_eq!(lifted, Optional::of(42));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two contexts with a binary function.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three contexts with a ternary function.
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Pairs the values of two contexts.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    /// use presence::typeclass::Applicative;
    ///
    /// let pair = Optional::of(1).product(Optional::of("one"));
    /// assert_eq!(pair, Optional::of((1, "one")));
    /// ```
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Applies a function held in a context to a value held in another.
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

impl<A> Applicative for Optional<A> {
    #[inline]
    fn pure<B>(value: B) -> Optional<B> {
        Optional::of(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Optional<B>, function: F) -> Optional<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self.into_option(), other.into_option()) {
            (Some(a), Some(b)) => Optional::of(function(a, b)),
            _ => Optional::empty(),
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Optional<B>, third: Optional<C>, function: F) -> Optional<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self.into_option(), second.into_option(), third.into_option()) {
            (Some(a), Some(b), Some(c)) => Optional::of(function(a, b, c)),
            _ => Optional::empty(),
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Optional<B>) -> Optional<Output>
    where
        A: FnOnce(B) -> Output,
    {
        self.map2(other, |function, b| function(b))
    }
}
