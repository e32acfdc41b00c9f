//! Alternative type class - choice between computations.
//!
//! `Alternative` adds an identity element (`empty`) and a choice operator
//! (`alt`) to [`Applicative`]. For `Optional`, `alt` keeps the first present
//! container, which is the eager counterpart of
//! [`Optional::or`](crate::optional::Optional::or).
//!
//! # Laws
//!
//! ```text
//! empty().alt(x) == x
//! x.alt(empty()) == x
//! a.alt(b).alt(c) == a.alt(b.alt(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use presence::optional::Optional;
//! use presence::typeclass::Alternative;
//!
//! let chosen = Optional::empty().alt(Optional::of(2));
//! assert_eq!(chosen, Optional::of(2));
//!
//! let first = Optional::choice(vec![Optional::empty(), Optional::of(1), Optional::of(2)]);
//! assert_eq!(first, Optional::of(1));
//! ```

use super::applicative::Applicative;
use crate::optional::Optional;

/// An applicative with a notion of failure and choice.
pub trait Alternative: Applicative {
    /// The identity for [`alt`](Alternative::alt).
    fn empty<A>() -> Self::WithType<A>;

    /// Returns `self` unless it represents failure, otherwise `alternative`.
    #[must_use]
    fn alt(self, alternative: Self) -> Self;

    /// Succeeds with `()` when `condition` holds, fails otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    /// use presence::typeclass::{Alternative, Monad};
    ///
    /// let even = |n: i32| <Optional<()>>::guard(n % 2 == 0).then(Optional::of(n));
    /// assert_eq!(even(4), Optional::of(4));
    /// assert_eq!(even(3), Optional::empty());
    /// ```
    #[inline]
    #[must_use]
    fn guard(condition: bool) -> Self::WithType<()>
    where
        Self: Sized,
    {
        if condition {
            Self::pure(())
        } else {
            Self::empty()
        }
    }

    /// Returns the first alternative that succeeds, or `empty`.
    fn choice<I>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized;
}

impl<A> Alternative for Optional<A> {
    #[inline]
    fn empty<B>() -> Optional<B> {
        Optional::empty()
    }

    #[inline]
    fn alt(self, alternative: Self) -> Self {
        self.or(|| alternative)
    }

    #[inline]
    fn choice<I>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        alternatives
            .into_iter()
            .find(|candidate| candidate.is_present())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Optional::empty(), Optional::of(1), Optional::of(1))]
    #[case(Optional::of(1), Optional::empty(), Optional::of(1))]
    #[case(Optional::of(1), Optional::of(2), Optional::of(1))]
    #[case(Optional::empty(), Optional::empty(), Optional::empty())]
    fn optional_alt(
        #[case] first: Optional<i32>,
        #[case] second: Optional<i32>,
        #[case] expected: Optional<i32>,
    ) {
        assert_eq!(first.alt(second), expected);
    }

    #[rstest]
    fn optional_empty_has_requested_type() {
        let empty: Optional<String> = <Optional<i32> as Alternative>::empty();
        assert!(empty.is_empty());
    }

    #[rstest]
    #[case(true, Optional::of(()))]
    #[case(false, Optional::empty())]
    fn optional_guard(#[case] condition: bool, #[case] expected: Optional<()>) {
        assert_eq!(<Optional<()>>::guard(condition), expected);
    }

    #[rstest]
    fn optional_choice_all_empty() {
        let alternatives: Vec<Optional<i32>> = vec![Optional::empty(), Optional::empty()];
        assert_eq!(Optional::choice(alternatives), Optional::empty());
    }

    #[rstest]
    fn optional_choice_empty_iterator() {
        assert_eq!(Optional::<i32>::choice(Vec::new()), Optional::empty());
    }
}
