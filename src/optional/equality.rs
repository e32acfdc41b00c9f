//! Equality across containers whose value types may differ.
//!
//! The typed `==` on [`Optional`] only compiles when the two value types are
//! comparable. [`Optional::equals`] accepts any container behind
//! `&dyn AnyOptional` and decides at runtime:
//!
//! 1. presence differs: `false`
//! 2. both empty: `true`, whatever their value types
//! 3. value types differ: `false`
//! 4. otherwise the left-hand value's `PartialEq` decides
//!
//! A value type supplies its own equality by implementing `PartialEq` by
//! hand; a derived `PartialEq` is the structural fallback.
//!
//! # Examples
//!
//! ```rust
//! use presence::optional::Optional;
//!
//! assert!(Optional::<i32>::empty().equals(&Optional::<String>::empty()));
//! assert!(Optional::of(1).equals(&Optional::of(1)));
//! assert!(!Optional::of(1).equals(&Optional::of("1")));
//! ```

use std::any::Any;

use super::container::Optional;

/// Object-safe view of an [`Optional`] with its value type erased.
pub trait AnyOptional {
    /// Returns `true` if a value is present.
    fn is_value_present(&self) -> bool;

    /// Returns the held value as `&dyn Any`, if present.
    fn value_as_any(&self) -> Option<&dyn Any>;
}

impl<T: Any> AnyOptional for Optional<T> {
    fn is_value_present(&self) -> bool {
        self.is_present()
    }

    fn value_as_any(&self) -> Option<&dyn Any> {
        self.as_option().map(|value| value as &dyn Any)
    }
}

impl<T> Optional<T>
where
    T: PartialEq + Any,
{
    /// Compares with a container of any value type.
    ///
    /// Only the left-hand value's equality is consulted, so a hand-written
    /// `PartialEq` that is not symmetric gives direction-dependent answers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    ///
    /// #[derive(Debug)]
    /// struct Account {
    ///     id: u32,
    ///     label: &'static str,
    /// }
    ///
    /// impl PartialEq for Account {
    ///     fn eq(&self, other: &Self) -> bool {
    ///         self.id == other.id
    ///     }
    /// }
    ///
    /// let first = Optional::of(Account { id: 1, label: "primary" });
    /// let second = Optional::of(Account { id: 1, label: "renamed" });
    /// assert!(first.equals(&second));
    /// ```
    pub fn equals(&self, other: &dyn AnyOptional) -> bool {
        match (self.as_option(), other.value_as_any()) {
            (None, None) => true,
            (Some(value), Some(other_value)) => other_value
                .downcast_ref::<T>()
                .is_some_and(|other_value| value == other_value),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug, Clone)]
    struct Lenient {
        name: &'static str,
    }

    impl PartialEq for Lenient {
        fn eq(&self, _other: &Self) -> bool {
            true
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Strict {
        name: &'static str,
    }

    #[rstest]
    fn test_empty_containers_of_different_types_are_equal() {
        assert!(Optional::<i32>::empty().equals(&Optional::<String>::empty()));
        assert!(Optional::<Strict>::empty().equals(&Optional::<i32>::empty()));
    }

    #[rstest]
    fn test_presence_mismatch_is_not_equal() {
        assert!(!Optional::<i32>::empty().equals(&Optional::of(10)));
        assert!(!Optional::of(10).equals(&Optional::<i32>::empty()));
        assert!(!Optional::of("ForTestPurpose").equals(&Optional::<i32>::empty()));
    }

    #[rstest]
    fn test_different_value_types_are_not_equal() {
        assert!(!Optional::of(10).equals(&Optional::of("10")));
        assert!(!Optional::of("10").equals(&Optional::of(10)));
        assert!(!Optional::of(10_i32).equals(&Optional::of(10_i64)));
    }

    #[rstest]
    #[case(10, 10, true)]
    #[case(10, 20, false)]
    fn test_same_type_delegates_to_value(
        #[case] left: i32,
        #[case] right: i32,
        #[case] expected: bool,
    ) {
        assert_eq!(Optional::of(left).equals(&Optional::of(right)), expected);
    }

    #[rstest]
    fn test_left_hand_equality_decides() {
        let lenient = Optional::of(Lenient { name: "first" });
        let other = Optional::of(Lenient { name: "second" });
        assert_ne!(
            lenient.get().map(|value| value.name),
            other.get().map(|value| value.name)
        );
        assert!(lenient.equals(&other));
        assert!(other.equals(&lenient));
    }

    #[rstest]
    fn test_structural_fallback() {
        let first = Optional::of(Strict { name: "first" });
        let same = Optional::of(Strict { name: "first" });
        let second = Optional::of(Strict { name: "second" });
        assert!(first.equals(&same));
        assert!(!first.equals(&second));
    }

    #[rstest]
    fn test_usable_as_trait_object() {
        let first = Optional::of(1);
        let second = Optional::<String>::empty();
        let third = Optional::of("text");
        let containers: [&dyn AnyOptional; 3] = [&first, &second, &third];

        let probe = Optional::of(1);
        let matches = containers
            .iter()
            .filter(|container| probe.equals(**container))
            .count();
        assert_eq!(matches, 1);
    }
}
