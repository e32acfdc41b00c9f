//! The `Optional<T>` container.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::assert::Assert;
use crate::error::InvalidArgumentError;

/// A container which may or may not hold a value.
///
/// If a value is present, [`is_present`](Optional::is_present) returns `true`.
/// If no value is present the container is *empty*.
///
/// Every operation that "changes" the value returns a new container; the
/// slot of an existing container is never replaced in place, except through
/// the explicit `&mut self` accessors ([`get_mut`](Optional::get_mut),
/// [`if_present_mut`](Optional::if_present_mut), [`take`](Optional::take)).
///
/// # Examples
///
/// ```rust
/// use presence::optional::Optional;
///
/// let value = Optional::of(10)
///     .filter(|n| *n > 5)
///     .map(|n| n * 2);
/// assert_eq!(value, Optional::of(20));
///
/// let missing: Optional<i32> = Optional::of_nullable(None);
/// assert_eq!(missing.or_else(42), 42);
/// ```
#[derive(Clone, Copy, PartialOrd, Ord)]
pub struct Optional<T> {
    slot: Option<T>,
}

impl<T> Optional<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Returns an empty container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    ///
    /// let empty: Optional<i32> = Optional::empty();
    /// assert!(!empty.is_present());
    /// ```
    #[inline]
    pub const fn empty() -> Self {
        Self { slot: None }
    }

    /// Returns a container holding `value`.
    ///
    /// A `T` can never be the absent marker, so this cannot fail. Use
    /// [`try_of`](Optional::try_of) when the value arrives as an `Option`
    /// that is required to be `Some`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    ///
    /// let value = Optional::of("text");
    /// assert_eq!(value.get(), Ok(&"text"));
    /// ```
    #[inline]
    pub const fn of(value: T) -> Self {
        Self { slot: Some(value) }
    }

    /// Returns a container holding the value, which must be present.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgumentError`] if `value` is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    ///
    /// assert_eq!(Optional::try_of(Some(1)), Ok(Optional::of(1)));
    /// assert!(Optional::<i32>::try_of(None).is_err());
    /// ```
    pub fn try_of(value: Option<T>) -> Result<Self, InvalidArgumentError> {
        Assert::require_not_missing(value, None).map(Self::of)
    }

    /// Returns a container holding the value if it is present, otherwise an
    /// empty container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    ///
    /// assert_eq!(Optional::of_nullable(Some(3)), Optional::of(3));
    /// assert_eq!(Optional::<i32>::of_nullable(None), Optional::empty());
    /// ```
    #[inline]
    pub const fn of_nullable(value: Option<T>) -> Self {
        Self { slot: value }
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_present(&self) -> bool {
        self.slot.is_some()
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.slot.is_none()
    }

    /// Returns a reference to the held value.
    ///
    /// Prefer [`or_else`](Optional::or_else),
    /// [`or_else_get`](Optional::or_else_get) or
    /// [`or_else_throw`](Optional::or_else_throw), which force the caller to
    /// decide what happens when the container is empty.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgumentError`] (`"value is null"`) if the container
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    ///
    /// assert_eq!(Optional::of(10).get(), Ok(&10));
    /// assert!(Optional::<i32>::empty().get().is_err());
    /// ```
    pub fn get(&self) -> Result<&T, InvalidArgumentError> {
        Assert::require_not_missing(self.slot.as_ref(), None)
    }

    /// Returns a mutable reference to the held value.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgumentError`] if the container is empty.
    pub fn get_mut(&mut self) -> Result<&mut T, InvalidArgumentError> {
        Assert::require_not_missing(self.slot.as_mut(), None)
    }

    /// Consumes the container and returns the held value.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgumentError`] if the container is empty.
    pub fn into_value(self) -> Result<T, InvalidArgumentError> {
        Assert::require_not_missing(self.slot, None)
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Keeps the value only if it matches `predicate`.
    ///
    /// The predicate is not invoked on an empty container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    ///
    /// assert_eq!(Optional::of(10).filter(|x| *x > 5), Optional::of(10));
    /// assert_eq!(Optional::of(3).filter(|x| *x > 5), Optional::empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        Self {
            slot: self.slot.filter(predicate),
        }
    }

    /// Applies `mapper` to the held value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    ///
    /// let length = Optional::of("hello").map(str::len);
    /// assert_eq!(length, Optional::of(5));
    /// ```
    #[inline]
    #[must_use]
    pub fn map<U, F>(self, mapper: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        Optional {
            slot: self.slot.map(mapper),
        }
    }

    /// Applies `mapper` to the held value; a mapper with no result yields an
    /// empty container rather than a failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    ///
    /// let parsed = Optional::of("42").map_nullable(|s| s.parse::<i32>().ok());
    /// assert_eq!(parsed, Optional::of(42));
    ///
    /// let parsed = Optional::of("nope").map_nullable(|s| s.parse::<i32>().ok());
    /// assert_eq!(parsed, Optional::empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn map_nullable<U, F>(self, mapper: F) -> Optional<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        Optional::of_nullable(self.slot.and_then(mapper))
    }

    /// Returns the container produced by `mapper`, without wrapping it again.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    ///
    /// let half = |n: i32| if n % 2 == 0 { Optional::of(n / 2) } else { Optional::empty() };
    /// assert_eq!(Optional::of(10).flat_map(half), Optional::of(5));
    /// assert_eq!(Optional::of(3).flat_map(half), Optional::empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn flat_map<U, F>(self, mapper: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self.slot {
            Some(value) => mapper(value),
            None => Optional::empty(),
        }
    }

    /// Returns `self` if a value is present, otherwise the container produced
    /// by `supplier`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    ///
    /// assert_eq!(Optional::of(1).or(|| Optional::of(2)), Optional::of(1));
    /// assert_eq!(Optional::empty().or(|| Optional::of(2)), Optional::of(2));
    /// ```
    #[inline]
    #[must_use]
    pub fn or<S>(self, supplier: S) -> Self
    where
        S: FnOnce() -> Self,
    {
        if self.is_present() { self } else { supplier() }
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the held value, or `other` if the container is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    ///
    /// assert_eq!(Optional::of(7).or_else(42), 7);
    /// assert_eq!(Optional::of_nullable(None).or_else(42), 42);
    /// ```
    #[inline]
    pub fn or_else(self, other: T) -> T {
        self.slot.unwrap_or(other)
    }

    /// Returns the held value, or the result of `supplier` if the container
    /// is empty.
    #[inline]
    pub fn or_else_get<S>(self, supplier: S) -> T
    where
        S: FnOnce() -> T,
    {
        self.slot.unwrap_or_else(supplier)
    }

    /// Returns the held value, or the error produced by `supplier` if the
    /// container is empty.
    ///
    /// The supplier's error is returned exactly as constructed.
    ///
    /// # Errors
    ///
    /// Returns the supplier's error when the container is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    ///
    /// let result: Result<i32, String> = Optional::empty().or_else_throw(|| "missing".to_string());
    /// assert_eq!(result, Err("missing".to_string()));
    /// ```
    #[inline]
    pub fn or_else_throw<E, S>(self, supplier: S) -> Result<T, E>
    where
        S: FnOnce() -> E,
    {
        self.slot.ok_or_else(supplier)
    }

    /// Returns the held value, or `error` if the container is empty.
    ///
    /// # Errors
    ///
    /// Returns `error` when the container is empty.
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Result<T, E> {
        self.slot.ok_or(error)
    }

    // =========================================================================
    // Side Effects
    // =========================================================================

    /// Invokes `action` with the held value, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    /// use std::cell::Cell;
    ///
    /// let calls = Cell::new(0);
    /// Optional::of(1).if_present(|_| calls.set(calls.get() + 1));
    /// Optional::<i32>::empty().if_present(|_| calls.set(calls.get() + 1));
    /// assert_eq!(calls.get(), 1);
    /// ```
    #[inline]
    pub fn if_present<A>(&self, action: A)
    where
        A: FnOnce(&T),
    {
        if let Some(value) = &self.slot {
            action(value);
        }
    }

    /// Invokes `action` with a mutable reference to the held value, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    ///
    /// let mut name = Optional::of(String::from("before"));
    /// name.if_present_mut(|value| *value = String::from("after"));
    /// assert_eq!(name.get().map(String::as_str), Ok("after"));
    /// ```
    #[inline]
    pub fn if_present_mut<A>(&mut self, action: A)
    where
        A: FnOnce(&mut T),
    {
        if let Some(value) = &mut self.slot {
            action(value);
        }
    }

    /// Invokes `action` with the held value, or `empty_action` if the
    /// container is empty. Exactly one of the two runs.
    #[inline]
    pub fn if_present_or_else<A, E>(&self, action: A, empty_action: E)
    where
        A: FnOnce(&T),
        E: FnOnce(),
    {
        match &self.slot {
            Some(value) => action(value),
            None => empty_action(),
        }
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    /// Converts from `&Optional<T>` to `Optional<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        Optional {
            slot: self.slot.as_ref(),
        }
    }

    /// Converts from `&mut Optional<T>` to `Optional<&mut T>`.
    #[inline]
    pub const fn as_mut(&mut self) -> Optional<&mut T> {
        Optional {
            slot: self.slot.as_mut(),
        }
    }

    /// Returns the slot as an `Option`.
    #[inline]
    pub const fn as_option(&self) -> Option<&T> {
        self.slot.as_ref()
    }

    /// Consumes the container, returning the slot as an `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.slot
    }

    /// Takes the value out, leaving an empty container in its place.
    #[inline]
    #[must_use]
    pub const fn take(&mut self) -> Self {
        Self {
            slot: self.slot.take(),
        }
    }

    /// Returns an iterator over the held value (zero or one item).
    #[inline]
    pub fn iter(&self) -> std::option::Iter<'_, T> {
        self.slot.iter()
    }
}

// =============================================================================
// Equality
// =============================================================================

impl<T: PartialEq> PartialEq for Optional<T> {
    /// Two empty containers are equal; a present and an empty container are
    /// not; otherwise the held values decide.
    fn eq(&self, other: &Self) -> bool {
        match (&self.slot, &other.slot) {
            (Some(left), Some(right)) => left == right,
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: Eq> Eq for Optional<T> {}

impl<T: Hash> Hash for Optional<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.slot.hash(state);
    }
}

// =============================================================================
// Formatting
// =============================================================================

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.slot {
            Some(value) => write!(formatter, "Optional[{value}]"),
            None => formatter.write_str("Optional[empty]"),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.slot {
            Some(value) => write!(formatter, "Optional[{value:?}]"),
            None => formatter.write_str("Optional[empty]"),
        }
    }
}

// =============================================================================
// Standard Conversions
// =============================================================================

impl<T> Default for Optional<T> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Option<T>> for Optional<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self::of_nullable(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(optional: Optional<T>) -> Self {
        optional.slot
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.slot.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = std::option::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.slot.iter()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T> serde::Serialize for Optional<T>
where
    T: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.slot.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Optional<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Self::of_nullable)
    }
}

static_assertions::assert_eq_size!(Optional<Box<u8>>, Option<Box<u8>>);
static_assertions::assert_impl_all!(Optional<i32>: Send, Sync, Copy, Eq, Hash);
static_assertions::assert_not_impl_any!(Optional<std::rc::Rc<i32>>: Send, Sync);
