//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Optional<_>` as a type constructor directly.
//! [`TypeConstructor`] records the element type (`Inner`) and how to rebuild
//! the same container around another element type (`WithType<B>`), which is
//! all the other type classes in this module need.
//!
//! # Example
//!
//! ```rust
//! use presence::optional::Optional;
//! use presence::typeclass::TypeConstructor;
//!
//! fn reset<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let result: Optional<String> = reset(Optional::of(42));
//! assert!(result.is_empty());
//! ```

use crate::optional::Optional;

/// A type constructor with one element type parameter.
pub trait TypeConstructor {
    /// The element type currently held.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Optional<A> {
    type Inner = A;
    type WithType<B> = Optional<B>;
}
