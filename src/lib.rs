//! # presence
//!
//! An `Optional` container for Rust: a value that is either present or
//! empty, with checked construction, monadic combinators and type class
//! instances.
//!
//! ## Overview
//!
//! - **Optional**: [`Optional<T>`](optional::Optional) with `of`,
//!   `of_nullable`, `filter`, `map`, `flat_map`, `or`, `or_else*` and
//!   `if_present*`
//! - **Validation**: [`Assert`](assert::Assert) checks that turn an absent
//!   argument into an [`InvalidArgumentError`](error::InvalidArgumentError)
//! - **Errors**: the two failure kinds, unified by
//!   [`ContractError`](error::ContractError)
//! - **Type Classes**: Functor, Applicative, Monad, Alternative and Foldable
//!   instances for `Optional`
//!
//! ## Feature Flags
//!
//! - `typeclass` (default): type class traits and their `Optional` instances
//! - `serde`: `Serialize`/`Deserialize` for `Optional` using the `Option` shape
//! - `tracing`: emit a `debug` event for every failed argument check
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use presence::prelude::*;
//!
//! let value = Optional::of(10).filter(|x| *x > 5);
//! assert_eq!(value.to_string(), "Optional[10]");
//!
//! let missing = Optional::of(3).filter(|x| *x > 5);
//! assert_eq!(missing.or_else(42), 42);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use presence::prelude::*;
/// ```
pub mod prelude {
    pub use crate::assert::Assert;
    pub use crate::error::{ContractError, ContractErrorKind, IllegalAccessError, InvalidArgumentError};
    pub use crate::optional::{AnyOptional, Optional};

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;
}

pub mod assert;
pub mod error;
pub mod optional;

#[cfg(feature = "typeclass")]
pub mod typeclass;
