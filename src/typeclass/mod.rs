//! Type class traits and their `Optional` instances.
//!
//! - [`TypeConstructor`]: GAT-based emulation of higher-kinded types
//! - [`Functor`]: mapping over the held value
//! - [`Applicative`]: lifting values and combining independent containers
//! - [`Monad`]: sequencing dependent computations
//! - [`Alternative`]: choosing the first present container
//! - [`Foldable`]: treating a container as a zero-or-one element collection
//!
//! The inherent methods of [`Optional`](crate::optional::Optional) take
//! precedence over these traits when both are in scope; the two agree
//! wherever names overlap (`flat_map`, `empty`, `is_empty`).
//!
//! # Examples
//!
//! ```rust
//! use presence::optional::Optional;
//! use presence::typeclass::{Applicative, Functor, Monad};
//!
//! let width = Optional::of(3);
//! let height = Optional::of(4);
//!
//! let area = width.map2(height, |w, h| w * h).fmap(|a| a * 2);
//! assert_eq!(area, Optional::of(24));
//!
//! let missing = width.then(Optional::<i32>::empty());
//! assert!(missing.is_empty());
//! ```

mod alternative;
mod applicative;
mod foldable;
mod functor;
mod higher;
mod monad;

pub use alternative::Alternative;
pub use applicative::Applicative;
pub use foldable::Foldable;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
