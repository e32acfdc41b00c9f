//! The `Optional` container.
//!
//! [`Optional<T>`] holds either exactly one value of type `T` or nothing.
//! It offers:
//!
//! - construction: [`Optional::empty`], [`Optional::of`],
//!   [`Optional::try_of`], [`Optional::of_nullable`]
//! - inspection and extraction: [`Optional::is_present`], [`Optional::get`],
//!   [`Optional::or_else`], [`Optional::or_else_get`],
//!   [`Optional::or_else_throw`]
//! - transformation: [`Optional::filter`], [`Optional::map`],
//!   [`Optional::flat_map`], [`Optional::or`]
//! - side effects: [`Optional::if_present`],
//!   [`Optional::if_present_or_else`]
//! - equality across value types: [`Optional::equals`] with [`AnyOptional`]
//! - `try_*` forms whose callbacks may be missing at runtime
//!
//! # Examples
//!
//! ```rust
//! use presence::optional::Optional;
//!
//! fn find_user(id: u32) -> Optional<String> {
//!     if id == 1 {
//!         Optional::of("alice".to_string())
//!     } else {
//!         Optional::empty()
//!     }
//! }
//!
//! let greeting = find_user(1)
//!     .map(|name| format!("hello, {name}"))
//!     .or_else_get(|| "who are you?".to_string());
//! assert_eq!(greeting, "hello, alice");
//!
//! assert_eq!(find_user(2).to_string(), "Optional[empty]");
//! ```

mod checked;
mod container;
mod equality;

pub use container::Optional;
pub use equality::AnyOptional;
