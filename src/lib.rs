//! # Church Encodings
//!
//! Arithmetic and list processing built from nothing but unary functions and
//! function application. Booleans, pairs, signed integers and lists are all
//! *encodings*: values that, given the right continuations, select or iterate
//! a result. Host primitives (`i64`, `bool`, `String`, `Vec`) appear only at
//! the [`reify`] boundary.
//!
//! ## Key mappings from the untyped model
//!
//! - Selector functions → tagged variants ([`Boolean`], [`Pair`], [`List`])
//!   with the same selection semantics
//! - Church numeral → [`Magnitude`], a unary chain observed only through
//!   [`Magnitude::apply`]
//! - Signed integer → [`Number`], a (sign, magnitude) pair
//! - Y combinator → [`combinator::fix`], driving every recursion in the crate
//!
//! ## Design principles
//!
//! 1. **Pure functional**: every operation returns a new value; nothing is
//!    mutated in place
//! 2. **Unary by construction**: a magnitude of *n* really does apply its
//!    transform *n* times; no internal operation falls back to host integers
//! 3. **Reification is the only bridge**: converting back to host primitives
//!    happens in [`reify`] and nowhere else
//!
//! ## Example
//!
//! ```
//! use church_encodings::{number, reify};
//!
//! let minus_twelve = number::multiply(&reify::from_integer(-3), &number::four());
//! assert_eq!(reify::to_integer(&minus_twelve), -12);
//! ```

pub mod boolean;
pub mod combinator;
pub mod list;
pub mod magnitude;
pub mod number;
pub mod pair;
pub mod reify;

// Re-export main types for convenience
pub use boolean::Boolean;
pub use list::List;
pub use magnitude::Magnitude;
pub use number::{Division, Number};
pub use pair::Pair;
