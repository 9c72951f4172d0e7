//! Strategies for deriving storage field names from property names.
//!
//! The main entry point is [`abbreviate()`], which shortens a camel-case property
//! name to the first letter of each of its words:
//!
//! ```
//! assert_eq!(field_naming::abbreviate("fooBar"), "fb");
//! assert_eq!(field_naming::abbreviate("fooBARFooBar"), "fbfb");
//! ```
//!
//! A mapping layer that lets its users choose how properties are named should take
//! a [`FieldNamingStrategy`]. The built-in strategies are
//!
//! * [`PropertyNameStrategy`], which keeps the property name as is.
//! * [`SnakeCaseStrategy`], which converts `fooBar` to `foo_bar`.
//! * [`CamelCaseSplittingStrategy`], which joins lowercased words with a custom delimiter.
//! * [`CamelCaseAbbreviatingStrategy`], which uses [`abbreviate()`].
//!
//! [`NamingStrategy`] selects one of these, and can be parsed from a string.
//!
//! ```
//! use field_naming::{FieldNamingStrategy, NamingStrategy};
//!
//! fn main() -> miette::Result<()> {
//!     let strategy: NamingStrategy = "snake-case".parse()?;
//!     assert_eq!(strategy.field_name(&"createdAt")?, "created_at");
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Word boundaries
//!
//! Property names are split with [`split_camel_case()`]. A word starts at an uppercase
//! letter that follows a non-uppercase character, or that is followed by a lowercase
//! letter. This keeps acronyms together, so `parseURLValue` splits into `parse`, `URL`
//! and `Value`.
//!
//! Note that abbreviating is not idempotent: `abbreviate("fooBar")` is `"fb"`, which
//! contains a single word and so abbreviates again to `"f"`.
#![warn(missing_debug_implementations, missing_docs)]
#![deny(unsafe_code)]
#![doc(html_root_url = "https://docs.rs/field-naming/0.1.0/")]

mod case;
mod error;
mod strategy;

pub use crate::case::{abbreviate, split_camel_case, Words};
pub use crate::error::Error;
pub use crate::strategy::{
    CamelCaseAbbreviatingStrategy, CamelCaseSplittingStrategy, FieldNamingStrategy,
    NamingStrategy, Property, PropertyNameStrategy, SnakeCaseStrategy,
};
