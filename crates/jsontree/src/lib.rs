//! A strict, one-shot JSON parser and an owned tree value type.
//!
//! The parser accepts a complete UTF-8 text buffer holding exactly one JSON
//! value ([RFC 8259] grammar, no extensions) and builds a [`Value`] tree.
//! Rejections are reported through the fine-grained [`ParseError`] taxonomy
//! rather than a single "parse failed" code. The [`Value`] tree stringifies
//! back to canonical (minimal, whitespace-free) JSON text via [`Display`],
//! and that text re-parses to an equal tree.
//!
//! ```rust
//! use jsontree::{parse, ParseError};
//!
//! let value = parse(r#"{"name": "gw1", "ports": [80, 443]}"#)?;
//! assert_eq!(value.to_string(), r#"{"name":"gw1","ports":[80,443]}"#);
//!
//! assert_eq!(parse("[1,]"), Err(ParseError::InvalidValue));
//! assert_eq!(parse("1e309"), Err(ParseError::NumberTooBig));
//! # Ok::<(), jsontree::ParseError>(())
//! ```
//!
//! [RFC 8259]: https://datatracker.ietf.org/doc/html/rfc8259
//! [`Display`]: core::fmt::Display

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod map;
mod number;
mod value;

mod error;
mod parser;

#[cfg(any(test, feature = "serde"))]
mod serde_impls;

#[cfg(test)]
mod tests;

pub use error::ParseError;
pub use map::{Map, MapIter};
pub use parser::{parse, parse_bytes};
pub use value::{Array, Value};
