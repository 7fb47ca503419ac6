//! Build JSON documents by assigning values to JSON Pointer paths.
//!
//! A chain starts with [`Builder::new`] and alternates between selecting a path
//! and assigning a value, ending with [`Selecting::build`]. Intermediate
//! objects and arrays are created as the paths require:
//!
//! ```
//! use jsonchain::{BuildError, Builder};
//!
//! # fn main() -> Result<(), BuildError> {
//! let doc = Builder::new()
//!     .at("/A")?.set_null()
//!     .at("/I")?.set_list([6, 7])?
//!     .at("/M")?.set(Builder::new().at("/N")?.set(14).build())
//!     .build();
//!
//! assert_eq!(doc.to_string(), r#"{"A":null,"I":[6,7],"M":{"N":14}}"#);
//! # Ok(())
//! # }
//! ```
//!
//! Paths and formatted strings are rendered into a fixed-size buffer
//! ([`DEFAULT_CAPACITY`] bytes unless the builder is declared as
//! `Selecting::<N>`); text that does not fit is an error, never truncated.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod buffer;
mod builder;
mod document;
mod error;
mod mutation;
mod path;
mod translate;
mod value;

#[cfg(test)]
mod tests;

pub use buffer::{DEFAULT_CAPACITY, FixedBuffer, check_capacity, with_formatted};
pub use builder::{Assigning, Builder, Selecting};
pub use document::Document;
pub use error::{BuildError, BuildResult, PathSyntaxError};
pub use mutation::set_at;
pub use path::{APPEND_TOKEN, ContainerKind, Path, Token};
pub use translate::ToValue;
pub use value::{Array, Map, Number, Value};
