//! The two-state builder.
//!
//! A chain alternates between [`Selecting`] (pick a path) and [`Assigning`]
//! (write a value there). Every transition takes the current state by value,
//! so the document always has exactly one owner and the methods of a spent
//! state can no longer be called.
//!
//! ```
//! use jsonchain::{BuildError, Builder};
//!
//! # fn main() -> Result<(), BuildError> {
//! let doc = Builder::new()
//!     .at("/name")?.set("jsonchain")
//!     .at_fmt(format_args!("/v{}", 1))?.set_fmt(format_args!("{}.{}", 0, 1))?
//!     .at("/tags")?.set_list(["a", "b"])?
//!     .build();
//!
//! assert_eq!(doc.to_string(), r#"{"name":"jsonchain","tags":["a","b"],"v1":"0.1"}"#);
//! # Ok(())
//! # }
//! ```

use alloc::string::ToString;
use core::fmt;

use tracing::trace;

use crate::{
    buffer::{DEFAULT_CAPACITY, check_capacity, with_formatted},
    document::Document,
    error::BuildResult,
    mutation::set_at,
    path::Path,
    translate::ToValue,
    value::Value,
};

/// Builder with the default formatting capacity.
pub type Builder = Selecting<DEFAULT_CAPACITY>;

/// Path-selection state: the next call must choose where to write.
///
/// `CAP` is the capacity in bytes of the buffer that every path and formatted
/// string is rendered into; text of `CAP` bytes or more is rejected.
#[derive(Debug, Default)]
#[must_use = "a builder does nothing until a path is selected or it is built"]
pub struct Selecting<const CAP: usize = DEFAULT_CAPACITY> {
    doc: Document,
}

/// Value-assignment state: a path is bound and the next call writes a value.
#[derive(Debug)]
#[must_use = "a selected path must be assigned a value"]
pub struct Assigning<const CAP: usize = DEFAULT_CAPACITY> {
    doc: Document,
    path: Path,
}

impl<const CAP: usize> Selecting<CAP> {
    /// Starts a chain over an empty document.
    pub fn new() -> Self {
        Self {
            doc: Document::new(),
        }
    }

    /// Binds a JSON Pointer path.
    ///
    /// # Errors
    ///
    /// [`BuildError::BufferOverrun`](crate::BuildError::BufferOverrun) when the
    /// path needs `CAP` bytes or more, and
    /// [`BuildError::InvalidPath`](crate::BuildError::InvalidPath) when it is
    /// not a well-formed pointer.
    pub fn at(self, path: &str) -> BuildResult<Assigning<CAP>> {
        let path = Path::parse(check_capacity::<CAP>(path)?)?;
        Ok(self.bind(path))
    }

    /// Renders a path from a format template, then binds it like [`Selecting::at`].
    ///
    /// # Errors
    ///
    /// [`BuildError::InvalidFormat`](crate::BuildError::InvalidFormat) when an
    /// argument fails to format, plus the errors of [`Selecting::at`].
    pub fn at_fmt(self, args: fmt::Arguments<'_>) -> BuildResult<Assigning<CAP>> {
        let path = with_formatted::<CAP, _>(args, Path::parse)?;
        Ok(self.bind(path))
    }

    /// Ends the chain and returns the document.
    #[must_use]
    pub fn build(self) -> Document {
        trace!("document built");
        self.doc
    }

    fn bind(self, path: Path) -> Assigning<CAP> {
        trace!(path = %path, "path selected");
        Assigning {
            doc: self.doc,
            path,
        }
    }
}

impl<const CAP: usize> Assigning<CAP> {
    /// Writes `value` at the bound path.
    ///
    /// Anything convertible into a [`Value`] is accepted, including a
    /// [`Document`] produced by a nested chain. Strings are stored as given;
    /// only [`Assigning::set_fmt`] is bounded by `CAP`.
    pub fn set(mut self, value: impl Into<Value>) -> Selecting<CAP> {
        let value = value.into();
        trace!(path = %self.path, kind = value.kind_name(), "value assigned");
        set_at(self.doc.root_mut(), &self.path, value);
        self.finish()
    }

    /// Writes `null` at the bound path.
    pub fn set_null(self) -> Selecting<CAP> {
        self.set(Value::Null)
    }

    /// Renders a string from a format template and writes it at the bound path.
    ///
    /// # Errors
    ///
    /// [`BuildError::InvalidFormat`](crate::BuildError::InvalidFormat) or
    /// [`BuildError::BufferOverrun`](crate::BuildError::BufferOverrun); the
    /// document is not touched in either case.
    pub fn set_fmt(self, args: fmt::Arguments<'_>) -> BuildResult<Selecting<CAP>> {
        let text = with_formatted::<CAP, _>(args, |s| Ok(s.to_string()))?;
        Ok(self.set(text))
    }

    /// Writes each element at `<path>/0 .. <path>/N-1` using [`ToValue`].
    ///
    /// # Errors
    ///
    /// [`BuildError::BufferOverrun`](crate::BuildError::BufferOverrun) when an
    /// element path does not fit the buffer.
    pub fn set_list<I>(self, items: I) -> BuildResult<Selecting<CAP>>
    where
        I: IntoIterator,
        I::Item: ToValue,
    {
        self.assign_each(items, |item| Ok(item.to_value()))
    }

    /// Like [`Assigning::set_list`], translating each element with `translator`.
    ///
    /// # Errors
    ///
    /// See [`Assigning::set_list`].
    pub fn set_list_with<I, F>(self, items: I, mut translator: F) -> BuildResult<Selecting<CAP>>
    where
        I: IntoIterator,
        F: FnMut(I::Item) -> Value,
    {
        self.assign_each(items, |item| Ok(translator(item)))
    }

    /// Writes one document per element, each built by `translator`.
    ///
    /// The translator usually runs a nested chain, so it may fail; its error
    /// stops the expansion and is returned unchanged.
    ///
    /// # Errors
    ///
    /// Errors from the translator, plus those of [`Assigning::set_list`].
    pub fn set_list_of_documents<I, F>(
        self,
        items: I,
        mut translator: F,
    ) -> BuildResult<Selecting<CAP>>
    where
        I: IntoIterator,
        F: FnMut(I::Item) -> BuildResult<Document>,
    {
        self.assign_each(items, |item| translator(item).map(Value::from))
    }

    fn assign_each<I, F>(mut self, items: I, translate: F) -> BuildResult<Selecting<CAP>>
    where
        I: IntoIterator,
        F: FnMut(I::Item) -> BuildResult<Value>,
    {
        write_elements::<CAP, _, _>(self.doc.root_mut(), &self.path, items, translate)?;
        Ok(self.finish())
    }

    fn finish(self) -> Selecting<CAP> {
        Selecting { doc: self.doc }
    }
}

/// Expands a list into indexed writes under `base`.
///
/// Each element path is rendered and parsed before the element is translated
/// or written, so a failure leaves earlier elements in place and later ones
/// unwritten.
fn write_elements<const CAP: usize, I, F>(
    root: &mut Value,
    base: &Path,
    items: I,
    mut translate: F,
) -> BuildResult<()>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> BuildResult<Value>,
{
    for (index, item) in items.into_iter().enumerate() {
        let path = with_formatted::<CAP, _>(format_args!("{base}/{index}"), Path::parse)?;
        let value = translate(item)?;
        trace!(path = %path, kind = value.kind_name(), "list element assigned");
        set_at(root, &path, value);
    }
    Ok(())
}
