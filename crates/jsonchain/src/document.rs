use core::fmt;

use crate::value::Value;

/// A finished JSON document.
///
/// A document owns its whole tree. It starts as `null`, is moved from state
/// to state while a chain runs, and is handed out by
/// [`Selecting::build`](crate::Selecting::build). A document can itself be
/// assigned into another chain, which moves its root into the outer tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    root: Value,
}

impl Document {
    /// An empty (`null`-rooted) document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The root value.
    #[must_use]
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Mutable access to the root, for the builder's write path.
    pub(crate) fn root_mut(&mut self) -> &mut Value {
        &mut self.root
    }

    /// Consumes the document, returning its root value.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.root
    }

    /// Looks up a value by JSON Pointer. See [`Value::pointer`].
    #[must_use]
    pub fn pointer(&self, pointer: &str) -> Option<&Value> {
        self.root.pointer(pointer)
    }
}

impl From<Value> for Document {
    fn from(root: Value) -> Self {
        Self { root }
    }
}

impl From<Document> for Value {
    fn from(doc: Document) -> Self {
        doc.root
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.root, f)
    }
}

#[cfg(any(test, feature = "serde"))]
mod serde_impls {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::Document;
    use crate::value::Value;

    impl Serialize for Document {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            self.root.serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for Document {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            Value::deserialize(deserializer).map(Document::from)
        }
    }
}

#[cfg(feature = "serde_json")]
impl From<Document> for serde_json::Value {
    fn from(doc: Document) -> Self {
        doc.root.into()
    }
}
