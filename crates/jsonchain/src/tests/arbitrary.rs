use alloc::{
    boxed::Box,
    string::{String, ToString},
    vec::Vec,
};

use quickcheck::{Arbitrary, Gen};

use crate::{Number, Value};

/// A finite JSON number.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct JsonNumber(pub(crate) Number);

impl Arbitrary for JsonNumber {
    fn arbitrary(g: &mut Gen) -> Self {
        match usize::arbitrary(g) % 3 {
            0 => Self(Number::Int(i64::arbitrary(g))),
            1 => Self(Number::UInt(u64::arbitrary(g))),
            _ => {
                let mut value = f64::arbitrary(g);
                while !value.is_finite() {
                    value = f64::arbitrary(g);
                }
                Self(Number::Float(value))
            }
        }
    }
}

/// A leaf value: null, boolean, number or string.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Scalar(pub(crate) Value);

impl Arbitrary for Scalar {
    fn arbitrary(g: &mut Gen) -> Self {
        Self(match usize::arbitrary(g) % 4 {
            0 => Value::Null,
            1 => Value::Boolean(bool::arbitrary(g)),
            2 => Value::Number(JsonNumber::arbitrary(g).0),
            _ => Value::String(String::arbitrary(g)),
        })
    }
}

/// A path token: an arbitrary key or a small array index.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TokenSpec {
    Key(String),
    Index(usize),
}

impl Arbitrary for TokenSpec {
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            TokenSpec::Index(usize::arbitrary(g) % 4)
        } else {
            TokenSpec::Key(String::arbitrary(g))
        }
    }
}

/// One to four tokens rendered as an escaped JSON Pointer.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PointerSpec(pub(crate) Vec<TokenSpec>);

impl PointerSpec {
    pub(crate) fn render(&self) -> String {
        let mut out = String::new();
        for token in &self.0 {
            out.push('/');
            match token {
                TokenSpec::Key(key) => {
                    out.push_str(&key.replace('~', "~0").replace('/', "~1"));
                }
                TokenSpec::Index(i) => out.push_str(&i.to_string()),
            }
        }
        out
    }
}

impl Arbitrary for PointerSpec {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = 1 + usize::arbitrary(g) % 4;
        Self((0..len).map(|_| TokenSpec::arbitrary(g)).collect())
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let tokens = self.0.clone();
        Box::new((1..tokens.len()).rev().map(move |n| Self(tokens[..n].to_vec())))
    }
}

/// A key-only path over a three-letter alphabet, so that generated paths
/// often share ancestors.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct KeyPath(pub(crate) Vec<&'static str>);

impl KeyPath {
    pub(crate) fn render(&self) -> String {
        self.0.iter().fold(String::new(), |mut out, key| {
            out.push('/');
            out.push_str(key);
            out
        })
    }

    pub(crate) fn is_prefix_of(&self, other: &KeyPath) -> bool {
        other.0.starts_with(&self.0)
    }
}

impl Arbitrary for KeyPath {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = 1 + usize::arbitrary(g) % 3;
        Self(
            (0..len)
                .map(|_| *g.choose(&["a", "b", "c"]).unwrap_or(&"a"))
                .collect(),
        )
    }
}
