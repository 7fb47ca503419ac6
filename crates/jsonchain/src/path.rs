//! JSON Pointer paths.
//!
//! A path is a slash-delimited list of tokens (`/A/0/B`). Every token keeps its
//! decoded text; tokens that spell a canonical non-negative integer also carry
//! the array index they denote.

use alloc::{string::String, vec::Vec};
use core::fmt;

use crate::error::{BuildError, BuildResult, PathSyntaxError};

/// Token that appends to an existing array.
pub const APPEND_TOKEN: &str = "-";

/// Exclusive upper bound of array indices. Larger numeric tokens are keys, so
/// `index + 1` never overflows.
const INDEX_LIMIT: u32 = u32::MAX;

/// The kind of container a path token steps into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    /// The token is an array index.
    Array,
    /// The token is an object key.
    Object,
}

impl ContainerKind {
    /// Infers the container a token addresses from its shape alone.
    ///
    /// ```
    /// use jsonchain::{ContainerKind, Path};
    ///
    /// let path = Path::parse("/items/0/01").unwrap();
    /// let kinds: Vec<_> = path.tokens().iter().map(ContainerKind::for_token).collect();
    /// assert_eq!(kinds, [ContainerKind::Object, ContainerKind::Array, ContainerKind::Object]);
    /// ```
    #[must_use]
    pub fn for_token(token: &Token) -> Self {
        if token.index.is_some() {
            ContainerKind::Array
        } else {
            ContainerKind::Object
        }
    }
}

/// One decoded path token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    key: String,
    index: Option<usize>,
}

impl Token {
    fn new(key: String) -> Self {
        let index = parse_index(&key);
        Self { key, index }
    }

    /// The decoded token text, used as the key when stepping into an object.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The array index, if the token is a canonical non-negative integer.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Returns `true` for the `-` token.
    #[must_use]
    pub fn is_append(&self) -> bool {
        self.key == APPEND_TOKEN
    }
}

/// Digits only, no leading zero unless the token is exactly `0`, and the value
/// must be below [`INDEX_LIMIT`]. Anything else is a key.
fn parse_index(token: &str) -> Option<usize> {
    let bytes = token.as_bytes();
    if bytes.is_empty() || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    if bytes.len() > 1 && bytes[0] == b'0' {
        return None;
    }
    let index: u32 = token.parse().ok()?;
    if index == INDEX_LIMIT {
        return None;
    }
    usize::try_from(index).ok()
}

/// A parsed JSON Pointer.
///
/// The empty path addresses the document root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path {
    tokens: Vec<Token>,
}

impl Path {
    /// Parses RFC 6901 pointer syntax.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::InvalidPath`] when a non-empty pointer does not
    /// begin with `/`, or when `~` is followed by anything but `0` or `1`.
    pub fn parse(pointer: &str) -> BuildResult<Self> {
        if pointer.is_empty() {
            return Ok(Self::default());
        }
        let Some(rest) = pointer.strip_prefix('/') else {
            return Err(BuildError::invalid_path(
                pointer,
                PathSyntaxError::MissingLeadingSlash,
            ));
        };

        let tokens = rest
            .split('/')
            .map(|raw| unescape(raw).map(Token::new))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|reason| BuildError::invalid_path(pointer, reason))?;

        Ok(Self { tokens })
    }

    /// The tokens, root first.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Returns `true` if the path addresses the root.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.tokens.is_empty()
    }
}

fn unescape(raw: &str) -> Result<String, PathSyntaxError> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c == '~' {
            match chars.next() {
                Some('0') => out.push('~'),
                Some('1') => out.push('/'),
                _ => return Err(PathSyntaxError::InvalidEscape),
            }
        } else {
            out.push(c);
        }
    }
    Ok(out)
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            f.write_str("/")?;
            for c in token.key.chars() {
                match c {
                    '~' => f.write_str("~0")?,
                    '/' => f.write_str("~1")?,
                    c => fmt::Write::write_char(f, c)?,
                }
            }
        }
        Ok(())
    }
}
