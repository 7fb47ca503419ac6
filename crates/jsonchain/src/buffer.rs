use core::fmt::{self, Write};

use tracing::debug;

use crate::error::{BuildError, BuildResult};

/// Capacity, in bytes, of the formatting buffer used by [`crate::Builder`].
pub const DEFAULT_CAPACITY: usize = 1024;

/// Fixed-capacity text buffer on the stack.
///
/// Writes copy bytes while there is room and always count the bytes that
/// *would* have been written, so an overrun is detected after formatting
/// instead of truncating silently. The last byte is never used, which keeps
/// the usable length at `CAP - 1`.
pub struct FixedBuffer<const CAP: usize> {
    bytes: [u8; CAP],
    filled: usize,
    requested: usize,
}

impl<const CAP: usize> FixedBuffer<CAP> {
    /// An empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            bytes: [0; CAP],
            filled: 0,
            requested: 0,
        }
    }

    /// Bytes requested so far, including any that did not fit.
    #[must_use]
    pub fn requested(&self) -> usize {
        self.requested
    }

    /// Returns `true` once the requested length no longer fits.
    #[must_use]
    pub fn overflowed(&self) -> bool {
        self.requested >= CAP
    }

    /// The rendered text, or `None` after an overrun.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        if self.overflowed() {
            return None;
        }
        // Only whole `&str` fragments are copied while the buffer has room.
        core::str::from_utf8(&self.bytes[..self.filled]).ok()
    }

    fn check(&self) -> BuildResult<&str> {
        self.as_str()
            .ok_or_else(|| BuildError::buffer_overrun(CAP, self.requested))
    }
}

impl<const CAP: usize> Default for FixedBuffer<CAP> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const CAP: usize> Write for FixedBuffer<CAP> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.requested = self.requested.saturating_add(s.len());
        if self.requested < CAP {
            let end = self.filled + s.len();
            self.bytes[self.filled..end].copy_from_slice(s.as_bytes());
            self.filled = end;
        }
        Ok(())
    }
}

impl<const CAP: usize> fmt::Debug for FixedBuffer<CAP> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedBuffer")
            .field("capacity", &CAP)
            .field("text", &self.as_str())
            .field("requested", &self.requested)
            .finish()
    }
}

/// Renders `args` into a fresh [`FixedBuffer`] and hands the text to `f`.
///
/// # Errors
///
/// [`BuildError::InvalidFormat`] if a formatting impl fails, and
/// [`BuildError::BufferOverrun`] if the text needs `CAP` bytes or more.
pub fn with_formatted<const CAP: usize, R>(
    args: fmt::Arguments<'_>,
    f: impl FnOnce(&str) -> BuildResult<R>,
) -> BuildResult<R> {
    let mut buffer = FixedBuffer::<CAP>::new();
    if buffer.write_fmt(args).is_err() {
        debug!(capacity = CAP, "formatting failed");
        return Err(BuildError::InvalidFormat);
    }
    let text = buffer.check().inspect_err(|_| {
        debug!(
            capacity = CAP,
            requested = buffer.requested(),
            "formatted text overran buffer"
        );
    })?;
    f(text)
}

/// Applies the buffer capacity check to text that needs no formatting.
///
/// # Errors
///
/// [`BuildError::BufferOverrun`] if `text` needs `CAP` bytes or more.
pub fn check_capacity<const CAP: usize>(text: &str) -> BuildResult<&str> {
    if text.len() >= CAP {
        debug!(capacity = CAP, requested = text.len(), "text overran buffer");
        return Err(BuildError::buffer_overrun(CAP, text.len()));
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use alloc::{borrow::ToOwned, string::String};

    use rstest::rstest;

    use super::*;

    struct Failing;

    impl fmt::Display for Failing {
        fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    fn render<const CAP: usize>(args: fmt::Arguments<'_>) -> BuildResult<String> {
        with_formatted::<CAP, _>(args, |s| Ok(s.to_owned()))
    }

    #[test]
    fn renders_within_capacity() {
        assert_eq!(render::<16>(format_args!("/E({})", 1)).unwrap(), "/E(1)");
    }

    #[rstest]
    #[case(7, Ok("abcdef"))]
    #[case(6, Err(BuildError::buffer_overrun(6, 6)))]
    #[case(3, Err(BuildError::buffer_overrun(3, 6)))]
    fn last_byte_is_reserved(#[case] cap: usize, #[case] expected: Result<&str, BuildError>) {
        let text = "abcdef";
        let got = match cap {
            7 => render::<7>(format_args!("{text}")),
            6 => render::<6>(format_args!("{text}")),
            _ => render::<3>(format_args!("{text}")),
        };
        assert_eq!(got.as_deref().map_err(Clone::clone), expected);
    }

    #[test]
    fn counts_bytes_past_capacity() {
        let mut buffer = FixedBuffer::<4>::new();
        write!(buffer, "{}-{}", "ab", "cdef").unwrap();
        assert_eq!(buffer.requested(), 7);
        assert!(buffer.overflowed());
        assert_eq!(buffer.as_str(), None);
    }

    #[test]
    fn failing_display_is_invalid_format() {
        assert_eq!(
            render::<64>(format_args!("/{}", Failing)),
            Err(BuildError::InvalidFormat)
        );
    }

    #[test]
    fn multibyte_text_is_counted_in_bytes() {
        assert_eq!(render::<4>(format_args!("ééé")), Err(BuildError::buffer_overrun(4, 6)));
        assert_eq!(render::<7>(format_args!("ééé")).unwrap(), "ééé");
    }

    #[rstest]
    #[case("/abc", 5, true)]
    #[case("/abcd", 5, false)]
    fn plain_text_capacity(#[case] text: &str, #[case] cap: usize, #[case] fits: bool) {
        let result = match cap {
            5 => check_capacity::<5>(text),
            _ => unreachable!(),
        };
        assert_eq!(result.is_ok(), fits);
    }
}
