//! The stream handle: transport plus transfer and fail state.

use crate::fail::Fails;

/// Newline, the usual terminator for line oriented transports.
pub const ENDL: u8 = b'\n';
pub const TAB: u8 = b'\t';
pub const SPACE: u8 = b' ';
pub const CR: u8 = b'\r';

/// Tab stops on output are every this many columns.
pub const TAB_SIZE: u16 = 8;

/// Output position, counted from the bytes a stream has written.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cursor {
    /// Completed lines (`'\n'` written).
    pub line: u16,
    /// Column within the current line.
    pub column: u16,
}

impl Cursor {
    /// Advance past one written byte.
    #[inline]
    pub fn advance(&mut self, byte: u8) {
        match byte {
            b'\n' => {
                self.line = self.line.wrapping_add(1);
                self.column = 0;
            }
            b'\t' => {
                self.column = self
                    .column
                    .saturating_add(TAB_SIZE - self.column % TAB_SIZE);
            }
            _ => self.column = self.column.saturating_add(1),
        }
    }
}

/// A text stream over a byte transport.
///
/// The stream owns the transport and the state shared by every conversion:
///
/// - an optional **terminator** byte. Decoding treats its first occurrence as
///   the end of the current value and swallows it; encoding appends it after
///   every value.
/// - the sticky [`Fails`] mask.
/// - the per-value read latches and the output [`Cursor`].
///
/// Decoding is available when `T` is a [`ByteSource`](crate::ByteSource),
/// encoding when it is a [`ByteSink`](crate::ByteSink). A transport that is
/// both gives a bidirectional stream.
///
/// # Example
///
/// ```
/// use textstream::{Base, Fails, MemoryBuffer, Stream, ENDL};
///
/// let mut stream = Stream::new(MemoryBuffer::<64>::new());
/// stream.set_terminator(ENDL);
///
/// stream.encode(&-42i32).encode_with(&255u8, Base::HEX.prefixed());
/// assert_eq!(stream.transport().to_vec().as_slice(), b"-42\n0xFF\n");
///
/// let (mut a, mut b) = (0i32, 0u8);
/// stream.decode(&mut a).decode_with(&mut b, Base::HEX);
/// assert_eq!((a, b), (-42, 255));
/// assert!(!stream.failed());
///
/// stream.decode(&mut a);
/// assert!(stream.failed_with(Fails::NO_DATA));
/// ```
#[derive(Debug)]
pub struct Stream<T> {
    pub(crate) io: T,
    terminator: Option<u8>,
    fails: Fails,
    /// Nothing read yet for the current value.
    pub(crate) first_read: bool,
    /// The current value reached its end (terminator or no data).
    pub(crate) ended: bool,
    cursor: Cursor,
}

impl<T> Stream<T> {
    /// Create a stream with no terminator and no fails.
    pub const fn new(io: T) -> Self {
        Self {
            io,
            terminator: None,
            fails: Fails::NONE,
            first_read: true,
            ended: false,
            cursor: Cursor { line: 0, column: 0 },
        }
    }

    /// Create a stream that ends values at `terminator`.
    pub fn with_terminator(io: T, terminator: u8) -> Self {
        let mut stream = Self::new(io);
        stream.terminator = Some(terminator);
        stream
    }

    /// Check if any conversion failed since the fails were last cleared.
    #[inline]
    #[must_use]
    pub fn failed(&self) -> bool {
        !self.fails.is_empty()
    }

    /// Check if any of the given reason(s) is recorded.
    #[inline]
    #[must_use]
    pub fn failed_with(&self, reason: Fails) -> bool {
        self.fails.intersects(reason)
    }

    /// All recorded reasons.
    #[inline]
    #[must_use]
    pub fn fails(&self) -> Fails {
        self.fails
    }

    /// `Err` with the recorded reasons if any, without clearing them.
    ///
    /// # Errors
    ///
    /// Returns the current [`Fails`] mask when it is not empty.
    #[inline]
    pub fn status(&self) -> Result<(), Fails> {
        if self.fails.is_empty() {
            Ok(())
        } else {
            Err(self.fails)
        }
    }

    pub fn clear_fails(&mut self) {
        self.fails = Fails::NONE;
    }

    pub fn clear_fail(&mut self, reason: Fails) {
        self.fails &= !reason;
    }

    /// Record a failure of the current value.
    ///
    /// Engines drain the rest of the value after this; extension types should
    /// do the same with [`Stream::discard`].
    pub fn fail(&mut self, reason: Fails) {
        trace!("decode failed, reasons {}", reason.raw());
        self.fails |= reason;
    }

    pub fn set_terminator(&mut self, terminator: u8) {
        self.terminator = Some(terminator);
    }

    pub fn clear_terminator(&mut self) {
        self.terminator = None;
    }

    #[inline]
    #[must_use]
    pub fn terminator(&self) -> Option<u8> {
        self.terminator
    }

    /// Output position after everything written so far.
    #[inline]
    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[inline]
    pub(crate) fn cursor_mut(&mut self) -> &mut Cursor {
        &mut self.cursor
    }

    #[inline]
    pub fn transport(&self) -> &T {
        &self.io
    }

    #[inline]
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.io
    }

    /// Give back the transport.
    pub fn into_inner(self) -> T {
        self.io
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn test_fail_state_is_sticky_until_cleared() {
        let mut stream = Stream::new(());
        assert!(!stream.failed());
        assert_eq!(stream.status(), Ok(()));

        stream.fail(Fails::WRONG_BASE);
        stream.fail(Fails::NO_DATA);
        assert!(stream.failed());
        assert!(stream.failed_with(Fails::WRONG_BASE));
        assert!(!stream.failed_with(Fails::WRONG_CASE));
        assert_eq!(stream.status(), Err(Fails::WRONG_BASE | Fails::NO_DATA));

        stream.clear_fail(Fails::WRONG_BASE);
        assert_eq!(stream.fails(), Fails::NO_DATA);

        stream.clear_fails();
        assert!(!stream.failed());
        stream.clear_fails();
        assert!(!stream.failed());
    }

    #[test]
    fn test_terminator_configuration() {
        let mut stream = Stream::new(());
        assert_eq!(stream.terminator(), None);
        stream.set_terminator(ENDL);
        assert_eq!(stream.terminator(), Some(b'\n'));
        stream.clear_terminator();
        assert_eq!(stream.terminator(), None);
        assert_eq!(Stream::with_terminator((), SPACE).terminator(), Some(b' '));
    }

    #[test]
    fn test_cursor_tracking() {
        let mut cursor = Cursor::default();
        for &b in b"ab" {
            cursor.advance(b);
        }
        assert_eq!(cursor, Cursor { line: 0, column: 2 });

        cursor.advance(TAB);
        assert_eq!(cursor.column, 8);
        cursor.advance(TAB);
        assert_eq!(cursor.column, 16);
        cursor.advance(b'x');
        cursor.advance(TAB);
        assert_eq!(cursor.column, 24);

        cursor.advance(ENDL);
        assert_eq!(cursor, Cursor { line: 1, column: 0 });
    }
}
