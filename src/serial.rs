//! Serial transport over `embedded-io` peripherals.

use embedded_io::{Read, ReadReady, Write};

use crate::input::ByteSource;
use crate::output::ByteSink;

/// Adapter that lets a UART (or anything implementing the `embedded-io`
/// traits) back a [`Stream`](crate::Stream).
///
/// One byte of lookahead is buffered to provide `peek`. In blocking mode an
/// empty receiver at the start of a value is polled until a byte arrives,
/// so decoding waits for input instead of reporting
/// [`Fails::NO_DATA`](crate::Fails::NO_DATA). Once a value has started,
/// a momentarily empty receiver ends it in both modes.
///
/// I/O errors are logged and counted; they never surface as fail reasons.
///
/// # Example
///
/// ```ignore
/// let uart = /* any embedded_io::Read + ReadReady + Write */;
/// let mut stream = Stream::with_terminator(Serial::blocking(uart), ENDL);
///
/// let mut speed = 0u16;
/// stream.decode(&mut speed);
/// stream.encode(&speed);
/// ```
#[derive(Debug)]
pub struct Serial<T> {
    io: T,
    lookahead: Option<u8>,
    blocking: bool,
    errors: usize,
}

impl<T> Serial<T> {
    /// Adapter that reports an empty receiver immediately.
    pub const fn new(io: T) -> Self {
        Self {
            io,
            lookahead: None,
            blocking: false,
            errors: 0,
        }
    }

    /// Adapter that waits for the first byte of every value.
    pub const fn blocking(io: T) -> Self {
        Self {
            io,
            lookahead: None,
            blocking: true,
            errors: 0,
        }
    }

    pub fn set_blocking(&mut self, blocking: bool) {
        self.blocking = blocking;
    }

    #[inline]
    #[must_use]
    pub fn is_blocking(&self) -> bool {
        self.blocking
    }

    /// I/O errors seen so far.
    #[inline]
    #[must_use]
    pub fn errors(&self) -> usize {
        self.errors
    }

    #[inline]
    pub fn inner(&self) -> &T {
        &self.io
    }

    #[inline]
    pub fn inner_mut(&mut self) -> &mut T {
        &mut self.io
    }

    /// Give back the peripheral. A buffered lookahead byte is lost.
    pub fn into_inner(self) -> T {
        self.io
    }

    fn record_error(&mut self, operation: &'static str) {
        self.errors = self.errors.saturating_add(1);
        warn!("serial {} failed, {} errors so far", operation, self.errors);
    }
}

impl<T: Read + ReadReady> Serial<T> {
    /// Make sure a lookahead byte is buffered if the receiver has one.
    fn fill(&mut self) -> Result<bool, T::Error> {
        if self.lookahead.is_some() {
            return Ok(true);
        }
        if !self.io.read_ready()? {
            return Ok(false);
        }
        let mut byte = [0u8; 1];
        if self.io.read(&mut byte)? == 1 {
            self.lookahead = Some(byte[0]);
            return Ok(true);
        }
        Ok(false)
    }

    fn fill_logged(&mut self) -> bool {
        match self.fill() {
            Ok(ready) => ready,
            Err(_) => {
                self.record_error("read");
                false
            }
        }
    }
}

impl<T: Read + ReadReady> ByteSource for Serial<T> {
    fn available(&mut self) -> usize {
        usize::from(self.fill_logged())
    }

    fn peek(&mut self) -> Option<u8> {
        if self.fill_logged() {
            self.lookahead
        } else {
            None
        }
    }

    fn read(&mut self) -> Option<u8> {
        if self.fill_logged() {
            self.lookahead.take()
        } else {
            None
        }
    }

    fn no_data_available(&mut self) -> bool {
        if !self.blocking {
            return false;
        }
        trace!("serial waiting for data");
        loop {
            match self.fill() {
                Ok(true) => return true,
                Ok(false) => core::hint::spin_loop(),
                Err(_) => {
                    self.record_error("read");
                    return false;
                }
            }
        }
    }
}

impl<T: Write> ByteSink for Serial<T> {
    fn write(&mut self, byte: u8) {
        if self.io.write_all(&[byte]).is_err() {
            self.record_error("write");
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::fail::Fails;
    use crate::stream::{Stream, ENDL};
    use core::convert::Infallible;
    use embedded_io::ErrorType;
    use std::collections::VecDeque;
    use std::vec::Vec;

    /// UART stand-in whose receiver reports "not ready" a few times first.
    #[derive(Default)]
    struct MockUart {
        rx: VecDeque<u8>,
        tx: Vec<u8>,
        not_ready_polls: usize,
    }

    impl MockUart {
        fn with_rx(bytes: &[u8], not_ready_polls: usize) -> Self {
            Self {
                rx: bytes.iter().copied().collect(),
                tx: Vec::new(),
                not_ready_polls,
            }
        }
    }

    impl ErrorType for MockUart {
        type Error = Infallible;
    }

    impl Read for MockUart {
        fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
            match (buf.first_mut(), self.rx.pop_front()) {
                (Some(slot), Some(byte)) => {
                    *slot = byte;
                    Ok(1)
                }
                _ => Ok(0),
            }
        }
    }

    impl ReadReady for MockUart {
        fn read_ready(&mut self) -> Result<bool, Self::Error> {
            if self.not_ready_polls > 0 {
                self.not_ready_polls -= 1;
                return Ok(false);
            }
            Ok(!self.rx.is_empty())
        }
    }

    impl Write for MockUart {
        fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
            self.tx.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    #[test]
    fn test_lookahead_peek_then_read() {
        let mut serial = Serial::new(MockUart::with_rx(b"ab", 0));
        assert_eq!(serial.available(), 1);
        assert_eq!(serial.peek(), Some(b'a'));
        assert_eq!(serial.peek(), Some(b'a'));
        assert_eq!(serial.read(), Some(b'a'));
        assert_eq!(serial.read(), Some(b'b'));
        assert_eq!(serial.available(), 0);
        assert_eq!(serial.read(), None);
    }

    #[test]
    fn test_polling_mode_reports_no_data() {
        let mut stream = Stream::new(Serial::new(MockUart::with_rx(b"12", 3)));
        let mut value = 0u8;
        stream.decode(&mut value);
        assert_eq!(value, 0);
        assert!(stream.failed_with(Fails::NO_DATA));
    }

    #[test]
    fn test_blocking_mode_waits_for_first_byte() {
        let mut stream =
            Stream::with_terminator(Serial::blocking(MockUart::with_rx(b"12\n34\n", 3)), ENDL);
        let (mut a, mut b) = (0u8, 0u8);
        stream.decode(&mut a).decode(&mut b);
        assert_eq!((a, b), (12, 34));
        assert!(!stream.failed());
    }

    #[test]
    fn test_write_goes_to_peripheral() {
        let mut stream = Stream::with_terminator(Serial::new(MockUart::default()), ENDL);
        stream.encode(&-7i16).encode("ok");
        assert_eq!(stream.transport().inner().tx.as_slice(), b"-7\nok\n");
        assert_eq!(stream.transport().errors(), 0);
    }
}
