//! In-memory transport.

use heapless::Deque;

use crate::input::ByteSource;
use crate::output::ByteSink;

/// Fixed-capacity FIFO usable as both ends of a [`Stream`](crate::Stream).
///
/// Writes append at the back, reads consume from the front, so text encoded
/// into a stream can be decoded back from the same stream. Bytes written
/// while full are dropped and counted.
///
/// # Example
///
/// ```
/// use textstream::{MemoryBuffer, Stream};
///
/// let mut stream = Stream::with_terminator(MemoryBuffer::<32>::new(), b' ');
/// stream.encode(&1.5f32).encode(&true);
///
/// let (mut x, mut flag) = (0.0f32, false);
/// stream.decode(&mut x).decode(&mut flag);
/// assert_eq!((x, flag), (1.5, true));
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemoryBuffer<const N: usize> {
    bytes: Deque<u8, N>,
    dropped: usize,
}

impl<const N: usize> MemoryBuffer<N> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bytes: Deque::new(),
            dropped: 0,
        }
    }

    /// Buffer pre-filled with `bytes`, truncated to capacity.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut buffer = Self::new();
        for &byte in bytes {
            buffer.push(byte);
        }
        buffer
    }

    /// Append one byte, dropping it if full.
    pub fn push(&mut self, byte: u8) {
        if self.bytes.push_back(byte).is_err() {
            self.dropped = self.dropped.saturating_add(1);
            trace!("memory buffer full, {} bytes dropped", self.dropped);
        }
    }

    /// Bytes waiting to be read.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Bytes lost to a full buffer since creation or the last [`clear`](Self::clear).
    #[inline]
    #[must_use]
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn clear(&mut self) {
        self.bytes.clear();
        self.dropped = 0;
    }

    /// Copy of the pending bytes, front first.
    #[must_use]
    pub fn to_vec(&self) -> heapless::Vec<u8, N> {
        self.bytes.iter().copied().collect()
    }
}

impl<const N: usize> ByteSource for MemoryBuffer<N> {
    #[inline]
    fn available(&mut self) -> usize {
        self.bytes.len()
    }

    #[inline]
    fn peek(&mut self) -> Option<u8> {
        self.bytes.front().copied()
    }

    #[inline]
    fn read(&mut self) -> Option<u8> {
        self.bytes.pop_front()
    }
}

impl<const N: usize> ByteSink for MemoryBuffer<N> {
    #[inline]
    fn write(&mut self, byte: u8) {
        self.push(byte);
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut buffer = MemoryBuffer::<4>::from_bytes(b"ab");
        buffer.write(b'c');
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.peek(), Some(b'a'));
        assert_eq!(buffer.read(), Some(b'a'));
        assert_eq!(buffer.read(), Some(b'b'));
        assert_eq!(buffer.read(), Some(b'c'));
        assert_eq!(buffer.read(), None);
        assert_eq!(buffer.peek(), None);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_overflow_is_counted() {
        let mut buffer = MemoryBuffer::<2>::from_bytes(b"xyz");
        assert_eq!(buffer.to_vec().as_slice(), b"xy");
        assert_eq!(buffer.dropped(), 1);

        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.dropped(), 0);
    }

    #[test]
    fn test_default_hook_gives_up() {
        let mut buffer = MemoryBuffer::<2>::new();
        assert_eq!(buffer.available(), 0);
        assert!(!buffer.no_data_available());
    }
}
