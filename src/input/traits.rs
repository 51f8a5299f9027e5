use crate::stream::Stream;

/// Byte source a [`Stream`] decodes from.
///
/// This trait abstracts the transport (in-memory buffer, UART, software
/// serial) so the decode engine never touches hardware directly.
///
/// # `no_std` Compatibility
///
/// All implementations must be `#![no_std]` compatible with no heap allocation.
pub trait ByteSource {
    /// Number of bytes that can be read without blocking.
    fn available(&mut self) -> usize;

    /// Next unconsumed byte, left in place. `None` when nothing is available.
    fn peek(&mut self) -> Option<u8>;

    /// Consume and return the next byte.
    fn read(&mut self) -> Option<u8>;

    /// Called on the first read of a value when [`available`](Self::available)
    /// is 0.
    ///
    /// Return `true` once data exists to continue the value, `false` to end it
    /// (the stream then records [`Fails::NO_DATA`](crate::Fails::NO_DATA)).
    /// Blocking transports wait here; the default gives up immediately.
    fn no_data_available(&mut self) -> bool {
        false
    }
}

impl<T: ByteSource + ?Sized> ByteSource for &mut T {
    #[inline]
    fn available(&mut self) -> usize {
        (**self).available()
    }

    #[inline]
    fn peek(&mut self) -> Option<u8> {
        (**self).peek()
    }

    #[inline]
    fn read(&mut self) -> Option<u8> {
        (**self).read()
    }

    #[inline]
    fn no_data_available(&mut self) -> bool {
        (**self).no_data_available()
    }
}

/// A value that can be decoded from text under the directive set `D`.
///
/// Built-in kinds accept the directive sets listed in
/// [`textstream_format::set`]. Extension types implement this for `()` and for
/// any directive types they want to honour, typically by decoding their
/// fields one logical value at a time.
///
/// Implementations must end the logical value with
/// [`Stream::finish_read`] (the `Stream::decode*` helpers for built-in fields
/// already do).
///
/// # Example
///
/// ```
/// use textstream::{ByteSource, Decode, MemoryBuffer, Stream};
///
/// #[derive(Default)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// impl Decode for Point {
///     fn decode<S: ByteSource>(&mut self, input: &mut Stream<S>, _: &()) {
///         input.decode(&mut self.x).decode(&mut self.y);
///     }
/// }
///
/// let mut stream = Stream::new(MemoryBuffer::<16>::from_bytes(b"3 -4 "));
/// stream.set_terminator(b' ');
///
/// let mut point = Point::default();
/// stream.decode(&mut point);
/// assert_eq!((point.x, point.y), (3, -4));
/// assert!(!stream.failed());
/// ```
pub trait Decode<D = ()> {
    /// Decode one value from `input`, recording failures on the stream.
    fn decode<S: ByteSource>(&mut self, input: &mut Stream<S>, directives: &D);
}
