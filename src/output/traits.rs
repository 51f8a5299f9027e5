use crate::stream::Stream;

/// Byte sink a [`Stream`] encodes into.
///
/// Writes cannot fail at this level: encoded text is assumed always
/// representable, and transports that can lose bytes account for that
/// themselves.
///
/// # `no_std` Compatibility
///
/// All implementations must be `#![no_std]` compatible with no heap allocation.
pub trait ByteSink {
    /// Append one byte.
    fn write(&mut self, byte: u8);
}

impl<T: ByteSink + ?Sized> ByteSink for &mut T {
    #[inline]
    fn write(&mut self, byte: u8) {
        (**self).write(byte);
    }
}

/// Bytes past capacity are dropped.
impl<const N: usize> ByteSink for heapless::Vec<u8, N> {
    #[inline]
    fn write(&mut self, byte: u8) {
        if self.push(byte).is_err() {
            trace!("sink full, byte dropped");
        }
    }
}

#[cfg(feature = "std")]
impl ByteSink for std::vec::Vec<u8> {
    #[inline]
    fn write(&mut self, byte: u8) {
        self.push(byte);
    }
}

/// A value that can be encoded as text under the directive set `D`.
///
/// The counterpart of [`Decode`](crate::Decode). Implementations end the
/// logical value with [`Stream::finish_write`], which the `Stream::encode*`
/// helpers for built-in fields already do.
///
/// # Example
///
/// ```
/// use textstream::{ByteSink, Encode, Stream};
///
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// impl Encode for Point {
///     fn encode<S: ByteSink>(&self, output: &mut Stream<S>, _: &()) {
///         output.encode(&self.x).encode(&self.y);
///     }
/// }
///
/// let mut stream = Stream::new(heapless::Vec::<u8, 16>::new());
/// stream.set_terminator(b' ');
/// stream.encode(&Point { x: 3, y: -4 });
/// assert_eq!(stream.transport().as_slice(), b"3 -4 ");
/// ```
pub trait Encode<D = ()> {
    /// Encode this value into `output`.
    fn encode<S: ByteSink>(&self, output: &mut Stream<S>, directives: &D);
}

impl<D, T: Encode<D> + ?Sized> Encode<D> for &T {
    #[inline]
    fn encode<S: ByteSink>(&self, output: &mut Stream<S>, directives: &D) {
        (**self).encode(output, directives);
    }
}
