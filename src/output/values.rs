//! [`Encode`] for the built-in value kinds.

use textstream_format::{
    BoolDirectives, BufferDirectives, FloatDirectives, IntDirectives, TextDirectives,
};

use super::traits::{ByteSink, Encode};
use crate::stream::Stream;

macro_rules! encode_unsigned {
    ($($ty:ty),+ $(,)?) => {$(
        impl<D: IntDirectives> Encode<D> for $ty {
            fn encode<S: ByteSink>(&self, output: &mut Stream<S>, directives: &D) {
                output.write_integer(false, *self as u128, directives.int_format());
                output.finish_write();
            }
        }
    )+};
}

macro_rules! encode_signed {
    ($($ty:ty),+ $(,)?) => {$(
        impl<D: IntDirectives> Encode<D> for $ty {
            fn encode<S: ByteSink>(&self, output: &mut Stream<S>, directives: &D) {
                let value = *self as i128;
                output.write_integer(value < 0, value.unsigned_abs(), directives.int_format());
                output.finish_write();
            }
        }
    )+};
}

encode_unsigned!(u8, u16, u32, u64, u128, usize);
encode_signed!(i8, i16, i32, i64, i128, isize);

impl<D: FloatDirectives> Encode<D> for f64 {
    fn encode<S: ByteSink>(&self, output: &mut Stream<S>, directives: &D) {
        output.write_float(*self, &directives.float_format());
        output.finish_write();
    }
}

impl<D: FloatDirectives> Encode<D> for f32 {
    fn encode<S: ByteSink>(&self, output: &mut Stream<S>, directives: &D) {
        output.write_float(f64::from(*self), &directives.float_format());
        output.finish_write();
    }
}

impl<D: BoolDirectives> Encode<D> for bool {
    fn encode<S: ByteSink>(&self, output: &mut Stream<S>, directives: &D) {
        output.write_bool(*self, &directives.bool_format());
        output.finish_write();
    }
}

impl<D: TextDirectives> Encode<D> for char {
    fn encode<S: ByteSink>(&self, output: &mut Stream<S>, directives: &D) {
        output.write_char(*self, directives.text_format().case);
        output.finish_write();
    }
}

impl<D: TextDirectives> Encode<D> for str {
    fn encode<S: ByteSink>(&self, output: &mut Stream<S>, directives: &D) {
        output.write_text(self, directives.text_format().case);
        output.finish_write();
    }
}

impl<const N: usize, D: TextDirectives> Encode<D> for heapless::String<N> {
    fn encode<S: ByteSink>(&self, output: &mut Stream<S>, directives: &D) {
        self.as_str().encode(output, directives);
    }
}

/// NUL-terminated character buffer.
impl<D: BufferDirectives> Encode<D> for [u8] {
    fn encode<S: ByteSink>(&self, output: &mut Stream<S>, directives: &D) {
        output.write_buffer(self, directives.buffer_format());
        output.finish_write();
    }
}

impl<const N: usize, D: BufferDirectives> Encode<D> for [u8; N] {
    fn encode<S: ByteSink>(&self, output: &mut Stream<S>, directives: &D) {
        self.as_slice().encode(output, directives);
    }
}
