//! [`Decode`] for the built-in value kinds.

use textstream_format::{
    BoolDirectives, BufferDirectives, FloatDirectives, IntDirectives, TextDirectives,
};

use super::traits::{ByteSource, Decode};
use crate::fail::Fails;
use crate::stream::Stream;

macro_rules! decode_unsigned {
    ($($ty:ty),+ $(,)?) => {$(
        impl<D: IntDirectives> Decode<D> for $ty {
            fn decode<S: ByteSource>(&mut self, input: &mut Stream<S>, directives: &D) {
                if let Some(integer) = input.read_integer(directives.int_format(), false) {
                    match <$ty>::try_from(integer.magnitude) {
                        Ok(value) => *self = value,
                        Err(_) => input.fail(Fails::OVERFLOW),
                    }
                }
                input.finish_read();
            }
        }
    )+};
}

macro_rules! decode_signed {
    ($($ty:ty),+ $(,)?) => {$(
        impl<D: IntDirectives> Decode<D> for $ty {
            fn decode<S: ByteSource>(&mut self, input: &mut Stream<S>, directives: &D) {
                if let Some(integer) = input.read_integer(directives.int_format(), true) {
                    match integer.to_signed().and_then(|value| <$ty>::try_from(value).ok()) {
                        Some(value) => *self = value,
                        None => input.fail(Fails::OVERFLOW),
                    }
                }
                input.finish_read();
            }
        }
    )+};
}

decode_unsigned!(u8, u16, u32, u64, u128, usize);
decode_signed!(i8, i16, i32, i64, i128, isize);

impl<D: FloatDirectives> Decode<D> for f64 {
    fn decode<S: ByteSource>(&mut self, input: &mut Stream<S>, directives: &D) {
        if let Some(value) = input.read_float(&directives.float_format()) {
            *self = value;
        }
        input.finish_read();
    }
}

impl<D: FloatDirectives> Decode<D> for f32 {
    fn decode<S: ByteSource>(&mut self, input: &mut Stream<S>, directives: &D) {
        if let Some(value) = input.read_float(&directives.float_format()) {
            *self = value as f32;
        }
        input.finish_read();
    }
}

impl<D: BoolDirectives> Decode<D> for bool {
    fn decode<S: ByteSource>(&mut self, input: &mut Stream<S>, directives: &D) {
        if let Some(value) = input.read_bool(&directives.bool_format()) {
            *self = value;
        }
        input.finish_read();
    }
}

/// One byte, taken as a Latin-1 character.
impl<D: TextDirectives> Decode<D> for char {
    fn decode<S: ByteSource>(&mut self, input: &mut Stream<S>, directives: &D) {
        if let Some(byte) = input.read_char(directives.text_format()) {
            *self = char::from(byte);
        }
        input.finish_read();
    }
}

/// Replaces the contents. Exceeding `N` bytes records [`Fails::OVERFLOW`].
///
/// Each input byte becomes one Latin-1 `char`, the same as `char` decoding.
/// Encoding a `str` writes UTF-8, so text with bytes at or above `0x80` does
/// not survive a round trip unchanged: `é` is written as two bytes and read
/// back as two characters.
impl<const N: usize, D: TextDirectives> Decode<D> for heapless::String<N> {
    fn decode<S: ByteSource>(&mut self, input: &mut Stream<S>, directives: &D) {
        input.read_text(self, directives.text_format());
        input.finish_read();
    }
}

/// NUL-terminated character buffer.
impl<D: BufferDirectives> Decode<D> for [u8] {
    fn decode<S: ByteSource>(&mut self, input: &mut Stream<S>, directives: &D) {
        input.read_buffer(self, directives.buffer_format());
        input.finish_read();
    }
}

impl<const N: usize, D: BufferDirectives> Decode<D> for [u8; N] {
    fn decode<S: ByteSource>(&mut self, input: &mut Stream<S>, directives: &D) {
        self.as_mut_slice().decode(input, directives);
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::memory::MemoryBuffer;
    use textstream_format::{
        Base, BoolWords, Case, DecimalPoint, FixedString, Precision, SpecialNumbers,
    };

    fn stream(text: &[u8]) -> Stream<MemoryBuffer<64>> {
        Stream::new(MemoryBuffer::from_bytes(text))
    }

    fn decode<V: Decode + Default>(text: &[u8]) -> (V, Fails) {
        let mut value = V::default();
        let mut s = stream(text);
        s.decode(&mut value);
        (value, s.fails())
    }

    fn decode_with<D, V: Decode<D> + Default>(text: &[u8], directives: D) -> (V, Fails) {
        let mut value = V::default();
        let mut s = stream(text);
        s.decode_with(&mut value, directives);
        (value, s.fails())
    }

    #[test]
    fn test_decode_unsigned_bases() {
        assert_eq!(decode::<u32>(b"1234"), (1234, Fails::NONE));
        assert_eq!(decode::<u32>(b"0x1F"), (31, Fails::NONE));
        assert_eq!(decode::<u32>(b"017"), (15, Fails::NONE));
        assert_eq!(decode::<u32>(b"B101"), (5, Fails::NONE));
        assert_eq!(decode::<u32>(b"<B5>1234"), (194, Fails::NONE));
        assert_eq!(decode::<u32>(b"<b36>zz"), (1295, Fails::NONE));
        assert_eq!(decode::<u32>(b"0"), (0, Fails::NONE));
    }

    #[test]
    fn test_decode_signed() {
        assert_eq!(decode::<i32>(b"-42"), (-42, Fails::NONE));
        assert_eq!(decode::<i8>(b"-128"), (i8::MIN, Fails::NONE));
        assert_eq!(decode::<i64>(b"-0x10"), (-16, Fails::NONE));
        assert_eq!(decode::<i128>(b"-170141183460469231731687303715884105728"), (i128::MIN, Fails::NONE));
    }

    #[test]
    fn test_decode_integer_failures() {
        assert_eq!(decode::<u8>(b"256"), (0, Fails::OVERFLOW));
        assert_eq!(decode::<i8>(b"128"), (0, Fails::OVERFLOW));
        assert_eq!(decode::<u32>(b"-1"), (0, Fails::NOT_A_NUMBER));
        assert_eq!(decode::<u32>(b"12a"), (0, Fails::WRONG_BASE));
        assert_eq!(decode::<u32>(b"09"), (0, Fails::WRONG_BASE));
        assert_eq!(decode::<u32>(b"1 2"), (0, Fails::NOT_A_NUMBER));
        assert_eq!(decode::<u32>(b""), (0, Fails::NO_DATA));
    }

    #[test]
    fn test_decode_failure_leaves_target_untouched() {
        let mut value = 77u32;
        let mut s = stream(b"x1");
        s.decode(&mut value);
        assert_eq!(value, 77);
        assert!(s.failed_with(Fails::NOT_A_NUMBER));
    }

    #[test]
    fn test_decode_with_base() {
        assert_eq!(decode_with::<_, u32>(b"ff", Base::HEX), (255, Fails::NONE));
        assert_eq!(decode_with::<_, u32>(b"0xff", Base::HEX), (255, Fails::NONE));
        assert_eq!(decode_with::<_, u32>(b"BEEF", Base::HEX), (0xBEEF, Fails::NONE));
        assert_eq!(decode_with::<_, u32>(b"777", Base::OCT), (511, Fails::NONE));
        assert_eq!(decode_with::<_, u32>(b"Z", Base::new(36)), (35, Fails::NONE));
    }

    #[test]
    fn test_decode_base_mismatch() {
        // Bare decimal rejects the hex digits after the prefix.
        let mut value = 0u32;
        let mut s = stream(b"0x1F;7");
        s.set_terminator(b';');
        s.decode_with(&mut value, Base::DEC);
        assert!(s.failed_with(Fails::WRONG_BASE));
        assert_eq!(s.transport().len(), 1);

        // Announced base differs from the requested one.
        assert_eq!(
            decode_with::<_, u32>(b"0x10", Base::DEC.prefixed()),
            (10, Fails::WRONG_BASE)
        );
        assert_eq!(
            decode_with::<_, u32>(b"<B5>0", Base::HEX.full()),
            (0, Fails::NONE)
        );
        assert_eq!(
            decode_with::<_, u32>(b"<B16>ff", Base::HEX.prefixed()),
            (255, Fails::NONE)
        );
    }

    #[test]
    fn test_decode_with_case() {
        assert_eq!(
            decode_with::<_, u32>(b"ff", (Base::HEX, Case::Lower)),
            (255, Fails::NONE)
        );
        assert_eq!(
            decode_with::<_, u32>(b"fF", (Base::HEX, Case::Lower)),
            (0, Fails::WRONG_CASE)
        );
        assert_eq!(
            decode_with::<_, u32>(b"FF", (Case::Upper, Base::HEX)),
            (255, Fails::NONE)
        );
    }

    #[test]
    fn test_decode_float() {
        assert_eq!(decode::<f64>(b"3.25"), (3.25, Fails::NONE));
        assert_eq!(decode::<f64>(b"-0,5"), (-0.5, Fails::NONE));
        assert_eq!(decode::<f64>(b"42"), (42.0, Fails::NONE));
        assert_eq!(decode::<f32>(b"0.1"), (0.1, Fails::NONE));

        let (zero, fails) = decode::<f64>(b"-0");
        assert!(zero == 0.0 && zero.is_sign_negative());
        assert!(fails.is_empty());
    }

    #[test]
    fn test_decode_float_failures() {
        assert_eq!(decode::<f64>(b"1.2.3").1, Fails::NOT_A_NUMBER);
        assert_eq!(decode::<f64>(b"1e5").1, Fails::NOT_A_NUMBER);
        assert_eq!(decode::<f64>(b"abc").1, Fails::NOT_A_NUMBER);
        assert_eq!(
            decode_with::<_, f64>(b"1,5", DecimalPoint::Dot).1,
            Fails::WRONG_DECIMAL_POINT
        );
        assert_eq!(
            decode_with::<_, f64>(b"1,5", DecimalPoint::Comma),
            (1.5, Fails::NONE)
        );
    }

    #[test]
    fn test_decode_float_precision() {
        let mut value = 0.0f64;
        let mut s = stream(b"3.14159");
        s.decode_with(&mut value, Precision(2));
        assert!(s.failed_with(Fails::WRONG_PRECISION));
        assert!(s.transport().is_empty());

        let (value, fails) = decode_with::<_, f64>(b"3.14", Precision(2));
        assert!((value - 3.14).abs() < 1e-12);
        assert!(fails.is_empty());

        let (value, fails) = decode_with::<_, f64>(b"12", Precision(2));
        assert_eq!((value, fails), (12.0, Fails::NONE));
    }

    #[test]
    fn test_decode_float_special() {
        let (nan, fails) = decode::<f64>(b"nan");
        assert!(nan.is_nan() && fails.is_empty());
        assert_eq!(decode::<f64>(b"inf+"), (f64::INFINITY, Fails::NONE));
        assert_eq!(decode::<f64>(b"inf-"), (f64::NEG_INFINITY, Fails::NONE));
        assert_eq!(decode::<f64>(b"inf").1, Fails::NOT_A_NUMBER);

        let user = SpecialNumbers::new("NAN", "POS", "NEG");
        assert_eq!(decode_with::<_, f64>(b"POS", user), (f64::INFINITY, Fails::NONE));
        assert_eq!(
            decode_with::<_, f64>(b"positive-infinity", (Precision(1), SpecialNumbers::LONG)),
            (f64::INFINITY, Fails::NONE)
        );
    }

    #[test]
    fn test_decode_bool() {
        assert_eq!(decode::<bool>(b"1"), (true, Fails::NONE));
        assert_eq!(decode::<bool>(b"0"), (false, Fails::NONE));
        assert_eq!(decode::<bool>(b"TRUE"), (true, Fails::NONE));
        assert_eq!(decode::<bool>(b"False"), (false, Fails::NONE));
        assert_eq!(decode::<bool>(b"2").1, Fails::NOT_A_BOOL);
        assert_eq!(decode::<bool>(b"10").1, Fails::NOT_A_BOOL);
        assert_eq!(decode::<bool>(b"yes").1, Fails::NOT_A_BOOL);
    }

    #[test]
    fn test_decode_bool_words() {
        let words = BoolWords::new("on", "off");
        assert_eq!(decode_with::<_, bool>(b"off", words), (false, Fails::NONE));
        assert_eq!(decode_with::<_, bool>(b"true", words).1, Fails::NOT_A_BOOL);
        assert_eq!(decode_with::<_, bool>(b"1", BoolWords::NUM), (true, Fails::NONE));
    }

    #[test]
    fn test_decode_char() {
        assert_eq!(decode::<char>(b"x"), ('x', Fails::NONE));
        assert_eq!(decode::<char>(b"xy").1, Fails::NOT_A_CHAR);
        assert_eq!(decode_with::<_, char>(b"a", Case::Lower), ('a', Fails::NONE));
        assert_eq!(decode_with::<_, char>(b"5", Case::Lower), ('5', Fails::NONE));

        let mut value = ' ';
        let mut s = stream(b"AB");
        s.decode_with(&mut value, Case::Lower);
        assert_eq!(s.fails(), Fails::WRONG_CASE);
        assert!(s.transport().is_empty());
    }

    #[test]
    fn test_decode_string() {
        let (text, fails) = decode::<heapless::String<16>>(b"Hello there");
        assert_eq!(text.as_str(), "Hello there");
        assert!(fails.is_empty());

        let (_, fails) = decode_with::<_, heapless::String<16>>(b"abC", Case::Lower);
        assert_eq!(fails, Fails::WRONG_CASE);

        let (text, fails) = decode::<heapless::String<4>>(b"abcdef");
        assert_eq!(text.as_str(), "abcd");
        assert_eq!(fails, Fails::OVERFLOW);
    }

    #[test]
    fn test_decode_string_bytes_are_latin1() {
        let (text, fails) = decode::<heapless::String<8>>(b"caf\xE9");
        assert_eq!(text.as_str(), "caf\u{e9}");
        assert!(fails.is_empty());

        // UTF-8 input is read byte by byte.
        let (text, _) = decode::<heapless::String<8>>("\u{e9}".as_bytes());
        assert_eq!(text.as_str(), "\u{c3}\u{a9}");
    }

    #[test]
    fn test_decode_buffer_exact() {
        let mut buf = [0xFFu8; 5];
        let mut s = stream(b"abcd");
        s.decode_with(&mut buf, FixedString::exact(5));
        assert_eq!(&buf, b"abcd\0");
        assert!(!s.failed());

        let mut s = stream(b"abc");
        s.decode_with(&mut buf, FixedString::exact(5));
        assert!(s.failed_with(Fails::WRONG_CSTRING));

        let mut s = stream(b"abcde");
        s.decode_with(&mut buf, FixedString::exact(5));
        assert!(s.failed_with(Fails::WRONG_CSTRING));
    }

    #[test]
    fn test_decode_buffer_max() {
        let mut buf = [0xFFu8; 8];
        let mut s = stream(b"ab");
        s.decode_with(&mut buf, FixedString::max(8));
        assert_eq!(&buf[..3], b"ab\0");
        assert!(!s.failed());

        let mut s = stream(b"ab\0cd");
        s.decode(&mut buf);
        assert_eq!(&buf[..3], b"ab\0");
        assert!(s.failed_with(Fails::WRONG_CSTRING));

        let mut s = stream(b"abc");
        s.decode_with(&mut buf, (Case::Upper, FixedString::max(4)));
        assert_eq!(s.fails(), Fails::WRONG_CASE);
    }

    #[test]
    fn test_decode_buffer_slice() {
        let mut buf = [0u8; 4];
        let mut s = stream(b"xyz");
        s.decode(&mut buf[..]);
        assert_eq!(&buf, b"xyz\0");
        assert!(!s.failed());
    }
}
