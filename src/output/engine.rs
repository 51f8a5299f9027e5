//! Encode engine: per-kind text rendering.

use textstream_format::{
    base_tag, integer_digits, significant_decimals, split, unsigned_digits, Base, BoolFormat,
    BufferFormat, Case, FixedMode, FloatFormat, FractionDigits, IntFormat, Precision,
};

use super::traits::{ByteSink, Encode};
use crate::stream::Stream;

impl<T: ByteSink> Stream<T> {
    /// Encode one value without directives.
    pub fn encode<V: Encode + ?Sized>(&mut self, value: &V) -> &mut Self {
        value.encode(self, &());
        self
    }

    /// Encode one value under a directive set.
    ///
    /// # Example
    ///
    /// ```
    /// use textstream::{Base, Case, Stream};
    ///
    /// let mut stream = Stream::new(heapless::Vec::<u8, 16>::new());
    /// stream.encode_with(&0xBEEFu16, (Case::Lower, Base::HEX.prefixed()));
    /// assert_eq!(stream.transport().as_slice(), b"0xbeef");
    /// ```
    pub fn encode_with<D, V: Encode<D> + ?Sized>(&mut self, value: &V, directives: D) -> &mut Self {
        value.encode(self, &directives);
        self
    }

    /// Write one byte, keeping the cursor up to date.
    #[inline]
    pub fn write_byte(&mut self, byte: u8) {
        self.cursor_mut().advance(byte);
        self.io.write(byte);
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.write_byte(byte);
        }
    }

    /// End the current value, writing the terminator if one is set.
    pub fn finish_write(&mut self) {
        if let Some(end) = self.terminator() {
            self.write_byte(end);
        }
    }

    fn write_folded(&mut self, byte: u8, case: Option<Case>) {
        self.write_byte(case.map_or(byte, |case| case.apply(byte)));
    }

    /// Sign, base announcement, then digits.
    pub(crate) fn write_integer(&mut self, negative: bool, magnitude: u128, format: IntFormat) {
        if negative {
            self.write_byte(b'-');
        }
        let radix = match format.base {
            Some(base) => {
                self.write_bytes(base_tag(base).as_bytes());
                base.radix()
            }
            None => Base::DEC.radix(),
        };
        self.write_bytes(unsigned_digits(magnitude, radix, format.case).as_bytes());
    }

    /// The sign follows the whole value, so `-3.0` is written as `-3`.
    pub(crate) fn write_float(&mut self, value: f64, format: &FloatFormat<'_>) {
        if value.is_nan() {
            self.write_bytes(format.special.nan.as_bytes());
            return;
        }
        if value.is_infinite() {
            let word = if value > 0.0 {
                format.special.positive_infinity
            } else {
                format.special.negative_infinity
            };
            self.write_bytes(word.as_bytes());
            return;
        }

        let parts = split(value);
        if parts.negative {
            self.write_byte(b'-');
        }
        let point = format.point.unwrap_or_default().glyph();

        match format.precision {
            Some(Precision(count)) => {
                self.write_bytes(integer_digits(parts.integer).as_bytes());
                if count > 0 {
                    self.write_byte(point);
                    for digit in FractionDigits::truncated(parts.fraction, count) {
                        self.write_byte(digit);
                    }
                }
            }
            None => {
                let decimals = significant_decimals(parts.fraction);
                let integer = if decimals.count == 0 && decimals.round_up {
                    parts.integer + 1.0
                } else {
                    parts.integer
                };
                self.write_bytes(integer_digits(integer).as_bytes());
                if decimals.count > 0 {
                    self.write_byte(point);
                    for digit in FractionDigits::rounded(parts.fraction, decimals) {
                        self.write_byte(digit);
                    }
                }
            }
        }
    }

    pub(crate) fn write_bool(&mut self, value: bool, format: &BoolFormat<'_>) {
        let word = match format.words {
            Some(words) => words.word(value),
            None if cfg!(feature = "fast-bool") => {
                if value {
                    "1"
                } else {
                    "0"
                }
            }
            None => {
                if value {
                    "true"
                } else {
                    "false"
                }
            }
        };
        self.write_bytes(word.as_bytes());
    }

    /// ASCII is case folded; anything else is written as UTF-8.
    pub(crate) fn write_char(&mut self, value: char, case: Option<Case>) {
        if let Ok(byte) = u8::try_from(value) {
            if byte.is_ascii() {
                self.write_folded(byte, case);
                return;
            }
        }
        let mut utf8 = [0u8; 4];
        self.write_bytes(value.encode_utf8(&mut utf8).as_bytes());
    }

    pub(crate) fn write_text(&mut self, text: &str, case: Option<Case>) {
        for &byte in text.as_bytes() {
            self.write_folded(byte, case);
        }
    }

    /// Contents of a NUL-terminated buffer.
    ///
    /// Without a directive everything up to the first NUL is written.
    pub(crate) fn write_buffer(&mut self, buf: &[u8], format: BufferFormat) {
        let (limit, stop_at_nul) = match format.fixed {
            None => (buf.len(), true),
            Some(fixed) => (
                fixed.size.min(buf.len()).saturating_sub(1),
                fixed.mode == FixedMode::Max,
            ),
        };
        for &byte in &buf[..limit] {
            if stop_at_nul && byte == 0 {
                break;
            }
            self.write_folded(byte, format.case);
        }
    }
}
