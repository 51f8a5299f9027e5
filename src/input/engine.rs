//! Decode engine: character consumption and per-kind parsing.
//!
//! Every parser follows the same contract. It returns `None` without touching
//! the stream's fail state when the value is empty (the readiness check has
//! already recorded [`Fails::NO_DATA`] if that applies). On a malformed value
//! it records the reason, discards the rest of the value and returns `None`.
//! Ending the value with [`Stream::finish_read`] is left to the caller.

use textstream_format::{
    digit_value, Base, BaseDisplay, BoolFormat, BufferFormat, DigitError, FixedMode, FixedString,
    FloatFormat, IntFormat, SpecialNumbers, TextFormat, WordMatcher, MAX_RADIX, MIN_RADIX,
};

use super::traits::{ByteSource, Decode};
use crate::fail::Fails;
use crate::stream::Stream;

/// Fractional digits stop adding to the mantissa once it reaches this size;
/// later digits are still validated but cannot change an `f64`.
const MANTISSA_LIMIT: f64 = 1e17;

/// Spellings accepted for booleans without a directive: three true, three false.
const BOOL_WORDS: [&str; 6] = ["true", "True", "TRUE", "false", "False", "FALSE"];

/// Sign and magnitude of a decoded integer, before narrowing to the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Integer {
    pub negative: bool,
    pub magnitude: u128,
}

impl Integer {
    /// Signed value, `None` if it does not fit `i128`.
    pub fn to_signed(self) -> Option<i128> {
        if !self.negative {
            return i128::try_from(self.magnitude).ok();
        }
        if self.magnitude == i128::MIN.unsigned_abs() {
            return Some(i128::MIN);
        }
        i128::try_from(self.magnitude).ok().map(|m| -m)
    }
}

impl<T: ByteSource> Stream<T> {
    /// Decode one value without directives.
    pub fn decode<V: Decode + ?Sized>(&mut self, value: &mut V) -> &mut Self {
        value.decode(self, &());
        self
    }

    /// Decode one value under a directive set: a single dimension, or a tuple
    /// of distinct dimensions in any order.
    ///
    /// # Example
    ///
    /// ```
    /// use textstream::{Base, Case, MemoryBuffer, Stream};
    ///
    /// let mut stream = Stream::new(MemoryBuffer::<16>::from_bytes(b"ff"));
    /// let mut value = 0u32;
    /// stream.decode_with(&mut value, (Base::HEX, Case::Lower));
    /// assert_eq!(value, 0xFF);
    /// ```
    pub fn decode_with<D, V: Decode<D> + ?Sized>(&mut self, value: &mut V, directives: D) -> &mut Self {
        value.decode(self, &directives);
        self
    }

    /// Check whether the current value has another character.
    ///
    /// - A terminator at the front of the transport is consumed and ends the
    ///   value.
    /// - An empty transport on the first read of a value asks the transport's
    ///   [`no_data_available`](ByteSource::no_data_available) hook; if that
    ///   gives up, [`Fails::NO_DATA`] is recorded.
    /// - An empty transport later in the value ends it.
    ///
    /// Once a value has ended this keeps returning `false` until
    /// [`finish_read`](Self::finish_read).
    pub fn can_read(&mut self) -> bool {
        if self.ended {
            return false;
        }
        loop {
            if self.io.available() > 0 {
                if let Some(end) = self.terminator() {
                    if self.io.peek() == Some(end) {
                        self.io.read();
                        self.ended = true;
                        return false;
                    }
                }
                self.first_read = false;
                return true;
            }
            if !self.first_read {
                break;
            }
            self.first_read = false;
            if !self.io.no_data_available() {
                self.fail(Fails::NO_DATA);
                break;
            }
        }
        self.ended = true;
        false
    }

    /// Next character of the current value, left in place.
    ///
    /// Never yields the terminator and never consults the no-data hook.
    pub fn peek_data(&mut self) -> Option<u8> {
        if self.ended || self.io.available() == 0 {
            return None;
        }
        let byte = self.io.peek()?;
        if Some(byte) == self.terminator() {
            None
        } else {
            Some(byte)
        }
    }

    /// Consume the next character of the current value.
    pub fn next_byte(&mut self) -> Option<u8> {
        if self.can_read() {
            self.io.read()
        } else {
            None
        }
    }

    /// Discard the rest of the current value, keeping it open.
    pub fn discard(&mut self) {
        while self.next_byte().is_some() {}
    }

    /// Discard the rest of the current value and end it.
    pub fn drain(&mut self) -> &mut Self {
        self.discard();
        self.finish_read();
        self
    }

    /// End the current value; the next read starts a new one.
    pub fn finish_read(&mut self) {
        self.first_read = true;
        self.ended = false;
    }

    fn abort(&mut self, reason: Fails) {
        self.fail(reason);
        self.discard();
    }

    fn reject<R>(&mut self, reason: Fails) -> Option<R> {
        self.abort(reason);
        None
    }

    /// Consume a base announcement at the front of the value.
    ///
    /// A prefix is only recognised if its characters are not digits of
    /// `radix`, the radix the digits will be read in: `B` is a digit from
    /// base 12 up and `x` from base 34 up.
    fn detect_base(&mut self, radix: u8) -> Option<Base> {
        match self.peek_data() {
            Some(b'0') => {
                self.io.read();
                if radix <= 33 && self.peek_data() == Some(b'x') {
                    self.io.read();
                    Some(Base::HEX.prefixed())
                } else {
                    Some(Base::OCT.prefixed())
                }
            }
            Some(b'B') if radix <= 11 => {
                self.io.read();
                Some(Base::BIN.prefixed())
            }
            Some(b'<') => {
                self.io.read();
                self.read_base_tag()
            }
            _ => Some(Base::DEC),
        }
    }

    /// Rest of a `<Bn>` tag after the `<`.
    fn read_base_tag(&mut self) -> Option<Base> {
        if !matches!(self.peek_data(), Some(b'B' | b'b')) {
            return self.reject(Fails::WRONG_FORMAT);
        }
        self.io.read();

        let mut radix: u16 = 0;
        while let Some(digit @ b'0'..=b'9') = self.peek_data() {
            self.io.read();
            radix = (radix * 10 + u16::from(digit - b'0')).min(1000);
        }

        let closed = self.next_byte() == Some(b'>');
        if !closed || radix < u16::from(MIN_RADIX) || radix > u16::from(MAX_RADIX) {
            return self.reject(Fails::WRONG_FORMAT);
        }
        Some(Base::new(radix as u8).full())
    }

    pub(crate) fn read_integer(&mut self, format: IntFormat, signed: bool) -> Option<Integer> {
        if !self.can_read() {
            return None;
        }

        let negative = signed && self.peek_data() == Some(b'-');
        if negative {
            self.io.read();
        }

        let detected = self.detect_base(format.base.map_or(10, Base::radix))?;
        let (radix, mismatch) = match format.base {
            Some(base) => (
                base.radix(),
                base.display() != BaseDisplay::Bare && detected.radix() != base.radix(),
            ),
            None => (detected.radix(), false),
        };

        let radix_wide = u128::from(radix);
        let mut magnitude: u128 = 0;
        while let Some(byte) = self.next_byte() {
            let digit = match digit_value(byte, format.case) {
                Ok(digit) if digit < radix => digit,
                Ok(_) => return self.reject(Fails::WRONG_BASE),
                Err(DigitError::WrongCase) => return self.reject(Fails::WRONG_CASE),
                Err(DigitError::NotANumber) => return self.reject(Fails::NOT_A_NUMBER),
            };
            magnitude = match magnitude
                .checked_mul(radix_wide)
                .and_then(|m| m.checked_add(u128::from(digit)))
            {
                Some(m) => m,
                None => return self.reject(Fails::OVERFLOW),
            };
        }

        // An empty or zero numeral cannot contradict the requested base.
        if mismatch && magnitude != 0 {
            self.fail(Fails::WRONG_BASE);
        }
        Some(Integer {
            negative,
            magnitude,
        })
    }

    pub(crate) fn read_float(&mut self, format: &FloatFormat<'_>) -> Option<f64> {
        if !self.can_read() {
            return None;
        }
        if !matches!(self.peek_data(), Some(b'0'..=b'9' | b'-')) {
            return self.read_special(format.special);
        }

        let negative = self.peek_data() == Some(b'-');
        if negative {
            self.io.read();
        }

        let mut integer = 0.0f64;
        let mut mantissa = 0.0f64;
        let mut scale = 1.0f64;
        let mut decimals: u8 = 0;
        let mut in_fraction = false;
        loop {
            let precision_reached = format
                .precision
                .is_some_and(|precision| in_fraction && decimals >= precision.0);
            if precision_reached {
                break;
            }
            let Some(byte) = self.next_byte() else {
                break;
            };
            match byte {
                b'.' | b',' => {
                    if format.point.is_some_and(|point| point.glyph() != byte) {
                        return self.reject(Fails::WRONG_DECIMAL_POINT);
                    }
                    if in_fraction {
                        return self.reject(Fails::NOT_A_NUMBER);
                    }
                    in_fraction = true;
                }
                b'0'..=b'9' => {
                    let digit = f64::from(byte - b'0');
                    if in_fraction {
                        if mantissa < MANTISSA_LIMIT {
                            mantissa = mantissa * 10.0 + digit;
                            scale *= 10.0;
                        }
                        decimals = decimals.saturating_add(1);
                    } else {
                        integer = integer * 10.0 + digit;
                    }
                }
                _ => return self.reject(Fails::NOT_A_NUMBER),
            }
        }

        if format.precision.is_some() && self.can_read() {
            return self.reject(Fails::WRONG_PRECISION);
        }

        let value = integer + mantissa / scale;
        Some(if negative { -value } else { value })
    }

    /// Whole value as a word, matched against the special-number spellings.
    fn read_special(&mut self, special: SpecialNumbers<'_>) -> Option<f64> {
        let mut matcher = WordMatcher::new(special.words());
        while let Some(byte) = self.next_byte() {
            matcher.feed(byte);
        }
        match matcher.matched() {
            Some(0) => Some(f64::NAN),
            Some(1) => Some(f64::INFINITY),
            Some(_) => Some(f64::NEG_INFINITY),
            None => self.reject(Fails::NOT_A_NUMBER),
        }
    }

    pub(crate) fn read_bool(&mut self, format: &BoolFormat<'_>) -> Option<bool> {
        if !self.can_read() {
            return None;
        }

        if let Some(words) = format.words {
            let mut matcher = WordMatcher::new([words.true_word, words.false_word]);
            while let Some(byte) = self.next_byte() {
                matcher.feed(byte);
            }
            return match matcher.matched() {
                Some(index) => Some(index == 0),
                None => self.reject(Fails::NOT_A_BOOL),
            };
        }

        if let Some(digit @ (b'0' | b'1')) = self.peek_data() {
            self.io.read();
            if self.can_read() {
                return self.reject(Fails::NOT_A_BOOL);
            }
            return Some(digit == b'1');
        }

        let mut matcher = WordMatcher::new(BOOL_WORDS);
        while let Some(byte) = self.next_byte() {
            matcher.feed(byte);
        }
        match matcher.matched() {
            Some(index) => Some(index < 3),
            None => self.reject(Fails::NOT_A_BOOL),
        }
    }

    pub(crate) fn read_char(&mut self, format: TextFormat) -> Option<u8> {
        let byte = self.next_byte()?;
        if format.case.is_some_and(|case| case.rejects(byte)) {
            return self.reject(Fails::WRONG_CASE);
        }
        if self.can_read() {
            return self.reject(Fails::NOT_A_CHAR);
        }
        Some(byte)
    }

    /// Replace `text` with the rest of the value. Each byte becomes one
    /// `char` (Latin-1).
    pub(crate) fn read_text<const N: usize>(
        &mut self,
        text: &mut heapless::String<N>,
        format: TextFormat,
    ) {
        if !self.can_read() {
            return;
        }
        text.clear();
        while let Some(byte) = self.next_byte() {
            if format.case.is_some_and(|case| case.rejects(byte)) {
                self.abort(Fails::WRONG_CASE);
                return;
            }
            if text.push(char::from(byte)).is_err() {
                self.abort(Fails::OVERFLOW);
                return;
            }
        }
    }

    /// Fill a NUL-terminated buffer.
    ///
    /// Without a [`FixedString`] directive the whole buffer is used in
    /// [`FixedMode::Max`].
    pub(crate) fn read_buffer(&mut self, buf: &mut [u8], format: BufferFormat) {
        if !self.can_read() {
            return;
        }

        let fixed = format.fixed.unwrap_or(FixedString::max(buf.len()));
        let size = fixed.size.min(buf.len());
        if size == 0 {
            self.abort(Fails::WRONG_CSTRING);
            return;
        }

        let limit = size - 1;
        let mut count = 0;
        while count < limit {
            let Some(byte) = self.next_byte() else {
                break;
            };
            if byte == 0 && fixed.mode == FixedMode::Max {
                break;
            }
            if format.case.is_some_and(|case| case.rejects(byte)) {
                buf[count] = 0;
                self.abort(Fails::WRONG_CASE);
                return;
            }
            buf[count] = byte;
            count += 1;
        }
        buf[count] = 0;

        if fixed.mode == FixedMode::Exact && count < limit {
            self.fail(Fails::WRONG_CSTRING);
            return;
        }
        if self.can_read() {
            self.abort(Fails::WRONG_CSTRING);
        }
    }
}
