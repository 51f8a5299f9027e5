//! Digit tables and no-alloc digit rendering.
//!
//! Numbers are rendered back to front into a fixed stack buffer sized for
//! the widest value in the smallest radix, then handed out as a slice.

use crate::directive::{Base, BaseDisplay, Case};

/// Smallest supported radix.
pub const MIN_RADIX: u8 = 2;

/// Largest supported radix (`0-9` then `A-Z`).
pub const MAX_RADIX: u8 = 36;

/// Bytes needed for any `u128` in base 2.
pub const INTEGER_DIGITS: usize = 128;

/// Bytes needed for the integer part of any finite `f64`.
pub const FLOAT_INTEGER_DIGITS: usize = 310;

const UPPER: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWER: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Why a byte is not a digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DigitError {
    /// Not alphanumeric.
    NotANumber,
    /// A letter of the case the active directive excludes.
    WrongCase,
}

impl core::fmt::Display for DigitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotANumber => write!(f, "not a digit"),
            Self::WrongCase => write!(f, "digit letter has the wrong case"),
        }
    }
}

/// Value of a digit character: `0-9` is 0..=9, letters are 10..=35.
///
/// Without `case` both letter ranges are accepted. The result is not checked
/// against any radix.
///
/// # Example
///
/// ```
/// use textstream_format::{digit_value, Case, DigitError};
///
/// assert_eq!(digit_value(b'7', None), Ok(7));
/// assert_eq!(digit_value(b'f', None), Ok(15));
/// assert_eq!(digit_value(b'F', Some(Case::Lower)), Err(DigitError::WrongCase));
/// assert_eq!(digit_value(b'.', None), Err(DigitError::NotANumber));
/// ```
#[inline]
pub fn digit_value(byte: u8, case: Option<Case>) -> Result<u8, DigitError> {
    match byte {
        b'0'..=b'9' => Ok(byte - b'0'),
        b'A'..=b'Z' | b'a'..=b'z' if case.is_some_and(|c| c.rejects(byte)) => {
            Err(DigitError::WrongCase)
        }
        b'A'..=b'Z' => Ok(byte - b'A' + 10),
        b'a'..=b'z' => Ok(byte - b'a' + 10),
        _ => Err(DigitError::NotANumber),
    }
}

/// Character for a digit value below 36. Letters are uppercase unless
/// `case` asks for lowercase.
///
/// # Panics
///
/// Panics if `value >= 36`.
#[inline]
#[must_use]
pub fn digit_char(value: u8, case: Option<Case>) -> u8 {
    match case {
        Some(Case::Lower) => LOWER[usize::from(value)],
        _ => UPPER[usize::from(value)],
    }
}

/// Digits rendered into a right-aligned stack buffer.
#[derive(Clone, Copy)]
pub struct Digits<const N: usize> {
    buf: [u8; N],
    start: usize,
}

impl<const N: usize> Digits<N> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buf: [0; N],
            start: N,
        }
    }

    /// The rendered text.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[self.start..]
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        N - self.start
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == N
    }

    #[inline]
    fn push_front(&mut self, byte: u8) {
        debug_assert!(self.start > 0, "digit buffer too small");
        self.start -= 1;
        self.buf[self.start] = byte;
    }

    /// Render `value` in `radix`, always producing at least one digit.
    fn fill_unsigned(&mut self, mut value: u128, radix: u8, case: Option<Case>) {
        let radix_wide = u128::from(radix);
        loop {
            // The remainder is below radix, so it fits a u8.
            self.push_front(digit_char((value % radix_wide) as u8, case));
            value /= radix_wide;
            if value == 0 {
                break;
            }
        }
    }
}

impl<const N: usize> Default for Digits<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> core::fmt::Debug for Digits<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Digits").field(&self.as_bytes()).finish()
    }
}

/// Render an unsigned magnitude in `radix` (clamped to 2..=36).
///
/// # Example
///
/// ```
/// use textstream_format::{unsigned_digits, Case};
///
/// assert_eq!(unsigned_digits(255, 16, None).as_bytes(), b"FF");
/// assert_eq!(unsigned_digits(255, 16, Some(Case::Lower)).as_bytes(), b"ff");
/// assert_eq!(unsigned_digits(0, 2, None).as_bytes(), b"0");
/// ```
#[must_use]
pub fn unsigned_digits(value: u128, radix: u8, case: Option<Case>) -> Digits<INTEGER_DIGITS> {
    let mut digits = Digits::new();
    digits.fill_unsigned(value, Base::new(radix).radix(), case);
    digits
}

/// Largest float that still converts exactly into a `u128`.
const U128_LIMIT: f64 = 340_282_366_920_938_463_463_374_607_431_768_211_456.0;

/// Render a non-negative integral float in base 10.
///
/// Magnitudes beyond `u128` are rendered digit by digit in floating point.
#[must_use]
pub fn integer_digits(value: f64) -> Digits<FLOAT_INTEGER_DIGITS> {
    let mut digits = Digits::new();
    if value < U128_LIMIT {
        digits.fill_unsigned(value as u128, 10, None);
        return digits;
    }
    let mut rest = libm::trunc(value);
    while rest >= 1.0 && digits.start > 0 {
        let digit = libm::fmod(rest, 10.0) as u8;
        digits.push_front(b'0' + digit.min(9));
        rest = libm::trunc(rest / 10.0);
    }
    digits
}

/// Base prefix or tag, at most `<B36>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BaseTag {
    buf: [u8; 5],
    len: u8,
}

impl BaseTag {
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..usize::from(self.len)]
    }

    fn from_slice(bytes: &[u8]) -> Self {
        let mut tag = Self {
            buf: [0; 5],
            len: 0,
        };
        tag.buf[..bytes.len()].copy_from_slice(bytes);
        tag.len = bytes.len() as u8;
        tag
    }

    fn full(radix: u8) -> Self {
        let mut tag = Self {
            buf: [0; 5],
            len: 0,
        };
        let mut push = |byte: u8| {
            tag.buf[usize::from(tag.len)] = byte;
            tag.len += 1;
        };
        push(b'<');
        push(b'B');
        if radix >= 10 {
            push(b'0' + radix / 10);
        }
        push(b'0' + radix % 10);
        push(b'>');
        tag
    }
}

/// The text that announces `base` in front of its digits.
///
/// # Example
///
/// ```
/// use textstream_format::{base_tag, Base};
///
/// assert_eq!(base_tag(Base::HEX).as_bytes(), b"");
/// assert_eq!(base_tag(Base::HEX.prefixed()).as_bytes(), b"0x");
/// assert_eq!(base_tag(Base::new(5).prefixed()).as_bytes(), b"<B5>");
/// assert_eq!(base_tag(Base::DEC.full()).as_bytes(), b"<B10>");
/// ```
#[must_use]
pub fn base_tag(base: Base) -> BaseTag {
    match (base.display(), base.radix()) {
        (BaseDisplay::Bare, _) | (BaseDisplay::Prefix, 10) => BaseTag::from_slice(b""),
        (BaseDisplay::Prefix, 16) => BaseTag::from_slice(b"0x"),
        (BaseDisplay::Prefix, 8) => BaseTag::from_slice(b"0"),
        (BaseDisplay::Prefix, 2) => BaseTag::from_slice(b"B"),
        (_, radix) => BaseTag::full(radix),
    }
}
