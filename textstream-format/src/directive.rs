//! Format dimensions: the small value objects a caller attaches to a conversion.
//!
//! Each dimension describes one orthogonal aspect of the text form of a value.
//! They are `Copy`, own nothing and are consumed by a single conversion call.

use crate::digits::{MAX_RADIX, MIN_RADIX};

/// How a numeric base is made visible in the text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BaseDisplay {
    /// Digits only.
    #[default]
    Bare,
    /// Canonical prefix: `0x`, `0`, `B`, nothing for base 10, `<Bn>` otherwise.
    Prefix,
    /// Always the full `<Bn>` tag.
    Full,
}

/// Numeric radix (2..=36) plus its display mode.
///
/// # Example
///
/// ```
/// use textstream_format::{Base, BaseDisplay};
///
/// let hex = Base::HEX.prefixed();
/// assert_eq!(hex.radix(), 16);
/// assert_eq!(hex.display(), BaseDisplay::Prefix);
///
/// // Out of range radices are clamped.
/// assert_eq!(Base::new(1).radix(), 2);
/// assert_eq!(Base::new(99).radix(), 36);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Base {
    radix: u8,
    display: BaseDisplay,
}

impl Base {
    pub const BIN: Self = Self::new(2);
    pub const OCT: Self = Self::new(8);
    pub const DEC: Self = Self::new(10);
    pub const HEX: Self = Self::new(16);

    /// Create a bare base, clamping `radix` into 2..=36.
    #[must_use]
    pub const fn new(radix: u8) -> Self {
        let radix = if radix < MIN_RADIX {
            MIN_RADIX
        } else if radix > MAX_RADIX {
            MAX_RADIX
        } else {
            radix
        };
        Self {
            radix,
            display: BaseDisplay::Bare,
        }
    }

    /// Same radix, emitted with its canonical prefix.
    #[must_use]
    pub const fn prefixed(self) -> Self {
        self.with_display(BaseDisplay::Prefix)
    }

    /// Same radix, emitted with the full `<Bn>` tag.
    #[must_use]
    pub const fn full(self) -> Self {
        self.with_display(BaseDisplay::Full)
    }

    #[must_use]
    pub const fn with_display(self, display: BaseDisplay) -> Self {
        Self {
            radix: self.radix,
            display,
        }
    }

    #[inline]
    #[must_use]
    pub const fn radix(self) -> u8 {
        self.radix
    }

    #[inline]
    #[must_use]
    pub const fn display(self) -> BaseDisplay {
        self.display
    }
}

impl Default for Base {
    fn default() -> Self {
        Self::DEC
    }
}

/// Letter case for digits above 9 and for character data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Case {
    Upper,
    Lower,
}

impl Case {
    /// Fold an ASCII letter into this case. Other bytes pass through.
    #[inline]
    #[must_use]
    pub const fn apply(self, byte: u8) -> u8 {
        match self {
            Self::Upper => byte.to_ascii_uppercase(),
            Self::Lower => byte.to_ascii_lowercase(),
        }
    }

    /// True if `byte` is a letter of the opposite case.
    #[inline]
    #[must_use]
    pub const fn rejects(self, byte: u8) -> bool {
        match self {
            Self::Upper => byte.is_ascii_lowercase(),
            Self::Lower => byte.is_ascii_uppercase(),
        }
    }
}

/// Spelling pair for boolean values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoolWords<'a> {
    pub true_word: &'a str,
    pub false_word: &'a str,
}

impl<'a> BoolWords<'a> {
    pub const WORD: BoolWords<'static> = BoolWords::new("true", "false");
    pub const CAPITAL: BoolWords<'static> = BoolWords::new("True", "False");
    pub const CAPS: BoolWords<'static> = BoolWords::new("TRUE", "FALSE");
    pub const NUM: BoolWords<'static> = BoolWords::new("1", "0");

    #[must_use]
    pub const fn new(true_word: &'a str, false_word: &'a str) -> Self {
        Self {
            true_word,
            false_word,
        }
    }

    /// The spelling for `value`.
    #[inline]
    #[must_use]
    pub const fn word(self, value: bool) -> &'a str {
        if value {
            self.true_word
        } else {
            self.false_word
        }
    }
}

/// Glyph separating the integer and fractional parts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecimalPoint {
    #[default]
    Dot,
    Comma,
}

impl DecimalPoint {
    #[inline]
    #[must_use]
    pub const fn glyph(self) -> u8 {
        match self {
            Self::Dot => b'.',
            Self::Comma => b',',
        }
    }
}

/// Fixed number of fractional digits.
///
/// Encoding truncates to exactly this many digits; decoding rejects any
/// digit past it with `WrongPrecision`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Precision(pub u8);

/// Spellings for NaN, positive infinity and negative infinity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpecialNumbers<'a> {
    pub nan: &'a str,
    pub positive_infinity: &'a str,
    pub negative_infinity: &'a str,
}

impl<'a> SpecialNumbers<'a> {
    /// Default spelling, used when no directive is given.
    pub const SHORT: SpecialNumbers<'static> = SpecialNumbers::new("nan", "inf+", "inf-");
    pub const LONG: SpecialNumbers<'static> =
        SpecialNumbers::new("not-a-number", "positive-infinity", "negative-infinity");

    #[must_use]
    pub const fn new(nan: &'a str, positive_infinity: &'a str, negative_infinity: &'a str) -> Self {
        Self {
            nan,
            positive_infinity,
            negative_infinity,
        }
    }

    /// The three spellings in match order: NaN, +Inf, -Inf.
    #[inline]
    #[must_use]
    pub const fn words(self) -> [&'a str; 3] {
        [self.nan, self.positive_infinity, self.negative_infinity]
    }
}

impl Default for SpecialNumbers<'_> {
    fn default() -> Self {
        SpecialNumbers::SHORT
    }
}

/// Sizing rule for a fixed character buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FixedMode {
    /// Exactly `size - 1` characters, embedded NULs included.
    Exact,
    /// Up to `size - 1` characters, stopping at a NUL.
    #[default]
    Max,
}

/// Declared byte width of a NUL-terminated buffer.
///
/// `size` counts the terminator, so at most `size - 1` characters are
/// transferred. It is clamped to the length of the buffer it is used with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FixedString {
    pub size: usize,
    pub mode: FixedMode,
}

impl FixedString {
    #[must_use]
    pub const fn new(size: usize, mode: FixedMode) -> Self {
        Self { size, mode }
    }

    #[must_use]
    pub const fn exact(size: usize) -> Self {
        Self::new(size, FixedMode::Exact)
    }

    #[must_use]
    pub const fn max(size: usize) -> Self {
        Self::new(size, FixedMode::Max)
    }
}
