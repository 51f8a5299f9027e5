//! Floating point rendering rules.
//!
//! Without a precision directive, the number of fractional digits is picked by
//! a round-to-significant scan: successive fractional digits are inspected and
//! the scan stops once two zeros or two nines in a row are seen, or after six
//! digits. Runs of nines round the last printed digit up. This keeps binary
//! representation noise (`0.1` stored as `0.1000000000000000055...`) out of the
//! text while staying loop bounded and allocation free.

/// Most fractional digits the scan will ever print.
pub const MAX_SIGNIFICANT_DECIMALS: u8 = 6;

/// Length of a zero or nine run that ends the scan.
const RUN_LIMIT: u8 = 2;

/// A finite value split into sign, integer part and fractional part.
///
/// Both parts are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parts {
    pub negative: bool,
    pub integer: f64,
    pub fraction: f64,
}

/// Split `value` with `modf`.
///
/// `negative` follows the whole value rather than the fractional remainder,
/// so whole negatives such as `-3.0` keep their sign. `-0.0` and `0.0` both
/// split as positive.
///
/// # Example
///
/// ```
/// use textstream_format::split;
///
/// let parts = split(-12.25);
/// assert!(parts.negative);
/// assert_eq!(parts.integer, 12.0);
/// assert_eq!(parts.fraction, 0.25);
/// ```
#[must_use]
pub fn split(value: f64) -> Parts {
    let (fraction, integer) = libm::modf(value);
    Parts {
        negative: value < 0.0,
        integer: libm::fabs(integer),
        fraction: libm::fabs(fraction),
    }
}

/// Outcome of the round-to-significant scan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Decimals {
    /// Fractional digits to print.
    pub count: u8,
    /// Round the last printed digit up, or the integer part when `count` is 0.
    pub round_up: bool,
}

/// Run the round-to-significant scan over a fraction in `[0, 1)`.
///
/// # Example
///
/// ```
/// use textstream_format::significant_decimals;
///
/// assert_eq!(significant_decimals(0.1).count, 1);
/// assert_eq!(significant_decimals(0.0).count, 0);
///
/// let carried = significant_decimals(0.9999999995);
/// assert_eq!(carried.count, 0);
/// assert!(carried.round_up);
/// ```
#[must_use]
pub fn significant_decimals(fraction: f64) -> Decimals {
    let mut rest = fraction;
    let mut zeros = 0u8;
    let mut nines = 0u8;
    let mut count = 0u8;
    let mut round_up = false;

    while zeros < RUN_LIMIT && nines < RUN_LIMIT && count < MAX_SIGNIFICANT_DECIMALS {
        rest *= 10.0;
        let digit = rest as u8;
        match digit {
            0 => {
                zeros += 1;
                count += nines;
                nines = 0;
            }
            9 => {
                nines += 1;
                count += zeros;
                zeros = 0;
                rest -= 9.0;
            }
            _ => {
                count += 1 + zeros + nines;
                zeros = 0;
                nines = 0;
                rest -= f64::from(digit);
            }
        }
    }

    // Zeros followed by a nine: the zeros are really a carried digit.
    if zeros > 0 && (rest * 10.0) as u8 == 9 {
        count += zeros;
        round_up = true;
    }
    if nines > 0 {
        round_up = true;
    }

    Decimals { count, round_up }
}

/// Iterator over the ASCII fractional digits of a fraction in `[0, 1)`.
#[derive(Clone, Debug)]
pub struct FractionDigits {
    rest: f64,
    remaining: u8,
    round_up: bool,
}

impl FractionDigits {
    /// Exactly `count` digits, truncated.
    #[must_use]
    pub fn truncated(fraction: f64, count: u8) -> Self {
        Self {
            rest: fraction,
            remaining: count,
            round_up: false,
        }
    }

    /// The digits chosen by [`significant_decimals`].
    #[must_use]
    pub fn rounded(fraction: f64, decimals: Decimals) -> Self {
        Self {
            rest: fraction,
            remaining: decimals.count,
            round_up: decimals.round_up,
        }
    }
}

impl Iterator for FractionDigits {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.rest *= 10.0;
        let mut digit = (self.rest as u8).min(9);
        self.rest -= f64::from(digit);
        if self.remaining == 0 && self.round_up {
            digit = (digit + 1).min(9);
        }
        Some(b'0' + digit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.remaining);
        (n, Some(n))
    }
}

impl ExactSizeIterator for FractionDigits {}
