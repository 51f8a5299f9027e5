//! Sticky fail reasons.

use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

/// Bitmask of reasons a decode failed.
///
/// A stream ORs reasons into its mask as conversions fail and never clears
/// them on its own: after a *sequence* of conversions the mask tells whether
/// any of them failed, and why. Callers clear bits explicitly with
/// [`Stream::clear_fails`](crate::Stream::clear_fails) or
/// [`Stream::clear_fail`](crate::Stream::clear_fail). Forgetting to clear
/// makes later successful conversions look failed.
///
/// # Example
///
/// ```
/// use textstream::Fails;
///
/// let fails = Fails::WRONG_BASE | Fails::NO_DATA;
/// assert!(fails.contains(Fails::WRONG_BASE));
/// assert!(!fails.contains(Fails::NOT_A_NUMBER));
/// assert_eq!(fails.raw(), (1 << 5) | (1 << 11));
/// ```
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Fails(pub u16);

impl Fails {
    pub const NOT_A_NUMBER: Self = Self(1 << 0);
    pub const OVERFLOW: Self = Self(1 << 1); // Value or string capacity exceeded
    pub const NOT_A_BOOL: Self = Self(1 << 2);
    pub const NOT_A_CHAR: Self = Self(1 << 3);
    pub const WRONG_FORMAT: Self = Self(1 << 4); // Malformed `<Bn>` tag
    pub const WRONG_BASE: Self = Self(1 << 5);
    pub const WRONG_CASE: Self = Self(1 << 6);
    pub const WRONG_DECIMAL_POINT: Self = Self(1 << 7);
    pub const WRONG_PRECISION: Self = Self(1 << 8);
    pub const WRONG_CSTRING: Self = Self(1 << 10);
    pub const NO_DATA: Self = Self(1 << 11);

    /// No failure recorded.
    pub const NONE: Self = Self(0);

    const NAMES: [(Self, &'static str); 11] = [
        (Self::NOT_A_NUMBER, "not a number"),
        (Self::OVERFLOW, "overflow"),
        (Self::NOT_A_BOOL, "not a bool"),
        (Self::NOT_A_CHAR, "not a char"),
        (Self::WRONG_FORMAT, "wrong format"),
        (Self::WRONG_BASE, "wrong base"),
        (Self::WRONG_CASE, "wrong case"),
        (Self::WRONG_DECIMAL_POINT, "wrong decimal point"),
        (Self::WRONG_PRECISION, "wrong precision"),
        (Self::WRONG_CSTRING, "wrong c-string"),
        (Self::NO_DATA, "no data"),
    ];

    /// Check if all of the given reason(s) are set.
    #[inline]
    #[must_use]
    pub const fn contains(self, reason: Fails) -> bool {
        (self.0 & reason.0) == reason.0
    }

    /// Check if any of the given reason(s) is set.
    #[inline]
    #[must_use]
    pub const fn intersects(self, reason: Fails) -> bool {
        (self.0 & reason.0) != 0
    }

    /// Get the raw u16 value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Check if no reason is set.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Fails {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Fails {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Fails {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for Fails {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl Not for Fails {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        Self(!self.0)
    }
}

impl core::fmt::Display for Fails {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }
        let mut first = true;
        for (reason, name) in Self::NAMES {
            if self.contains(reason) {
                if !first {
                    write!(f, ", ")?;
                }
                write!(f, "{name}")?;
                first = false;
            }
        }
        Ok(())
    }
}
