//! Format directives and rendering rules for the `textstream` text codec.
//!
//! This crate describes *how* a value looks as text, independent of any
//! stream or transport:
//!
//! - **Dimensions**: small value objects a caller attaches to one conversion
//!   - [`Base`] - radix 2..=36 and how it is announced (`0x`, `B`, `<B5>`)
//!   - [`Case`] - letter case of digits and character data
//!   - [`BoolWords`] - spelling pair for booleans
//!   - [`DecimalPoint`] - `.` or `,`
//!   - [`Precision`] - fixed number of fractional digits
//!   - [`SpecialNumbers`] - spellings for NaN and the infinities
//!   - [`FixedString`] - declared width of a NUL-terminated buffer
//!
//! - **Directive sets**: the closed table of which dimension combinations
//!   are legal for which value kind, checked at compile time
//!   ([`IntDirectives`], [`FloatDirectives`], [`BoolDirectives`],
//!   [`TextDirectives`], [`BufferDirectives`])
//!
//! - **Rendering helpers**: digit tables, base tags, the float
//!   round-to-significant scan and a streaming word matcher
//!
//! # Text Forms
//!
//! ```text
//! integers   -42   FF   0xFF   B101   017   <B5>1234
//! floats     3.14  -0,5  nan  inf+  inf-
//! booleans   true  True  TRUE  1  0   (or any caller supplied pair)
//! ```
//!
//! # Example
//!
//! ```
//! use textstream_format::{base_tag, unsigned_digits, Base, Case, IntDirectives};
//!
//! let format = (Base::HEX.prefixed(), Case::Lower).int_format();
//! let base = format.base.unwrap();
//!
//! let mut text = [0u8; 16];
//! let tag = base_tag(base);
//! let digits = unsigned_digits(0xBEEF, base.radix(), format.case);
//! text[..2].copy_from_slice(tag.as_bytes());
//! text[2..6].copy_from_slice(digits.as_bytes());
//! assert_eq!(&text[..6], b"0xbeef");
//! ```
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (for host testing)
//! - **`defmt`**: Enable defmt formatting (for embedded logging)
//!
//! # No-std Support
//!
//! This crate is `#![no_std]` by default and uses no heap allocations.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

pub mod digits;
pub mod directive;
pub mod float;
pub mod set;
pub mod words;

pub use digits::{
    base_tag, digit_char, digit_value, integer_digits, unsigned_digits, BaseTag, DigitError,
    Digits, FLOAT_INTEGER_DIGITS, INTEGER_DIGITS, MAX_RADIX, MIN_RADIX,
};
pub use directive::{
    Base, BaseDisplay, BoolWords, Case, DecimalPoint, FixedMode, FixedString, Precision,
    SpecialNumbers,
};
pub use float::{
    significant_decimals, split, Decimals, FractionDigits, Parts, MAX_SIGNIFICANT_DECIMALS,
};
pub use set::{
    BoolDirectives, BoolFormat, BufferDirectives, BufferFormat, FloatDirectives, FloatFormat,
    IntDirectives, IntFormat, TextDirectives, TextFormat,
};
pub use words::WordMatcher;
