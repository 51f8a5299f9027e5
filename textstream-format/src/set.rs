//! Directive sets: which combinations of dimensions are legal for which value
//! kind.
//!
//! A directive set is `()`, a single dimension, or a tuple of two or three
//! distinct dimensions in any order. Each value kind accepts exactly the sets
//! listed below; anything else fails to compile.
//!
//! | value kind       | legal sets                                                 |
//! |------------------|------------------------------------------------------------|
//! | integers         | `()`, `Base`, `Base + Case`                                |
//! | floats           | any subset of `DecimalPoint`, `Precision`, `SpecialNumbers`|
//! | `bool`           | `()`, `BoolWords`                                          |
//! | `char`, strings  | `()`, `Case`                                               |
//! | fixed buffers    | `()`, `FixedString`, `FixedString + Case`                  |
//!
//! ```compile_fail
//! use textstream_format::{Case, IntDirectives};
//!
//! fn int_only<D: IntDirectives>(_: D) {}
//! int_only(Case::Upper); // Case alone is meaningless for integers
//! ```
//!
//! ```compile_fail
//! use textstream_format::{FloatDirectives, Precision};
//!
//! fn float_only<D: FloatDirectives>(_: D) {}
//! float_only((Precision(2), Precision(3))); // duplicate dimension
//! ```

use crate::directive::{
    Base, BoolWords, Case, DecimalPoint, FixedString, Precision, SpecialNumbers,
};

mod sealed {
    pub trait Sealed {}
}

use sealed::Sealed;

/// Resolved format for integral values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IntFormat {
    pub base: Option<Base>,
    pub case: Option<Case>,
}

/// Resolved format for floating point values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FloatFormat<'a> {
    pub point: Option<DecimalPoint>,
    pub precision: Option<Precision>,
    pub special: SpecialNumbers<'a>,
}

impl Default for FloatFormat<'_> {
    fn default() -> Self {
        Self {
            point: None,
            precision: None,
            special: SpecialNumbers::SHORT,
        }
    }
}

/// Resolved format for booleans.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoolFormat<'a> {
    pub words: Option<BoolWords<'a>>,
}

/// Resolved format for characters and strings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TextFormat {
    pub case: Option<Case>,
}

/// Resolved format for fixed character buffers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BufferFormat {
    pub fixed: Option<FixedString>,
    pub case: Option<Case>,
}

/// Directive sets accepted by integral values.
pub trait IntDirectives: Sealed {
    fn int_format(&self) -> IntFormat;
}

/// Directive sets accepted by floating point values.
pub trait FloatDirectives: Sealed {
    fn float_format(&self) -> FloatFormat<'_>;
}

/// Directive sets accepted by booleans.
pub trait BoolDirectives: Sealed {
    fn bool_format(&self) -> BoolFormat<'_>;
}

/// Directive sets accepted by characters and strings.
pub trait TextDirectives: Sealed {
    fn text_format(&self) -> TextFormat;
}

/// Directive sets accepted by fixed character buffers.
pub trait BufferDirectives: Sealed {
    fn buffer_format(&self) -> BufferFormat;
}

impl Sealed for () {}

impl IntDirectives for () {
    fn int_format(&self) -> IntFormat {
        IntFormat::default()
    }
}

impl FloatDirectives for () {
    fn float_format(&self) -> FloatFormat<'_> {
        FloatFormat::default()
    }
}

impl BoolDirectives for () {
    fn bool_format(&self) -> BoolFormat<'_> {
        BoolFormat::default()
    }
}

impl TextDirectives for () {
    fn text_format(&self) -> TextFormat {
        TextFormat::default()
    }
}

impl BufferDirectives for () {
    fn buffer_format(&self) -> BufferFormat {
        BufferFormat::default()
    }
}

// Integers

impl Sealed for Base {}

impl IntDirectives for Base {
    fn int_format(&self) -> IntFormat {
        IntFormat {
            base: Some(*self),
            case: None,
        }
    }
}

impl Sealed for (Base, Case) {}

impl IntDirectives for (Base, Case) {
    fn int_format(&self) -> IntFormat {
        IntFormat {
            base: Some(self.0),
            case: Some(self.1),
        }
    }
}

impl Sealed for (Case, Base) {}

impl IntDirectives for (Case, Base) {
    fn int_format(&self) -> IntFormat {
        (self.1, self.0).int_format()
    }
}

// Booleans

impl Sealed for BoolWords<'_> {}

impl BoolDirectives for BoolWords<'_> {
    fn bool_format(&self) -> BoolFormat<'_> {
        BoolFormat { words: Some(*self) }
    }
}

// Characters and strings

impl Sealed for Case {}

impl TextDirectives for Case {
    fn text_format(&self) -> TextFormat {
        TextFormat { case: Some(*self) }
    }
}

// Fixed buffers

impl Sealed for FixedString {}

impl BufferDirectives for FixedString {
    fn buffer_format(&self) -> BufferFormat {
        BufferFormat {
            fixed: Some(*self),
            case: None,
        }
    }
}

impl Sealed for (FixedString, Case) {}

impl BufferDirectives for (FixedString, Case) {
    fn buffer_format(&self) -> BufferFormat {
        BufferFormat {
            fixed: Some(self.0),
            case: Some(self.1),
        }
    }
}

impl Sealed for (Case, FixedString) {}

impl BufferDirectives for (Case, FixedString) {
    fn buffer_format(&self) -> BufferFormat {
        (self.1, self.0).buffer_format()
    }
}

// Floats: every ordering of every non-empty subset of the three dimensions.

trait FloatPart {
    fn apply<'s>(&'s self, format: &mut FloatFormat<'s>);
}

impl FloatPart for DecimalPoint {
    fn apply<'s>(&'s self, format: &mut FloatFormat<'s>) {
        format.point = Some(*self);
    }
}

impl FloatPart for Precision {
    fn apply<'s>(&'s self, format: &mut FloatFormat<'s>) {
        format.precision = Some(*self);
    }
}

impl FloatPart for SpecialNumbers<'_> {
    fn apply<'s>(&'s self, format: &mut FloatFormat<'s>) {
        format.special = *self;
    }
}

macro_rules! float_single {
    ($($part:ty),+ $(,)?) => {$(
        impl Sealed for $part {}

        impl FloatDirectives for $part {
            fn float_format(&self) -> FloatFormat<'_> {
                let mut format = FloatFormat::default();
                self.apply(&mut format);
                format
            }
        }
    )+};
}

macro_rules! float_pair {
    ($(($a:ty, $b:ty)),+ $(,)?) => {$(
        impl Sealed for ($a, $b) {}

        impl FloatDirectives for ($a, $b) {
            fn float_format(&self) -> FloatFormat<'_> {
                let mut format = FloatFormat::default();
                self.0.apply(&mut format);
                self.1.apply(&mut format);
                format
            }
        }
    )+};
}

macro_rules! float_triple {
    ($(($a:ty, $b:ty, $c:ty)),+ $(,)?) => {$(
        impl Sealed for ($a, $b, $c) {}

        impl FloatDirectives for ($a, $b, $c) {
            fn float_format(&self) -> FloatFormat<'_> {
                let mut format = FloatFormat::default();
                self.0.apply(&mut format);
                self.1.apply(&mut format);
                self.2.apply(&mut format);
                format
            }
        }
    )+};
}

float_single!(DecimalPoint, Precision, SpecialNumbers<'_>);

float_pair!(
    (DecimalPoint, Precision),
    (Precision, DecimalPoint),
    (DecimalPoint, SpecialNumbers<'_>),
    (SpecialNumbers<'_>, DecimalPoint),
    (Precision, SpecialNumbers<'_>),
    (SpecialNumbers<'_>, Precision),
);

float_triple!(
    (DecimalPoint, Precision, SpecialNumbers<'_>),
    (DecimalPoint, SpecialNumbers<'_>, Precision),
    (Precision, DecimalPoint, SpecialNumbers<'_>),
    (Precision, SpecialNumbers<'_>, DecimalPoint),
    (SpecialNumbers<'_>, DecimalPoint, Precision),
    (SpecialNumbers<'_>, Precision, DecimalPoint),
);
