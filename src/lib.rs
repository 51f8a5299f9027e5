//! Bidirectional text codec for byte streams on `no_std` targets.
//!
//! A [`Stream`] wraps a byte transport and converts typed values to and from
//! their textual form. Integers, floats, booleans, characters, strings and
//! NUL-terminated buffers are supported out of the box, and user types join
//! in through [`Decode`] and [`Encode`].
//!
//! # Overview
//!
//! - [`stream`]: the handle ([`Stream`]), terminator and [`Cursor`]
//! - [`input`]: byte source seam ([`ByteSource`]) and the decode engine
//! - [`output`]: byte sink seam ([`ByteSink`]) and the encode engine
//! - [`fail`]: sticky failure mask ([`Fails`])
//! - [`memory`]: in-memory FIFO transport ([`MemoryBuffer`])
//! - [`format`]: the directive types, re-exported from `textstream-format`
//!
//! # Transfer Protocol
//!
//! With a terminator set, every encoded value is followed by it and every
//! decoded value ends at its first occurrence, which is consumed:
//!
//! ```text
//! 42\n-0x1F\n3.5\ntrue\nhello world\n
//! ```
//!
//! Without a terminator a value ends at the first byte that cannot continue
//! it, or when the transport runs dry.
//!
//! # Example
//!
//! ```rust
//! use textstream::{Base, Case, Fails, MemoryBuffer, Stream, ENDL};
//!
//! let mut stream = Stream::with_terminator(MemoryBuffer::<64>::new(), ENDL);
//! stream
//!     .encode(&-42i16)
//!     .encode_with(&0xBEEFu16, (Base::HEX.prefixed(), Case::Lower));
//!
//! let (mut a, mut b) = (0i16, 0u16);
//! stream.decode(&mut a).decode_with(&mut b, Base::HEX.prefixed());
//! assert_eq!((a, b), (-42, 0xBEEF));
//!
//! // Failures are sticky until cleared
//! let mut c = 0u8;
//! stream.decode(&mut c);
//! assert!(stream.failed_with(Fails::NO_DATA));
//! ```
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (for host testing)
//! - **`defmt`**: Enable defmt formatting and logging (for embedded targets)
//! - **`log`**: Route logging through the `log` facade
//! - **`embedded-io`**: [`Serial`] adapter for `embedded-io` peripherals
//! - **`fast-bool`**: Encode booleans without a directive as `1`/`0`
//!
//! # No-std Support
//!
//! This crate is `#![no_std]` by default and uses no heap allocations.
//! Bounded strings and the memory transport come from `heapless`.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod logging;

pub mod fail;
pub mod input;
pub mod memory;
pub mod output;
#[cfg(feature = "embedded-io")]
pub mod serial;
pub mod stream;

pub use textstream_format as format;

pub use fail::Fails;
pub use input::{ByteSource, Decode};
pub use memory::MemoryBuffer;
pub use output::{ByteSink, Encode};
#[cfg(feature = "embedded-io")]
pub use serial::Serial;
pub use stream::{Cursor, Stream, CR, ENDL, SPACE, TAB, TAB_SIZE};
pub use textstream_format::{
    Base, BaseDisplay, BoolDirectives, BoolWords, BufferDirectives, Case, DecimalPoint, FixedMode,
    FixedString, FloatDirectives, IntDirectives, Precision, SpecialNumbers, TextDirectives,
};
