//! Decoding: the byte source seam, the decode engine and built-in kinds.

mod engine;
mod traits;
mod values;

pub use traits::{ByteSource, Decode};
