//! Encoding: the byte sink seam, the encode engine and built-in kinds.

mod engine;
mod traits;
mod values;

pub use traits::{ByteSink, Encode};
