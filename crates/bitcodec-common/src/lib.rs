//! Common building blocks for bitcodec.
//!
//! This crate holds the pieces that do not depend on a byte order:
//!
//! - [`bits`] - bit reversal and bit-string rendering over a 64-bit register
//! - [`ByteOrder`] - the big/little descriptor used to select a codec
//! - [`Error`] - the error type shared by all bitcodec crates

mod error;
mod order;

pub mod bits;

pub use error::{Error, Result};
pub use order::ByteOrder;
