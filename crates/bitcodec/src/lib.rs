//! Bitcodec - byte-order aware numeric and bit codec.
//!
//! Converts between fixed-width numbers (`i32`, `i64`, `f32`, `f64`) and raw
//! bytes in a chosen byte order, and provides bit-level helpers (bit
//! reversal, bit-string rendering) that work on a 64-bit register.
//!
//! # Crates
//!
//! - [`bitcodec_common`] - Byte-order independent pieces (errors, [`ByteOrder`], [`bits`])
//!
//! # Example
//!
//! ```
//! use bitcodec::prelude::*;
//!
//! let codec = bitcodec::get(ByteOrder::Little);
//!
//! let mut buf = [0u8; 12];
//! codec.from_double(&mut buf, 1.5, 4)?;
//! assert_eq!(codec.to_double(&buf, 4)?, 1.5);
//!
//! assert_eq!(BIG.encode_int(1), [0, 0, 0, 1]);
//! assert_eq!(LITTLE.encode_int(1), [1, 0, 0, 0]);
//! # Ok::<(), bitcodec::Error>(())
//! ```

mod big;
mod codec;
mod little;
mod registry;

pub use bitcodec_common as common;
pub use bitcodec_common::{bits, ByteOrder, Error, Result};

pub use big::BigEndianCodec;
pub use codec::{ByteOrderCodec, INT_WIDTH, LONG_WIDTH};
pub use little::LittleEndianCodec;
pub use registry::{get, native, BIG, LITTLE};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::{BigEndianCodec, ByteOrderCodec, LittleEndianCodec, BIG, LITTLE};
    pub use bitcodec_common::{bits, ByteOrder};
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
