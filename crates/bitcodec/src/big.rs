//! Big-endian codec: the most-significant byte is stored first.

use bitcodec_common::ByteOrder;

use crate::codec::{pack_bit_string, render_bytes, ByteOrderCodec, INT_WIDTH, LONG_WIDTH};

/// Byte at index `i` holds bits `8(w - 1 - i)..8(w - i)` of a `w`-byte value.
///
/// # Byte Layout
///
/// ```text
/// value 0x0A0B0C0D  ->  [0x0A, 0x0B, 0x0C, 0x0D]
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BigEndianCodec;

#[allow(clippy::wrong_self_convention)]
impl ByteOrderCodec for BigEndianCodec {
    #[inline]
    fn order(&self) -> ByteOrder {
        ByteOrder::Big
    }

    #[inline]
    fn encode_int(&self, value: i32) -> [u8; INT_WIDTH] {
        let v = value as u32;
        [(v >> 24) as u8, (v >> 16) as u8, (v >> 8) as u8, v as u8]
    }

    #[inline]
    fn decode_int(&self, b: [u8; INT_WIDTH]) -> i32 {
        ((b[0] as u32) << 24 | (b[1] as u32) << 16 | (b[2] as u32) << 8 | b[3] as u32) as i32
    }

    #[inline]
    fn encode_long(&self, value: i64) -> [u8; LONG_WIDTH] {
        let v = value as u64;
        let mut out = [0u8; LONG_WIDTH];
        for (i, byte) in out.iter_mut().enumerate() {
            *byte = (v >> (8 * (LONG_WIDTH - 1 - i))) as u8;
        }
        out
    }

    #[inline]
    fn decode_long(&self, b: [u8; LONG_WIDTH]) -> i64 {
        b.iter().fold(0u64, |acc, &byte| (acc << 8) | byte as u64) as i64
    }

    #[inline]
    fn long_from_halves(&self, high: i32, low: i32) -> i64 {
        ((low as u32 as u64) << 32 | high as u32 as u64) as i64
    }

    fn from_bit_string(&self, s: &str) -> Vec<u8> {
        pack_bit_string(s)
    }

    fn bytes_to_bit_string(&self, bytes: &[u8]) -> String {
        render_bytes(bytes.iter())
    }
}
