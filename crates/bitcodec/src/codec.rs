//! The byte-order codec contract.
//!
//! [`ByteOrderCodec`] is implemented once per byte order. Implementors only
//! supply the fixed-width array conversions and the bit-string byte layout;
//! everything else (bounds-checked slice access, the float/double bridge and
//! the register-level bit helpers) is provided on top of those.

use std::fmt;
use std::ops::Range;

use bitcodec_common::{bits, ByteOrder, Error, Result};

/// Width in bytes of an `i32`/`f32` span.
pub const INT_WIDTH: usize = 4;

/// Width in bytes of an `i64`/`f64` span.
pub const LONG_WIDTH: usize = 8;

/// Conversions between fixed-width numbers and raw bytes in one byte order.
///
/// All methods are pure. Slice-based writes check the whole span before
/// touching the buffer, so a failed call leaves it unchanged.
///
/// `from_*` methods write into a caller buffer through a codec, so they take
/// `&self`.
#[allow(clippy::wrong_self_convention)]
pub trait ByteOrderCodec: fmt::Debug + Send + Sync {
    /// The byte order this codec implements.
    fn order(&self) -> ByteOrder;

    /// Encode a 32-bit integer into a fresh 4-byte array.
    fn encode_int(&self, value: i32) -> [u8; INT_WIDTH];

    /// Decode a 32-bit integer from a 4-byte array.
    fn decode_int(&self, bytes: [u8; INT_WIDTH]) -> i32;

    /// Encode a 64-bit integer into a fresh 8-byte array.
    fn encode_long(&self, value: i64) -> [u8; LONG_WIDTH];

    /// Decode a 64-bit integer from an 8-byte array.
    fn decode_long(&self, bytes: [u8; LONG_WIDTH]) -> i64;

    /// Combine two 32-bit halves into a 64-bit value.
    ///
    /// The result equals decoding the 8-byte span
    /// `encode_int(low) ++ encode_int(high)` with this codec.
    fn long_from_halves(&self, high: i32, low: i32) -> i64;

    /// Pack a bit string into bytes, 8 characters per byte.
    ///
    /// Any character other than `'0'` is a set bit. A final partial byte is
    /// padded with zero bits on the right. The inverse of
    /// [`bytes_to_bit_string`](Self::bytes_to_bit_string) for strings whose
    /// length is a multiple of 8.
    fn from_bit_string(&self, s: &str) -> Vec<u8>;

    /// Render bytes as a bit string, most-significant byte first.
    fn bytes_to_bit_string(&self, bytes: &[u8]) -> String;

    /// Read a 32-bit integer from `bytes[offset..offset + 4]`.
    fn to_int(&self, bytes: &[u8], offset: usize) -> Result<i32> {
        read_array(bytes, offset).map(|b| self.decode_int(b))
    }

    /// Write a 32-bit integer to `bytes[offset..offset + 4]`.
    fn from_int(&self, bytes: &mut [u8], value: i32, offset: usize) -> Result<()> {
        write_array(bytes, offset, self.encode_int(value))
    }

    /// Read a 64-bit integer from `bytes[offset..offset + 8]`.
    fn to_long(&self, bytes: &[u8], offset: usize) -> Result<i64> {
        read_array(bytes, offset).map(|b| self.decode_long(b))
    }

    /// Write a 64-bit integer to `bytes[offset..offset + 8]`.
    fn from_long(&self, bytes: &mut [u8], value: i64, offset: usize) -> Result<()> {
        write_array(bytes, offset, self.encode_long(value))
    }

    // Floats travel as their raw bit patterns; `to_bits`/`from_bits` never
    // canonicalize NaN payloads.

    /// Encode an `f32` via its raw bit pattern.
    fn encode_float(&self, value: f32) -> [u8; INT_WIDTH] {
        self.encode_int(value.to_bits() as i32)
    }

    /// Decode an `f32` from its raw bit pattern.
    fn decode_float(&self, bytes: [u8; INT_WIDTH]) -> f32 {
        f32::from_bits(self.decode_int(bytes) as u32)
    }

    /// Read an `f32` from `bytes[offset..offset + 4]`.
    fn to_float(&self, bytes: &[u8], offset: usize) -> Result<f32> {
        self.to_int(bytes, offset).map(|v| f32::from_bits(v as u32))
    }

    /// Write an `f32` to `bytes[offset..offset + 4]`.
    fn from_float(&self, bytes: &mut [u8], value: f32, offset: usize) -> Result<()> {
        self.from_int(bytes, value.to_bits() as i32, offset)
    }

    /// Encode an `f64` via its raw bit pattern.
    fn encode_double(&self, value: f64) -> [u8; LONG_WIDTH] {
        self.encode_long(value.to_bits() as i64)
    }

    /// Decode an `f64` from its raw bit pattern.
    fn decode_double(&self, bytes: [u8; LONG_WIDTH]) -> f64 {
        f64::from_bits(self.decode_long(bytes) as u64)
    }

    /// Read an `f64` from `bytes[offset..offset + 8]`.
    fn to_double(&self, bytes: &[u8], offset: usize) -> Result<f64> {
        self.to_long(bytes, offset).map(|v| f64::from_bits(v as u64))
    }

    /// Write an `f64` to `bytes[offset..offset + 8]`.
    fn from_double(&self, bytes: &mut [u8], value: f64, offset: usize) -> Result<()> {
        self.from_long(bytes, value.to_bits() as i64, offset)
    }

    /// See [`bits::to_bit_string`].
    fn to_bit_string(&self, value: u64, bits: u32) -> Result<String> {
        bits::to_bit_string(value, bits)
    }

    /// Render all 64 bits of `value`, bit 63 first.
    ///
    /// See [`bits::to_full_bit_string`].
    fn to_bit_string64(&self, value: u64) -> String {
        bits::to_full_bit_string(value)
    }

    /// See [`bits::to_last_bit_string`].
    fn to_last_bit_string(&self, value: u64, bits: u32) -> Result<String> {
        bits::to_last_bit_string(value, bits)
    }

    /// See [`bits::from_bit_string_to_long`].
    fn from_bit_string_to_long(&self, s: &str) -> Result<u64> {
        bits::from_bit_string_to_long(s)
    }

    /// See [`bits::reverse`].
    fn reverse(&self, value: u64, max_bits: u32) -> Result<u64> {
        bits::reverse(value, max_bits)
    }

    /// See [`bits::reverse_left`].
    fn reverse_left(&self, value: u64, max_bits: u32) -> Result<u64> {
        bits::reverse_left(value, max_bits)
    }
}

/// Resolve `[offset, offset + width)` against a buffer of `len` bytes.
#[inline]
fn span(len: usize, offset: usize, width: usize) -> Result<Range<usize>> {
    match offset.checked_add(width) {
        Some(end) if end <= len => Ok(offset..end),
        _ => Err(Error::OutOfBounds { offset, width, len }),
    }
}

#[inline]
fn read_array<const N: usize>(bytes: &[u8], offset: usize) -> Result<[u8; N]> {
    let range = span(bytes.len(), offset, N)?;
    let mut out = [0u8; N];
    out.copy_from_slice(&bytes[range]);
    Ok(out)
}

#[inline]
fn write_array<const N: usize>(bytes: &mut [u8], offset: usize, src: [u8; N]) -> Result<()> {
    let range = span(bytes.len(), offset, N)?;
    bytes[range].copy_from_slice(&src);
    Ok(())
}

/// Pack a bit string into bytes in string order, MSB first within each byte.
pub(crate) fn pack_bit_string(s: &str) -> Vec<u8> {
    let chars: Vec<char> = s.chars().collect();
    chars
        .chunks(8)
        .map(|chunk| {
            let byte = chunk
                .iter()
                .fold(0u8, |acc, &c| (acc << 1) | u8::from(c != '0'));
            // Left-align a short final chunk.
            byte << (8 - chunk.len())
        })
        .collect()
}

/// Render bytes in iteration order, each byte MSB first.
pub(crate) fn render_bytes<'a>(bytes: impl Iterator<Item = &'a u8>) -> String {
    let mut out = String::new();
    for byte in bytes {
        out.push_str(&format!("{:08b}", byte));
    }
    out
}
