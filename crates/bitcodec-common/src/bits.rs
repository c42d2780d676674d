//! Register-level bit utilities.
//!
//! Everything here works on a 64-bit register and is independent of byte
//! order. Bit strings are rendered most-significant bit first using the
//! characters `'0'` and `'1'`.

use crate::{Error, Result};

/// Width of the working register in bits.
pub const REGISTER_BITS: u32 = u64::BITS;

const HIGHEST_BIT: u64 = 1 << 63;

#[inline]
fn check_bits(bits: u32) -> Result<()> {
    if bits > REGISTER_BITS {
        return Err(Error::InvalidBitCount { bits });
    }
    Ok(())
}

/// Reverse the lowest `max_bits` bits of `value`.
///
/// The result is right-aligned: it occupies the lowest `max_bits` bits and
/// every higher bit is zero. A `max_bits` of zero yields zero.
///
/// See <http://graphics.stanford.edu/~seander/bithacks.html#BitReverseObvious>.
///
/// # Example
///
/// ```
/// use bitcodec_common::bits;
///
/// assert_eq!(bits::reverse(0b0011, 4).unwrap(), 0b1100);
/// assert_eq!(bits::reverse(1, 64).unwrap(), 1 << 63);
/// ```
pub fn reverse(mut value: u64, max_bits: u32) -> Result<u64> {
    check_bits(max_bits)?;

    let mut res = 0u64;
    let mut remaining = max_bits;
    while remaining > 0 {
        res = (res << 1) | (value & 1);
        remaining -= 1;
        value >>= 1;
        if value == 0 {
            // Only zeros left to consume.
            res <<= remaining;
            break;
        }
    }
    Ok(res)
}

/// Reverse the highest `max_bits` bits of `value`.
///
/// The result is left-aligned in the same bit positions
/// (`64 - max_bits..64`); the low `64 - max_bits` bits are zero. A
/// `max_bits` of zero yields zero.
pub fn reverse_left(value: u64, max_bits: u32) -> Result<u64> {
    check_bits(max_bits)?;
    if max_bits == 0 {
        return Ok(0);
    }

    let delta = REGISTER_BITS - max_bits;
    Ok(reverse(value >> delta, max_bits)? << delta)
}

/// Render the top `bits` bits of the register, bit 63 first.
///
/// This always starts at the register's most-significant bit, so
/// `to_bit_string(v, 8)` shows bits 63..56, not the low byte.
///
/// # Example
///
/// ```
/// use bitcodec_common::bits;
///
/// assert_eq!(bits::to_bit_string(0xA000_0000_0000_0000, 4).unwrap(), "1010");
/// ```
pub fn to_bit_string(value: u64, bits: u32) -> Result<String> {
    check_bits(bits)?;
    Ok(render_high(value, bits))
}

/// Render all 64 bits of the register, bit 63 first.
#[inline]
pub fn to_full_bit_string(value: u64) -> String {
    render_high(value, REGISTER_BITS)
}

/// `bits` must not exceed [`REGISTER_BITS`].
fn render_high(mut value: u64, bits: u32) -> String {
    let mut out = String::with_capacity(bits as usize);
    for _ in 0..bits {
        out.push(if value & HIGHEST_BIT == 0 { '0' } else { '1' });
        value <<= 1;
    }
    out
}

/// Render the lowest `bits` bits of the register, bit `bits - 1` first.
pub fn to_last_bit_string(mut value: u64, bits: u32) -> Result<String> {
    check_bits(bits)?;
    if bits == 0 {
        return Ok(String::new());
    }

    let last_bit = 1u64 << (bits - 1);
    let mut out = String::with_capacity(bits as usize);
    for _ in 0..bits {
        out.push(if value & last_bit == 0 { '0' } else { '1' });
        value <<= 1;
    }
    Ok(out)
}

/// Pack a bit string into the highest bits of a register.
///
/// Characters are consumed in order; anything other than `'0'` counts as a
/// set bit. The remaining low bits are zero. Strings longer than 64
/// characters are rejected before any bit is packed.
///
/// Intended for tests and diagnostics, as the inverse of [`to_bit_string`].
pub fn from_bit_string_to_long(s: &str) -> Result<u64> {
    let len = s.chars().count();
    if len > REGISTER_BITS as usize {
        return Err(Error::BitStringTooLong { len });
    }

    let mut res = 0u64;
    for c in s.chars() {
        res <<= 1;
        if c != '0' {
            res |= 1;
        }
    }
    // `len` is at most 64, so the shift only overflows for the empty string.
    Ok(res.checked_shl(REGISTER_BITS - len as u32).unwrap_or(0))
}
