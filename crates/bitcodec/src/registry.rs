//! Process-wide codec singletons and selection by byte order.

use bitcodec_common::ByteOrder;

use crate::big::BigEndianCodec;
use crate::codec::ByteOrderCodec;
use crate::little::LittleEndianCodec;

/// The little-endian codec.
pub static LITTLE: LittleEndianCodec = LittleEndianCodec;

/// The big-endian codec.
pub static BIG: BigEndianCodec = BigEndianCodec;

/// Select the codec for a byte order.
///
/// # Example
///
/// ```
/// use bitcodec::{get, ByteOrder, ByteOrderCodec};
///
/// let codec = get(ByteOrder::Big);
/// assert_eq!(codec.encode_int(1), [0, 0, 0, 1]);
/// ```
#[inline]
pub fn get(order: ByteOrder) -> &'static dyn ByteOrderCodec {
    match order {
        ByteOrder::Big => &BIG,
        ByteOrder::Little => &LITTLE,
    }
}

/// The codec matching the host's byte order.
#[inline]
pub fn native() -> &'static dyn ByteOrderCodec {
    get(ByteOrder::native())
}
