//! Cross-codec behaviour of the big- and little-endian codecs.

use bitcodec::prelude::*;
use bitcodec::{get, Error};
use byteorder::ByteOrder as _;

const CODECS: [&dyn ByteOrderCodec; 2] = [&LittleEndianCodec, &BigEndianCodec];

const INTS: [i32; 8] = [
    0,
    1,
    -1,
    i32::MIN,
    i32::MAX,
    0x0A0B_0C0D,
    -0x1234_5678,
    0x00FF_0000,
];

const LONGS: [i64; 8] = [
    0,
    1,
    -1,
    i64::MIN,
    i64::MAX,
    0x0102_0304_0506_0708,
    -0x0123_4567_89AB_CDEF,
    0x0000_00FF_0000_0000,
];

#[test]
fn test_int_roundtrip() {
    for codec in CODECS {
        let mut buf = [0u8; 10];
        for &v in &INTS {
            for offset in 0..=6 {
                codec.from_int(&mut buf, v, offset).unwrap();
                assert_eq!(codec.to_int(&buf, offset).unwrap(), v, "{:?}", codec);
            }
        }
    }
}

#[test]
fn test_long_roundtrip() {
    for codec in CODECS {
        let mut buf = [0u8; 11];
        for &v in &LONGS {
            codec.from_long(&mut buf, v, 3).unwrap();
            assert_eq!(codec.to_long(&buf, 3).unwrap(), v, "{:?}", codec);
        }
    }
}

#[test]
fn test_matches_byteorder_crate() {
    for &v in &INTS {
        let mut expected = [0u8; 4];
        byteorder::LittleEndian::write_i32(&mut expected, v);
        assert_eq!(LITTLE.encode_int(v), expected);
        byteorder::BigEndian::write_i32(&mut expected, v);
        assert_eq!(BIG.encode_int(v), expected);
        assert_eq!(BIG.decode_int(expected), byteorder::BigEndian::read_i32(&expected));
    }
    for &v in &LONGS {
        let mut expected = [0u8; 8];
        byteorder::LittleEndian::write_i64(&mut expected, v);
        assert_eq!(LITTLE.encode_long(v), expected);
        assert_eq!(
            LITTLE.decode_long(expected),
            byteorder::LittleEndian::read_i64(&expected)
        );
        byteorder::BigEndian::write_i64(&mut expected, v);
        assert_eq!(BIG.encode_long(v), expected);
    }
}

#[test]
fn test_byte_order_divergence() {
    for &v in &[0x0A0B_0C0Di32, 1, -2, 0x0102_0000] {
        let mut little = LITTLE.encode_int(v);
        let big = BIG.encode_int(v);
        assert_ne!(little, big);
        little.reverse();
        assert_eq!(little, big);
    }

    let mut little = LITTLE.encode_long(0x0102_0304_0506_0708);
    little.reverse();
    assert_eq!(little, BIG.encode_long(0x0102_0304_0506_0708));
}

#[test]
fn test_from_int_scenario() {
    let mut buf = [0u8; 4];
    LITTLE.from_int(&mut buf, 1, 0).unwrap();
    assert_eq!(buf, [1, 0, 0, 0]);

    let mut buf = [0u8; 4];
    BIG.from_int(&mut buf, 1, 0).unwrap();
    assert_eq!(buf, [0, 0, 0, 1]);
}

#[test]
fn test_long_from_halves_matches_span_decode() {
    for codec in CODECS {
        for &high in &INTS {
            for &low in &INTS {
                let mut buf = [0u8; 8];
                codec.from_int(&mut buf, low, 0).unwrap();
                codec.from_int(&mut buf, high, 4).unwrap();
                assert_eq!(
                    codec.long_from_halves(high, low),
                    codec.to_long(&buf, 0).unwrap(),
                    "{:?} high={high:#x} low={low:#x}",
                    codec
                );
            }
        }
    }
}

#[test]
fn test_float_raw_bits_roundtrip() {
    let quiet_nan = f32::from_bits(0x7FC0_0001);
    let signalling_nan = f32::from_bits(0x7F80_0001);
    let samples = [0.0f32, -0.0, 1.5, f32::MIN_POSITIVE, f32::INFINITY, quiet_nan, signalling_nan];

    for codec in CODECS {
        let mut buf = [0u8; 4];
        for &v in &samples {
            codec.from_float(&mut buf, v, 0).unwrap();
            assert_eq!(codec.to_float(&buf, 0).unwrap().to_bits(), v.to_bits());
            assert_eq!(codec.decode_float(codec.encode_float(v)).to_bits(), v.to_bits());
            assert_eq!(codec.to_int(&buf, 0).unwrap() as u32, v.to_bits());
        }
    }
}

#[test]
fn test_double_raw_bits_roundtrip() {
    let payload_nan = f64::from_bits(0x7FF8_0000_DEAD_BEEF);
    let negative_nan = f64::from_bits(0xFFF0_0000_0000_0001);
    let samples = [0.0f64, -0.0, -2.25, f64::MAX, f64::NEG_INFINITY, payload_nan, negative_nan];

    for codec in CODECS {
        let mut buf = [0u8; 9];
        for &v in &samples {
            codec.from_double(&mut buf, v, 1).unwrap();
            assert_eq!(codec.to_double(&buf, 1).unwrap().to_bits(), v.to_bits());
            assert_eq!(codec.decode_double(codec.encode_double(v)).to_bits(), v.to_bits());
        }
    }

    let mut expected = [0u8; 8];
    byteorder::BigEndian::write_f64(&mut expected, -2.25);
    assert_eq!(BIG.encode_double(-2.25), expected);
}

#[test]
fn test_out_of_bounds_reads() {
    for codec in CODECS {
        let buf = [0u8; 6];
        assert_eq!(
            codec.to_int(&buf, 3),
            Err(Error::OutOfBounds { offset: 3, width: 4, len: 6 })
        );
        assert!(codec.to_long(&buf, 0).is_err());
        assert!(codec.to_double(&buf, 0).is_err());
        assert!(codec.to_float(&buf, usize::MAX).is_err());
        assert!(codec.to_int(&[], 0).is_err());
    }
}

#[test]
fn test_out_of_bounds_write_leaves_buffer_untouched() {
    for codec in CODECS {
        let mut buf = [0xAAu8; 10];
        assert!(codec.from_long(&mut buf, -1, 3).is_err());
        assert!(codec.from_int(&mut buf, -1, 7).is_err());
        assert!(codec.from_float(&mut buf, 1.0, 8).is_err());
        assert!(codec.from_double(&mut buf, 1.0, usize::MAX - 2).is_err());
        assert_eq!(buf, [0xAA; 10]);
    }
}

#[test]
fn test_bit_string_bytes_roundtrip() {
    let s = "0000000100000010000000110000010011111111";
    for codec in CODECS {
        let bytes = codec.from_bit_string(s);
        assert_eq!(bytes.len(), 5);
        assert_eq!(codec.bytes_to_bit_string(&bytes), s);
    }
    assert_eq!(LITTLE.from_bit_string(s), vec![0xFF, 4, 3, 2, 1]);
    assert_eq!(BIG.from_bit_string(s), vec![1, 2, 3, 4, 0xFF]);
}

#[test]
fn test_bit_string_of_encoded_long() {
    let v = 0x0123_4567_89AB_CDEFu64;
    for codec in CODECS {
        let bytes = codec.encode_long(v as i64);
        assert_eq!(codec.bytes_to_bit_string(&bytes), codec.to_bit_string64(v));
        assert_eq!(codec.to_bit_string64(v), codec.to_bit_string(v, 64).unwrap());
    }
}

#[test]
fn test_full_width_bit_string_roundtrip() {
    for codec in CODECS {
        for &v in &LONGS {
            let s = codec.to_bit_string64(v as u64);
            assert_eq!(s.len(), 64);
            assert!(s.chars().all(|c| c == '0' || c == '1'));
            assert_eq!(codec.from_bit_string_to_long(&s).unwrap(), v as u64);
        }
    }
}

#[test]
fn test_bit_helpers_are_order_independent() {
    let v = 0xF0F0_0000_0000_1234u64;
    assert_eq!(LITTLE.to_bit_string(v, 16).unwrap(), BIG.to_bit_string(v, 16).unwrap());
    assert_eq!(LITTLE.to_last_bit_string(v, 16).unwrap(), "0001001000110100");
    assert_eq!(LITTLE.reverse(v, 64).unwrap(), BIG.reverse(v, 64).unwrap());
    assert_eq!(LITTLE.reverse_left(v, 8).unwrap(), BIG.reverse_left(v, 8).unwrap());
    assert_eq!(LITTLE.from_bit_string_to_long("1010").unwrap(), 0b1010 << 60);
    assert_eq!(
        BIG.from_bit_string_to_long(&"1".repeat(65)),
        Err(Error::BitStringTooLong { len: 65 })
    );
}

#[test]
fn test_registry_selection() {
    assert_eq!(get(ByteOrder::Big).encode_int(1), [0, 0, 0, 1]);
    assert_eq!(get(ByteOrder::Little).encode_int(1), [1, 0, 0, 0]);
    assert_eq!(get("network".parse().unwrap()).order(), ByteOrder::Big);
}
