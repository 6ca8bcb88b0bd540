//! End-to-end round trips over heterogeneous sequences.

use bytes::Buf;
use tagwire::{decode, decode_one, encode, ByteOrder, Error, Matrix, Value};

fn sample_sequence() -> Vec<Value> {
    vec![
        Value::Byte(-128),
        Value::Short(i16::MAX),
        Value::Int(-1),
        Value::Long(i64::MIN),
        Value::Float(f32::MIN_POSITIVE),
        Value::Double(f64::INFINITY),
        Value::Bool(false),
        Value::char8(b'A'),
        Value::char16(0x00E9),
        Value::String8("grüße, 世界".to_string()),
        Value::string16("🚀 two code units"),
        Value::ByteArray(vec![1, -2, 3]),
        Value::ShortArray(vec![]),
        Value::IntArray(vec![i32::MIN, 0, i32::MAX]),
        Value::LongArray(vec![7; 100]),
        Value::FloatArray(vec![0.25, -0.25]),
        Value::DoubleArray(vec![f64::MIN, f64::MAX]),
        Value::BoolArray(vec![true, true, false]),
        Value::ByteMatrix(Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap()),
        Value::ShortMatrix(Matrix::from_rows(vec![vec![5, 6, 7]]).unwrap()),
        Value::IntMatrix(Matrix::from_rows(vec![vec![1], vec![2], vec![3]]).unwrap()),
        Value::LongMatrix(Matrix::from_rows(vec![vec![-1, 1]]).unwrap()),
        Value::FloatMatrix(Matrix::from_rows(vec![vec![1.5, 2.5], vec![3.5, 4.5]]).unwrap()),
        Value::DoubleMatrix(Matrix::from_rows(vec![vec![9.9]]).unwrap()),
    ]
}

#[test]
fn heterogeneous_sequence_round_trips() {
    let values = sample_sequence();
    for order in [ByteOrder::Big, ByteOrder::Little] {
        let encoded = encode(&values, order);
        let expected: usize = values.iter().map(Value::encode_size).sum();
        assert_eq!(encoded.len(), expected);
        let decoded = decode(encoded, order).unwrap();
        assert_eq!(values, decoded);
    }
}

#[test]
fn byte_orders_disagree_on_bytes_but_not_values() {
    let values = sample_sequence();
    let big = encode(&values, ByteOrder::Big);
    let little = encode(&values, ByteOrder::Little);
    assert_ne!(big, little);
    assert_eq!(decode(big, ByteOrder::Big).unwrap(), values);
    assert_eq!(decode(little, ByteOrder::Little).unwrap(), values);
}

#[test]
fn golden_int_matrix_vector() {
    let m = Matrix::from_rows(vec![vec![1, 2, 4], vec![6, 7, 8]]).unwrap();
    let encoded = encode(&[Value::IntMatrix(m)], ByteOrder::Big);
    let expected: [u8; 33] = [
        0x14, //
        0x00, 0x00, 0x00, 0x02, //
        0x00, 0x00, 0x00, 0x03, //
        0x00, 0x00, 0x00, 0x01, //
        0x00, 0x00, 0x00, 0x02, //
        0x00, 0x00, 0x00, 0x04, //
        0x00, 0x00, 0x00, 0x06, //
        0x00, 0x00, 0x00, 0x07, //
        0x00, 0x00, 0x00, 0x08,
    ];
    assert_eq!(&encoded[..], &expected[..]);
}

#[test]
fn streaming_decode_consumes_in_order() {
    let values = sample_sequence();
    let encoded = encode(&values, ByteOrder::Little);
    let mut buf = &encoded[..];
    for expected in &values {
        let decoded = decode_one(&mut buf, ByteOrder::Little).unwrap();
        assert_eq!(*expected, decoded);
    }
    assert_eq!(buf.remaining(), 0);
}

#[test]
fn unknown_tag_is_fatal() {
    let mut encoded = encode(&[Value::Int(1)], ByteOrder::Big).to_vec();
    encoded.push(0xFE);
    assert!(matches!(
        decode(&encoded[..], ByteOrder::Big),
        Err(Error::UnknownTag(0xFE))
    ));
}

#[test]
fn mismatched_order_misreads_prefixes() {
    // A one-element array encoded little-endian claims 0x01000000 elements when
    // read big-endian; the decoder must fail cleanly instead of allocating.
    let encoded = encode(&[Value::IntArray(vec![42])], ByteOrder::Little);
    assert!(matches!(
        decode(encoded, ByteOrder::Big),
        Err(Error::EndOfBuffer)
    ));
}
