use proptest::prelude::*;
use varint::{
    decode_int, decode_uint, encode_int, encode_uint, PolylineReader, PolylineWriter, MAX_UINT_LEN,
};

#[derive(Clone, Debug)]
enum Op {
    Uint(u64),
    Int(i64),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<u64>().prop_map(Op::Uint),
        any::<i64>().prop_map(Op::Int),
        (0u64..1024).prop_map(Op::Uint),
        (-512i64..512).prop_map(Op::Int),
    ]
}

proptest! {
    #[test]
    fn prop_uint_roundtrip(value in any::<u64>()) {
        let mut buf = Vec::new();
        encode_uint(&mut buf, value);
        prop_assert!(buf.len() <= MAX_UINT_LEN);
        prop_assert!(buf.iter().all(|b| (0x3F..=0x7E).contains(b)));
        let (decoded, rest) = decode_uint(&buf).unwrap();
        prop_assert_eq!(decoded, value);
        prop_assert!(rest.is_empty());
    }

    #[test]
    fn prop_int_roundtrip(value in any::<i64>()) {
        let mut buf = Vec::new();
        encode_int(&mut buf, value);
        let (decoded, rest) = decode_int(&buf).unwrap();
        prop_assert_eq!(decoded, value);
        prop_assert!(rest.is_empty());
    }

    #[test]
    fn prop_roundtrip_ops(ops in prop::collection::vec(op_strategy(), 1..64)) {
        let mut writer = PolylineWriter::new();
        for op in &ops {
            match op {
                Op::Uint(v) => writer.write_uint(*v),
                Op::Int(v) => writer.write_int(*v),
            }
        }

        let bytes = writer.finish();
        let mut reader = PolylineReader::new(&bytes);
        for op in &ops {
            match op {
                Op::Uint(v) => {
                    prop_assert_eq!(reader.read_uint().unwrap(), *v);
                }
                Op::Int(v) => {
                    prop_assert_eq!(reader.read_int().unwrap(), *v);
                }
            }
        }
        prop_assert!(reader.is_empty());
    }

    #[test]
    fn prop_decode_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..32)) {
        let _ = decode_uint(&bytes);
        let _ = decode_int(&bytes);
    }
}
