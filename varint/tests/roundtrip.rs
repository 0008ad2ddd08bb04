use varint::{
    decode_int, decode_uint, encode_int, encode_uint, PolylineReader, PolylineWriter, VarintError,
};

#[test]
fn chained_decode_over_one_buffer() {
    let mut buf = Vec::new();
    encode_uint(&mut buf, 174);
    encode_int(&mut buf, -550_300);
    encode_uint(&mut buf, 0);

    let (first, rest) = decode_uint(&buf).unwrap();
    let (second, rest) = decode_int(rest).unwrap();
    let (third, rest) = decode_uint(rest).unwrap();
    assert_eq!((first, second, third), (174, -550_300, 0));
    assert!(rest.is_empty());
    assert_eq!(decode_uint(rest), Err(VarintError::Empty));
}

#[test]
fn non_canonical_decodes_but_is_never_produced() {
    let (value, rest) = decode_uint(b"a?").unwrap();
    assert_eq!(value, 2);
    assert!(rest.is_empty());

    let mut canonical = Vec::new();
    encode_uint(&mut canonical, value);
    assert_eq!(canonical, b"A");
    assert_ne!(canonical, b"a?");
}

#[test]
fn reader_stops_at_first_error() {
    let mut writer = PolylineWriter::new();
    writer.write_int(-75_000);
    let mut bytes = writer.finish();
    bytes.push(b'>');

    let mut reader = PolylineReader::new(&bytes);
    assert_eq!(reader.read_int().unwrap(), -75_000);
    assert_eq!(reader.read_int(), Err(VarintError::InvalidByte { byte: b'>' }));
    assert_eq!(reader.remaining(), b">");
}
