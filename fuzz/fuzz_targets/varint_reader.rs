#![no_main]

use libfuzzer_sys::fuzz_target;
use varint::{encode_int, encode_uint, PolylineReader};

fuzz_target!(|data: &[u8]| {
    let mut reader = PolylineReader::new(data);
    let mut idx = 0usize;

    // Alternate unsigned and signed reads, stopping at the first error since
    // a failed read does not advance.
    while !reader.is_empty() && idx < 1024 {
        let start = reader.position();
        let ok = if idx % 2 == 0 {
            reader.read_uint().map(|v| {
                let mut buf = Vec::new();
                encode_uint(&mut buf, v);
                buf.len() <= reader.position() - start
            })
        } else {
            reader.read_int().map(|v| {
                let mut buf = Vec::new();
                encode_int(&mut buf, v);
                buf.len() <= reader.position() - start
            })
        };
        match ok {
            // Canonical re-encoding is never longer than the input.
            Ok(shorter) => assert!(shorter),
            Err(_) => {
                assert_eq!(reader.position(), start);
                break;
            }
        }
        idx += 1;
    }
});
