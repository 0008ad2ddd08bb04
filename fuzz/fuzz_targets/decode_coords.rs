#![no_main]

use codec::Codec;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // First byte picks the dimensionality.
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    let dimensions = usize::from(selector % 4) + 1;
    let Ok(codec) = Codec::new(dimensions, 1e5) else {
        return;
    };

    let nested = codec.decode_coords(rest);
    let flat = codec.decode_flat_coords(Vec::new(), rest);
    match (&nested, &flat) {
        (Ok((coords, remainder)), Ok((values, _))) => {
            assert!(remainder.is_empty());
            assert_eq!(coords.len() * dimensions, values.len());
        }
        (Err(err), Ok((values, _))) => {
            // Only an empty buffer separates the two.
            assert!(rest.is_empty() && values.is_empty(), "{err}");
        }
        (Ok(_), Err(err)) => panic!("flat decode failed alone: {err}"),
        (Err(a), Err(b)) => assert_eq!(a, b),
    }

    let _ = codec.decode_coord(rest);
});
