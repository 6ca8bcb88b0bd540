#![no_main]

use libfuzzer_sys::fuzz_target;
use tagwire::{decode, encode, ByteOrder};

// Decoding arbitrary bytes must never panic, and anything that decodes must
// re-encode to the identical buffer (the format has a single canonical
// encoding per byte order).
fuzz_target!(|data: &[u8]| {
    for order in [ByteOrder::Big, ByteOrder::Little] {
        if let Ok(values) = decode(data, order) {
            let reencoded = encode(&values, order);
            assert_eq!(&reencoded[..], data, "re-encode diverged under {order:?}");
        }
    }
});
