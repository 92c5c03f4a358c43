#![no_main]

use collectd_wire::{Cursor, PartHeader};
use libfuzzer_sys::fuzz_target;

// Fuzz target: PartHeader::read_from with arbitrary bytes.
//
// Catches bugs in:
// - Short reads on 0..=3 byte inputs
// - The length >= 4 check
fuzz_target!(|data: &[u8]| {
    let mut cursor = Cursor::new(data);
    if let Ok(header) = PartHeader::read_from(&mut cursor) {
        assert!(header.length >= 4);
        assert_eq!(cursor.offset(), 4);
    }
});
