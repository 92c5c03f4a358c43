#![no_main]

use collectd_decoder::content::decode_value_list;
use collectd_wire::{Cursor, PartHeader, part_type};
use libfuzzer_sys::fuzz_target;

// Fuzz target: the value-list decoder on its own, fed the input as the
// content of a VALUES part.
//
// Catches bugs in:
// - Counts larger than the content can hold
// - Unknown kind tags
// - Mixed 4- and 8-byte payload widths
fuzz_target!(|data: &[u8]| {
    let Ok(length) = u16::try_from(data.len() + 4) else {
        return;
    };
    let header = PartHeader {
        type_code: part_type::VALUES,
        length,
    };
    let mut cursor = Cursor::new(data);
    let _ = decode_value_list(header, &mut cursor);
});
