#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: the full datagram decoder.
//
// Catches bugs in:
// - Header reads at every offset (truncation, length < 4)
// - Content bounding and the unread-bytes check
// - Skipping of unregistered part types
// - Every content decoder reachable from the standard registry
fuzz_target!(|data: &[u8]| {
    if let Ok(parts) = collectd_decoder::decode_packet(data) {
        // A successful decode accounts for every byte, so the parts can
        // never claim more than the input held.
        let declared: usize = parts.iter().map(|p| usize::from(p.header().length)).sum();
        assert!(declared <= data.len());
    }
});
