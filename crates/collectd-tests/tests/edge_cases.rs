//! Malformed and unusual datagrams.
//!
//! - **Unknown parts**: codes without a registered decoder (future part
//!   types, signatures, encryption envelopes) are skipped in place and
//!   never abort the decode.
//! - **Bad lengths**: a declared length that is too small, too large, or
//!   inconsistent with the content rules aborts with `InvalidLength` or
//!   `ShortBuffer` and returns no parts.
//! - **Value lists**: unknown kind tags and the little-endian gauge.

use collectd_decoder::{DecodeError, PacketDecoder, PartSliceExt, Registry, decode_packet};
use collectd_tests::PacketBuilder;
use collectd_types::{Part, Value};
use collectd_wire::part_type;

// ── Unknown part types ───────────────────────────────────────────────────────

#[test]
fn unknown_parts_never_appear_in_output() {
    let bytes = PacketBuilder::new()
        .raw_part(0x4242, b"from the future")
        .hostname("localhost")
        .raw_part(part_type::SIGNATURE, &[0xAB; 36])
        .raw_part(part_type::SEVERITY, &4i64.to_be_bytes())
        .plugin("cpu")
        .raw_part(0xFFFF, b"")
        .build();

    let parts = decode_packet(&bytes).unwrap();
    let codes: Vec<u16> = parts.iter().map(Part::type_code).collect();
    assert_eq!(codes, [part_type::HOSTNAME, part_type::PLUGIN]);
}

#[test]
fn low_resolution_time_is_skipped_by_default() {
    let bytes = PacketBuilder::new()
        .number(part_type::TIME, 1_419_765_641)
        .number(part_type::INTERVAL, 10)
        .build();
    assert!(decode_packet(&bytes).unwrap().is_empty());

    let registry = Registry::with_plain_time();
    let parts = PacketDecoder::new(&registry).decode(&bytes).unwrap();
    let times: Vec<i64> = parts.number_parts(part_type::TIME).map(|p| p.value).collect();
    assert_eq!(times, [1_419_765_641]);
}

#[test]
fn only_unknown_parts_yields_empty_sequence() {
    let bytes = PacketBuilder::new()
        .raw_part(part_type::ENCRYPTION, &[0u8; 40])
        .build();
    assert_eq!(decode_packet(&bytes).unwrap(), Vec::new());
}

// ── Header failures ──────────────────────────────────────────────────────────

#[test]
fn length_three_is_invalid() {
    let bytes = hex::decode("0002000364697300").unwrap();
    assert!(matches!(
        decode_packet(&bytes),
        Err(DecodeError::InvalidLength { length: 3, .. })
    ));
}

#[test]
fn length_zero_on_unknown_part_is_invalid() {
    let bytes = hex::decode("42420000").unwrap();
    assert!(matches!(
        decode_packet(&bytes),
        Err(DecodeError::InvalidLength { length: 0, .. })
    ));
}

#[test]
fn truncated_mid_header_is_short_buffer() {
    for len in 1..4 {
        let bytes = PacketBuilder::new()
            .hostname("localhost")
            .raw_bytes(&[0x00, 0x02, 0x00][..len])
            .build();
        assert!(
            matches!(decode_packet(&bytes), Err(DecodeError::ShortBuffer { offset, .. }) if offset >= 14),
            "trailing {len} header bytes should be a short buffer"
        );
    }
}

#[test]
fn declared_length_past_end_is_short_buffer() {
    let mut bytes = PacketBuilder::new().plugin("disk").build();
    bytes[3] = 0x40;
    assert!(matches!(
        decode_packet(&bytes),
        Err(DecodeError::ShortBuffer { offset: 4, needed: 60, remaining: 5 })
    ));
}

// ── Content failures ─────────────────────────────────────────────────────────

#[test]
fn empty_text_part_is_invalid() {
    let bytes = PacketBuilder::new()
        .hostname("localhost")
        .raw_part(part_type::PLUGIN, b"")
        .build();
    assert!(matches!(
        decode_packet(&bytes),
        Err(DecodeError::InvalidLength { type_code: part_type::PLUGIN, offset: 14, .. })
    ));
}

#[test]
fn high_res_time_of_wrong_width_is_invalid() {
    for width in [0usize, 4, 7, 9, 16] {
        let bytes = PacketBuilder::new()
            .raw_part(part_type::TIME_HR, &vec![0u8; width])
            .build();
        assert!(
            matches!(decode_packet(&bytes), Err(DecodeError::InvalidLength { .. })),
            "{width}-byte time should be rejected"
        );
    }
}

#[test]
fn unknown_value_kind_aborts() {
    let bytes = PacketBuilder::new()
        .hostname("h")
        .raw_part(part_type::VALUES, &[0x00, 0x01, 0x07, 0, 0, 0, 0])
        .build();
    assert!(matches!(
        decode_packet(&bytes),
        Err(DecodeError::UnknownValueKind { kind: 7, offset: 12 })
    ));
}

#[test]
fn value_list_count_mismatch_aborts() {
    let over = PacketBuilder::new()
        .raw_part(part_type::VALUES, &[0x00, 0x01, 0x00, 0, 0, 0, 1, 0xEE])
        .build();
    let under = PacketBuilder::new()
        .raw_part(part_type::VALUES, &[0x00, 0x02, 0x00, 0, 0, 0, 1])
        .build();
    assert!(matches!(decode_packet(&over), Err(DecodeError::InvalidLength { .. })));
    assert!(matches!(decode_packet(&under), Err(DecodeError::InvalidLength { .. })));
}

#[test]
fn failure_after_good_parts_returns_nothing() {
    let bytes = PacketBuilder::new()
        .hostname("localhost")
        .plugin("cpu")
        .time_hr(1, 0)
        .raw_part(part_type::VALUES, &[0x00, 0x01, 0x09, 0, 0, 0, 0])
        .plugin("disk")
        .build();
    assert!(decode_packet(&bytes).is_err());
}

// ── Value encodings ──────────────────────────────────────────────────────────

#[test]
fn gauge_byte_order_matters() {
    let gauge = 98.6f64;
    let little = PacketBuilder::new().values(&[Value::Gauge(gauge)]).build();

    let mut big = PacketBuilder::new().raw_part(part_type::VALUES, &[0x00, 0x01, 0x01]).build();
    big.extend_from_slice(&gauge.to_be_bytes());
    big[3] += 8;

    let read = |bytes: &[u8]| match decode_packet(bytes).unwrap().value_lists().next() {
        Some(list) => list.values[0],
        None => panic!("no value list"),
    };

    assert_eq!(read(&little), Value::Gauge(gauge));
    assert_ne!(read(&big), Value::Gauge(gauge));
}

#[test]
fn mixed_kinds_in_one_list() {
    let values = [
        Value::Counter(u32::MAX),
        Value::Gauge(-0.125),
        Value::Derive(i32::MIN),
        Value::Absolute(42),
    ];
    let bytes = PacketBuilder::new().values(&values).build();
    let parts = decode_packet(&bytes).unwrap();
    let list = parts.value_lists().next().unwrap();
    assert_eq!(list.count, 4);
    assert_eq!(list.values, values);
}

#[test]
fn negative_high_res_rounds_down() {
    let bytes = PacketBuilder::new()
        .number(part_type::INTERVAL_HR, -(1 << 30) - 1)
        .build();
    let parts = decode_packet(&bytes).unwrap();
    assert_eq!(parts.high_res_values(part_type::INTERVAL_HR).collect::<Vec<_>>(), [-2]);
}
