//! Content decoders, one per wire content shape.
//!
//! Each decoder is handed the already-parsed [`PartHeader`] and a cursor
//! positioned at the first content byte. A decoder must consume exactly
//! `header.content_len()` bytes; the packet decoder gives it a cursor that
//! holds no more than that and rejects the part if anything is left over.
//!
//! All four share the [`DecodeFn`](crate::registry::DecodeFn) signature so
//! they can sit in the same registry table.

use collectd_types::{
    HighResNumberPart, NumberPart, Part, TextPart, Value, ValueKind, ValueListPart,
};
use collectd_wire::{Cursor, HEADER_SIZE, PartHeader, WireError};

use crate::error::DecodeError;

/// Width of a numeric part's content.
pub const NUMBER_LEN: usize = 8;

/// Fraction bits in a high-resolution time or interval.
pub const HIGH_RES_SHIFT: u32 = 30;

/// Size of a value-list entry's kind tag.
const KIND_TAG_LEN: usize = 1;

/// Offset of the part header, given a cursor sitting on the first content byte.
fn part_offset(cursor: &Cursor<'_>) -> usize {
    cursor.offset().saturating_sub(HEADER_SIZE)
}

fn invalid_length(header: PartHeader, offset: usize, reason: &'static str) -> DecodeError {
    DecodeError::InvalidLength {
        offset,
        type_code: header.type_code,
        length: header.length,
        reason,
    }
}

/// Decode a NUL-terminated string part.
///
/// The final content byte is dropped without checking that it is zero.
/// Bytes that are not valid UTF-8 are replaced with U+FFFD.
///
/// # Errors
///
/// - [`DecodeError::InvalidLength`] if the content is empty, since there
///   is no terminator to drop.
/// - [`DecodeError::ShortBuffer`] if the cursor holds fewer bytes than
///   the header declares.
pub fn decode_text(header: PartHeader, cursor: &mut Cursor<'_>) -> Result<Part, DecodeError> {
    let len = header.content_len();
    if len == 0 {
        return Err(invalid_length(
            header,
            part_offset(cursor),
            "text part has no room for a terminator",
        ));
    }

    let bytes = cursor.take(len)?;
    let text = String::from_utf8_lossy(&bytes[..len - 1]).into_owned();

    Ok(Part::Text(TextPart { header, text }))
}

/// Shared body of the two numeric decoders: one big-endian `i64`.
fn read_number(header: PartHeader, cursor: &mut Cursor<'_>) -> Result<i64, DecodeError> {
    if header.content_len() != NUMBER_LEN {
        return Err(invalid_length(
            header,
            part_offset(cursor),
            "numeric part must carry exactly 8 bytes",
        ));
    }
    Ok(cursor.read_i64_be()?)
}

/// Decode a plain 64-bit integer part, returned verbatim.
///
/// # Errors
///
/// - [`DecodeError::InvalidLength`] if the content is not exactly 8 bytes.
/// - [`DecodeError::ShortBuffer`] if the cursor runs out first.
pub fn decode_number(header: PartHeader, cursor: &mut Cursor<'_>) -> Result<Part, DecodeError> {
    let value = read_number(header, cursor)?;
    Ok(Part::Number(NumberPart { header, value }))
}

/// Decode a high-resolution time or interval, truncated to whole seconds.
///
/// # Errors
///
/// Same as [`decode_number`].
pub fn decode_high_res(header: PartHeader, cursor: &mut Cursor<'_>) -> Result<Part, DecodeError> {
    let raw = read_number(header, cursor)?;
    Ok(Part::HighResNumber(HighResNumberPart {
        header,
        value: raw >> HIGH_RES_SHIFT,
    }))
}

/// Decode a value list.
///
/// ```text
/// ┌──────────────┬──────────────────────────────────────────────┐
/// │ count (u16)  │ count × { kind (u8) │ payload (4 or 8 bytes) } │
/// └──────────────┴──────────────────────────────────────────────┘
/// ```
///
/// Gauge payloads are little-endian; every other field is big-endian.
///
/// # Errors
///
/// - [`DecodeError::InvalidLength`] if the content is too short for the
///   declared samples or has bytes left after them.
/// - [`DecodeError::UnknownValueKind`] for a kind byte outside 0..=3.
/// - [`DecodeError::ShortBuffer`] if the cursor holds fewer bytes than
///   the header declares.
pub fn decode_value_list(
    header: PartHeader,
    cursor: &mut Cursor<'_>,
) -> Result<Part, DecodeError> {
    let offset = part_offset(cursor);
    let mut body = cursor.sub_cursor(header.content_len())?;
    let truncated = move |_: WireError| {
        invalid_length(header, offset, "value list is shorter than its declared samples")
    };

    let count = body.read_u16_be().map_err(truncated)?;

    // A count can claim more samples than the body could ever hold; size
    // the vector by what actually fits.
    let fits = body.remaining() / (KIND_TAG_LEN + ValueKind::Counter.payload_len());
    let mut values = Vec::with_capacity(usize::from(count).min(fits));

    for _ in 0..count {
        let kind_offset = body.offset();
        let tag = body.read_u8().map_err(truncated)?;
        let kind = ValueKind::from_wire_byte(tag)
            .map_err(|e| DecodeError::from_type_error(e, kind_offset))?;

        let value = match kind {
            ValueKind::Counter => Value::Counter(body.read_u32_be().map_err(truncated)?),
            ValueKind::Gauge => Value::Gauge(body.read_f64_le().map_err(truncated)?),
            ValueKind::Derive => Value::Derive(body.read_i32_be().map_err(truncated)?),
            ValueKind::Absolute => Value::Absolute(body.read_i32_be().map_err(truncated)?),
        };
        values.push(value);
    }

    if !body.is_empty() {
        return Err(invalid_length(
            header,
            offset,
            "value list has bytes left after its declared samples",
        ));
    }

    Ok(Part::ValueList(ValueListPart {
        header,
        count,
        values,
    }))
}

#[cfg(test)]
mod tests {
    use collectd_wire::part_type;

    use super::*;

    fn header_for(type_code: u16, content: &[u8]) -> PartHeader {
        PartHeader {
            type_code,
            length: u16::try_from(content.len() + HEADER_SIZE).unwrap(),
        }
    }

    #[test]
    fn text_drops_terminator() {
        let content = b"localhost\0";
        let header = header_for(part_type::HOSTNAME, content);
        let part = decode_text(header, &mut Cursor::new(content)).unwrap();
        assert_eq!(
            part,
            Part::Text(TextPart {
                header,
                text: "localhost".into()
            })
        );
    }

    #[test]
    fn text_drops_any_final_byte() {
        let content = b"cpuX";
        let header = header_for(part_type::PLUGIN, content);
        let Part::Text(text) = decode_text(header, &mut Cursor::new(content)).unwrap() else {
            panic!("expected text part");
        };
        assert_eq!(text.text, "cpu");
    }

    #[test]
    fn text_of_only_terminator_is_empty() {
        let content = b"\0";
        let header = header_for(part_type::TYPE_INSTANCE, content);
        let Part::Text(text) = decode_text(header, &mut Cursor::new(content)).unwrap() else {
            panic!("expected text part");
        };
        assert!(text.text.is_empty());
    }

    #[test]
    fn text_without_terminator_is_invalid() {
        let header = header_for(part_type::MESSAGE, b"");
        let result = decode_text(header, &mut Cursor::new(b""));
        assert!(matches!(result, Err(DecodeError::InvalidLength { length: 4, .. })));
    }

    #[test]
    fn text_with_invalid_utf8_is_lossy() {
        let content = [b'a', 0xFF, b'b', 0];
        let header = header_for(part_type::PLUGIN_INSTANCE, &content);
        let Part::Text(text) = decode_text(header, &mut Cursor::new(&content)).unwrap() else {
            panic!("expected text part");
        };
        assert_eq!(text.text, "a\u{FFFD}b");
    }

    #[test]
    fn number_is_verbatim() {
        let content = (-42i64).to_be_bytes();
        let header = header_for(part_type::TIME, &content);
        let part = decode_number(header, &mut Cursor::new(&content)).unwrap();
        assert_eq!(part, Part::Number(NumberPart { header, value: -42 }));
    }

    #[test]
    fn number_requires_eight_bytes() {
        let content = [0u8; 4];
        let header = header_for(part_type::INTERVAL, &content);
        let result = decode_number(header, &mut Cursor::new(&content));
        assert!(matches!(result, Err(DecodeError::InvalidLength { length: 8, .. })));
    }

    #[test]
    fn number_short_cursor_is_short_buffer() {
        // Header claims 8 content bytes but the cursor only holds 3.
        let header = PartHeader {
            type_code: part_type::TIME,
            length: 12,
        };
        let result = decode_number(header, &mut Cursor::new(&[0, 0, 0]));
        assert!(matches!(result, Err(DecodeError::ShortBuffer { needed: 8, .. })));
    }

    #[test]
    fn high_res_shifts_out_fraction() {
        let raw: i64 = 1_524_600_000_000_000_000;
        let content = raw.to_be_bytes();
        let header = header_for(part_type::TIME_HR, &content);

        let Part::Number(plain) = decode_number(header, &mut Cursor::new(&content)).unwrap() else {
            panic!("expected number part");
        };
        let Part::HighResNumber(hr) = decode_high_res(header, &mut Cursor::new(&content)).unwrap()
        else {
            panic!("expected high-res part");
        };

        assert_eq!(plain.value, raw);
        assert_eq!(hr.value, plain.value.div_euclid(1 << 30));
        assert_eq!(hr.value, 1_419_894_397);
    }

    #[test]
    fn high_res_negative_rounds_toward_negative_infinity() {
        let raw: i64 = -(1 << 30) - 1;
        let content = raw.to_be_bytes();
        let header = header_for(part_type::INTERVAL_HR, &content);
        let Part::HighResNumber(hr) = decode_high_res(header, &mut Cursor::new(&content)).unwrap()
        else {
            panic!("expected high-res part");
        };
        assert_eq!(hr.value, -2);
    }

    #[test]
    fn high_res_keeps_whole_seconds() {
        let raw: i64 = (1_419_765_641 << 30) | 0x3FFF_FFFF;
        let content = raw.to_be_bytes();
        let header = header_for(part_type::TIME_HR, &content);
        let Part::HighResNumber(hr) = decode_high_res(header, &mut Cursor::new(&content)).unwrap()
        else {
            panic!("expected high-res part");
        };
        assert_eq!(hr.value, 1_419_765_641);
    }

    fn value_list_content(entries: &[(u8, &[u8])]) -> Vec<u8> {
        let mut content = u16::try_from(entries.len()).unwrap().to_be_bytes().to_vec();
        for (kind, payload) in entries {
            content.push(*kind);
            content.extend_from_slice(payload);
        }
        content
    }

    #[test]
    fn value_list_decodes_every_kind() {
        let content = value_list_content(&[
            (0, 7u32.to_be_bytes().as_slice()),
            (1, 0.5f64.to_le_bytes().as_slice()),
            (2, (-9i32).to_be_bytes().as_slice()),
            (3, 11i32.to_be_bytes().as_slice()),
        ]);
        let header = header_for(part_type::VALUES, &content);
        let part = decode_value_list(header, &mut Cursor::new(&content)).unwrap();
        assert_eq!(
            part,
            Part::ValueList(ValueListPart {
                header,
                count: 4,
                values: vec![
                    Value::Counter(7),
                    Value::Gauge(0.5),
                    Value::Derive(-9),
                    Value::Absolute(11),
                ],
            })
        );
    }

    #[test]
    fn gauge_is_little_endian() {
        let gauge = 1234.5678f64;
        let le = value_list_content(&[(1, gauge.to_le_bytes().as_slice())]);
        let be = value_list_content(&[(1, gauge.to_be_bytes().as_slice())]);
        let header = header_for(part_type::VALUES, &le);

        let decode_gauge = |content: &[u8]| {
            let part = decode_value_list(header, &mut Cursor::new(content)).unwrap();
            match part {
                Part::ValueList(list) => match list.values[0] {
                    Value::Gauge(v) => v,
                    other => panic!("expected gauge, got {other:?}"),
                },
                other => panic!("expected value list, got {other:?}"),
            }
        };

        assert_eq!(decode_gauge(&le).to_bits(), gauge.to_bits());
        assert_ne!(decode_gauge(&be).to_bits(), gauge.to_bits());
    }

    #[test]
    fn derive_is_four_bytes() {
        let content = value_list_content(&[
            (2, [0xFF, 0xFF, 0xFF, 0xFE].as_slice()),
            (0, [0, 0, 0, 1].as_slice()),
        ]);
        let header = header_for(part_type::VALUES, &content);
        let Part::ValueList(list) = decode_value_list(header, &mut Cursor::new(&content)).unwrap()
        else {
            panic!("expected value list");
        };
        assert_eq!(list.values, vec![Value::Derive(-2), Value::Counter(1)]);
    }

    #[test]
    fn empty_value_list() {
        let content = value_list_content(&[]);
        let header = header_for(part_type::VALUES, &content);
        let Part::ValueList(list) = decode_value_list(header, &mut Cursor::new(&content)).unwrap()
        else {
            panic!("expected value list");
        };
        assert_eq!(list.count, 0);
        assert!(list.values.is_empty());
    }

    #[test]
    fn reject_unknown_value_kind() {
        let content =
            value_list_content(&[(0, [0, 0, 0, 1].as_slice()), (4, [0, 0, 0, 0].as_slice())]);
        let header = header_for(part_type::VALUES, &content);
        let result = decode_value_list(header, &mut Cursor::new(&content));
        // count (2) + counter entry (5) puts the second tag at offset 7.
        assert_eq!(
            result,
            Err(DecodeError::UnknownValueKind { offset: 7, kind: 4 })
        );
    }

    #[test]
    fn reject_value_list_with_leftover_bytes() {
        let mut content = value_list_content(&[(0, [0, 0, 0, 1].as_slice())]);
        content.push(0xAB);
        let header = header_for(part_type::VALUES, &content);
        let result = decode_value_list(header, &mut Cursor::new(&content));
        assert!(matches!(result, Err(DecodeError::InvalidLength { .. })));
    }

    #[test]
    fn reject_value_list_with_missing_samples() {
        let mut content = value_list_content(&[(0, [0, 0, 0, 1].as_slice())]);
        content[1] = 2; // claims two samples, carries one
        let header = header_for(part_type::VALUES, &content);
        let result = decode_value_list(header, &mut Cursor::new(&content));
        assert!(matches!(result, Err(DecodeError::InvalidLength { .. })));
    }

    #[test]
    fn reject_value_list_without_count() {
        let content = [0x00];
        let header = header_for(part_type::VALUES, &content);
        let result = decode_value_list(header, &mut Cursor::new(&content));
        assert!(matches!(result, Err(DecodeError::InvalidLength { .. })));
    }
}
