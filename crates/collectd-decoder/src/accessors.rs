use collectd_types::{HighResNumberPart, NumberPart, Part, TextPart, ValueListPart};

/// Typed filters over a decoded part sequence.
///
/// Each method keeps only parts whose type code matches exactly AND whose
/// variant is the one asked for, preserving wire order. A part registered
/// under a code with a different decoder (for example a custom registry
/// that reads `PLUGIN` as a number) is silently excluded rather than
/// reported.
///
/// ```rust
/// use collectd_decoder::{PartSliceExt, decode_packet};
/// use collectd_wire::part_type;
///
/// let datagram = [0x00, 0x02, 0x00, 0x08, b'c', b'p', b'u', 0x00];
/// let parts = decode_packet(&datagram).unwrap();
/// let plugins: Vec<&str> = parts.texts(part_type::PLUGIN).collect();
/// assert_eq!(plugins, ["cpu"]);
/// ```
pub trait PartSliceExt {
    fn text_parts(&self, type_code: u16) -> impl Iterator<Item = &TextPart>;

    /// Text content of every [`TextPart`] with `type_code`.
    fn texts(&self, type_code: u16) -> impl Iterator<Item = &str> {
        self.text_parts(type_code).map(|p| p.text.as_str())
    }

    fn number_parts(&self, type_code: u16) -> impl Iterator<Item = &NumberPart>;

    fn high_res_parts(&self, type_code: u16) -> impl Iterator<Item = &HighResNumberPart>;

    /// Whole-second values of every [`HighResNumberPart`] with `type_code`.
    fn high_res_values(&self, type_code: u16) -> impl Iterator<Item = i64> {
        self.high_res_parts(type_code).map(|p| p.value)
    }

    /// Every value list, whatever code it was registered under.
    fn value_lists(&self) -> impl Iterator<Item = &ValueListPart>;

    /// Number of parts carrying `type_code`, regardless of variant.
    fn count_of(&self, type_code: u16) -> usize;
}

impl PartSliceExt for [Part] {
    fn text_parts(&self, type_code: u16) -> impl Iterator<Item = &TextPart> {
        self.iter().filter_map(move |part| match part {
            Part::Text(p) if p.header.type_code == type_code => Some(p),
            _ => None,
        })
    }

    fn number_parts(&self, type_code: u16) -> impl Iterator<Item = &NumberPart> {
        self.iter().filter_map(move |part| match part {
            Part::Number(p) if p.header.type_code == type_code => Some(p),
            _ => None,
        })
    }

    fn high_res_parts(&self, type_code: u16) -> impl Iterator<Item = &HighResNumberPart> {
        self.iter().filter_map(move |part| match part {
            Part::HighResNumber(p) if p.header.type_code == type_code => Some(p),
            _ => None,
        })
    }

    fn value_lists(&self) -> impl Iterator<Item = &ValueListPart> {
        self.iter().filter_map(|part| match part {
            Part::ValueList(p) => Some(p),
            _ => None,
        })
    }

    fn count_of(&self, type_code: u16) -> usize {
        self.iter().filter(|p| p.type_code() == type_code).count()
    }
}
