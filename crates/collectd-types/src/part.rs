use std::fmt;

use collectd_wire::PartHeader;

use crate::part_type::PartType;
use crate::value::Value;

/// A string part: hostname, plugin, plugin instance, type, type instance
/// or message. The wire terminator has already been stripped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextPart {
  pub header: PartHeader,
  pub text: String,
}

/// A plain 64-bit integer part, returned verbatim.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NumberPart {
  pub header: PartHeader,
  pub value: i64,
}

/// A high-resolution time or interval, truncated to whole seconds.
///
/// The raw wire value holds seconds in the upper 34 bits and a 2^-30
/// fraction in the lower 30; `value` is the raw value shifted right by 30
/// (arithmetic, so negative inputs round toward negative infinity).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HighResNumberPart {
  pub header: PartHeader,
  pub value: i64,
}

/// A value-list part: `count` samples in wire order.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueListPart {
  pub header: PartHeader,
  pub count: u16,
  pub values: Vec<Value>,
}

/// One decoded part, in the order it appeared in the datagram.
#[derive(Clone, Debug, PartialEq)]
pub enum Part {
  Text(TextPart),
  Number(NumberPart),
  HighResNumber(HighResNumberPart),
  ValueList(ValueListPart),
}

impl Part {
  pub fn header(&self) -> PartHeader {
    match self {
      Self::Text(p) => p.header,
      Self::Number(p) => p.header,
      Self::HighResNumber(p) => p.header,
      Self::ValueList(p) => p.header,
    }
  }

  pub fn type_code(&self) -> u16 {
    self.header().type_code
  }

  pub fn part_type(&self) -> PartType {
    PartType::from_wire_id(self.type_code())
  }
}

/// Single-line rendering: `LABEL content`.
///
/// ```text
/// HOSTNAME "localhost"
/// TIME_HR 1419765641
/// VALUES [derive:1, gauge:0.5]
/// UNKNOWN(0x4242) "…"
/// ```
impl fmt::Display for Part {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.part_type() {
      PartType::Unknown(code) => write!(f, "UNKNOWN({code:#06X}) ")?,
      known => write!(f, "{} ", known.label())?,
    }
    match self {
      Self::Text(p) => write!(f, "{:?}", p.text),
      Self::Number(p) => write!(f, "{}", p.value),
      Self::HighResNumber(p) => write!(f, "{}", p.value),
      Self::ValueList(p) => {
        f.write_str("[")?;
        for (i, value) in p.values.iter().enumerate() {
          if i > 0 {
            f.write_str(", ")?;
          }
          write!(f, "{value}")?;
        }
        f.write_str("]")
      }
    }
  }
}
