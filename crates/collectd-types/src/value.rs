use std::fmt;

use crate::error::TypeError;

/// Data-source kind tag preceding each sample in a value list.
///
/// ```text
/// ┌──────┬──────────┬─────────────────────────────┐
/// │ Byte │ Kind     │ Payload                     │
/// ├──────┼──────────┼─────────────────────────────┤
/// │ 0    │ Counter  │ u32, big-endian             │
/// │ 1    │ Gauge    │ f64, LITTLE-endian          │
/// │ 2    │ Derive   │ i32, big-endian             │
/// │ 3    │ Absolute │ i32, big-endian             │
/// └──────┴──────────┴─────────────────────────────┘
/// ```
///
/// Derive is read as 4 bytes. Stock collectd writes 8; see DESIGN.md.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
  Counter = 0,
  Gauge = 1,
  Derive = 2,
  Absolute = 3,
}

impl ValueKind {
  /// # Errors
  ///
  /// [`TypeError::UnknownValueKind`] for bytes outside 0..=3.
  pub fn from_wire_byte(value: u8) -> Result<Self, TypeError> {
    match value {
      0 => Ok(Self::Counter),
      1 => Ok(Self::Gauge),
      2 => Ok(Self::Derive),
      3 => Ok(Self::Absolute),
      other => Err(TypeError::UnknownValueKind { value: other }),
    }
  }

  pub fn wire_byte(self) -> u8 {
    self as u8
  }

  /// Width in bytes of the payload following the kind tag.
  pub fn payload_len(self) -> usize {
    match self {
      Self::Counter | Self::Derive | Self::Absolute => 4,
      Self::Gauge => 8,
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      Self::Counter => "counter",
      Self::Gauge => "gauge",
      Self::Derive => "derive",
      Self::Absolute => "absolute",
    }
  }
}

/// One typed sample from a value list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
  Counter(u32),
  Gauge(f64),
  Derive(i32),
  Absolute(i32),
}

impl Value {
  pub fn kind(&self) -> ValueKind {
    match self {
      Self::Counter(_) => ValueKind::Counter,
      Self::Gauge(_) => ValueKind::Gauge,
      Self::Derive(_) => ValueKind::Derive,
      Self::Absolute(_) => ValueKind::Absolute,
    }
  }

  /// The sample widened to `f64`, convenient for ingestion layers that
  /// store every series as floating point.
  pub fn as_f64(&self) -> f64 {
    match *self {
      Self::Counter(v) => f64::from(v),
      Self::Gauge(v) => v,
      Self::Derive(v) | Self::Absolute(v) => f64::from(v),
    }
  }
}

impl fmt::Display for Value {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let label = self.kind().label();
    match self {
      Self::Counter(v) => write!(f, "{label}:{v}"),
      Self::Gauge(v) => write!(f, "{label}:{v}"),
      Self::Derive(v) | Self::Absolute(v) => write!(f, "{label}:{v}"),
    }
  }
}
