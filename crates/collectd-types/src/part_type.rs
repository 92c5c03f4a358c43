use collectd_wire::part_type;

/// Semantic part type identifiers.
///
/// Mirrors the raw constants in `collectd_wire::part_type`. Codes this
/// version does not name are kept as `Unknown(code)`; the packet decoder
/// skips them rather than failing.
///
/// ```text
/// ┌────────┬────────────────┬───────────────────────────────────┐
/// │ Wire   │ Variant        │ Content                           │
/// ├────────┼────────────────┼───────────────────────────────────┤
/// │ 0x0000 │ Hostname       │ NUL-terminated string             │
/// │ 0x0001 │ Time           │ i64 seconds                       │
/// │ 0x0002 │ Plugin         │ NUL-terminated string             │
/// │ 0x0003 │ PluginInstance │ NUL-terminated string             │
/// │ 0x0004 │ Type           │ NUL-terminated string             │
/// │ 0x0005 │ TypeInstance   │ NUL-terminated string             │
/// │ 0x0006 │ Values         │ count + typed samples             │
/// │ 0x0007 │ Interval       │ i64 seconds                       │
/// │ 0x0008 │ TimeHr         │ i64, 2^-30 second units           │
/// │ 0x0009 │ IntervalHr     │ i64, 2^-30 second units           │
/// │ 0x0100 │ Message        │ NUL-terminated string             │
/// │ 0x0101 │ Severity       │ i64                               │
/// │ 0x0200 │ Signature      │ HMAC-SHA-256 (not decoded)        │
/// │ 0x0210 │ Encryption     │ AES-256 payload (not decoded)     │
/// └────────┴────────────────┴───────────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PartType {
  Hostname,
  Time,
  Plugin,
  PluginInstance,
  Type,
  TypeInstance,
  Values,
  Interval,
  TimeHr,
  IntervalHr,
  Message,
  Severity,
  Signature,
  Encryption,
  Unknown(u16),
}

impl PartType {
  pub fn wire_id(self) -> u16 {
    match self {
      Self::Hostname => part_type::HOSTNAME,
      Self::Time => part_type::TIME,
      Self::Plugin => part_type::PLUGIN,
      Self::PluginInstance => part_type::PLUGIN_INSTANCE,
      Self::Type => part_type::TYPE,
      Self::TypeInstance => part_type::TYPE_INSTANCE,
      Self::Values => part_type::VALUES,
      Self::Interval => part_type::INTERVAL,
      Self::TimeHr => part_type::TIME_HR,
      Self::IntervalHr => part_type::INTERVAL_HR,
      Self::Message => part_type::MESSAGE,
      Self::Severity => part_type::SEVERITY,
      Self::Signature => part_type::SIGNATURE,
      Self::Encryption => part_type::ENCRYPTION,
      Self::Unknown(code) => code,
    }
  }

  pub fn from_wire_id(code: u16) -> Self {
    match code {
      part_type::HOSTNAME => Self::Hostname,
      part_type::TIME => Self::Time,
      part_type::PLUGIN => Self::Plugin,
      part_type::PLUGIN_INSTANCE => Self::PluginInstance,
      part_type::TYPE => Self::Type,
      part_type::TYPE_INSTANCE => Self::TypeInstance,
      part_type::VALUES => Self::Values,
      part_type::INTERVAL => Self::Interval,
      part_type::TIME_HR => Self::TimeHr,
      part_type::INTERVAL_HR => Self::IntervalHr,
      part_type::MESSAGE => Self::Message,
      part_type::SEVERITY => Self::Severity,
      part_type::SIGNATURE => Self::Signature,
      part_type::ENCRYPTION => Self::Encryption,
      other => Self::Unknown(other),
    }
  }

  /// Uppercase label used in human-readable output, e.g. `PLUGIN_INSTANCE`.
  /// Unknown codes render as `UNKNOWN`.
  pub fn label(self) -> &'static str {
    match self {
      Self::Hostname => "HOSTNAME",
      Self::Time => "TIME",
      Self::Plugin => "PLUGIN",
      Self::PluginInstance => "PLUGIN_INSTANCE",
      Self::Type => "TYPE",
      Self::TypeInstance => "TYPE_INSTANCE",
      Self::Values => "VALUES",
      Self::Interval => "INTERVAL",
      Self::TimeHr => "TIME_HR",
      Self::IntervalHr => "INTERVAL_HR",
      Self::Message => "MESSAGE",
      Self::Severity => "SEVERITY",
      Self::Signature => "SIGNATURE",
      Self::Encryption => "ENCRYPTION",
      Self::Unknown(_) => "UNKNOWN",
    }
  }

  /// Inverse of [`label`](Self::label), case-insensitive. Accepts `-` in
  /// place of `_` so `plugin-instance` works on the command line.
  pub fn from_label(label: &str) -> Option<Self> {
    let normalized = label.trim().to_ascii_uppercase().replace('-', "_");
    [
      Self::Hostname,
      Self::Time,
      Self::Plugin,
      Self::PluginInstance,
      Self::Type,
      Self::TypeInstance,
      Self::Values,
      Self::Interval,
      Self::TimeHr,
      Self::IntervalHr,
      Self::Message,
      Self::Severity,
      Self::Signature,
      Self::Encryption,
    ]
    .into_iter()
    .find(|t| t.label() == normalized)
  }
}
