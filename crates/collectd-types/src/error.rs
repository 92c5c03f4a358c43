/// Errors raised while interpreting typed content.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypeError {
  /// A value-list entry carried a kind byte outside 0..=3.
  #[error("unknown value kind: {value:#04X}")]
  UnknownValueKind { value: u8 },
}
