#![warn(clippy::pedantic)]

pub mod error;
pub mod part;
pub mod part_type;
pub mod value;

pub use error::TypeError;
pub use part::{HighResNumberPart, NumberPart, Part, TextPart, ValueListPart};
pub use part_type::PartType;
pub use value::{Value, ValueKind};
