#![warn(clippy::pedantic)]

pub mod cursor;
pub mod error;
pub mod header;
pub mod part_type;

pub use cursor::Cursor;
pub use error::WireError;
pub use header::{HEADER_SIZE, PartHeader};
