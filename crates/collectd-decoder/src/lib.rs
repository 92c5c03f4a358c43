#![warn(clippy::pedantic)]

pub mod accessors;
pub mod content;
pub mod decoder;
pub mod error;
pub mod registry;

pub use accessors::PartSliceExt;
pub use decoder::{PacketDecoder, decode_packet};
pub use error::DecodeError;
pub use registry::{DecodeFn, Registry};
