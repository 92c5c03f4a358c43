//! Part type codes as they appear in the first two bytes of every part.
//!
//! The `collectd-types` crate maps these onto the `PartType` enum; the
//! decoder's registry keys its table on the raw values here.

pub const HOSTNAME: u16 = 0x0000;
pub const TIME: u16 = 0x0001;
pub const PLUGIN: u16 = 0x0002;
pub const PLUGIN_INSTANCE: u16 = 0x0003;
pub const TYPE: u16 = 0x0004;
pub const TYPE_INSTANCE: u16 = 0x0005;
pub const VALUES: u16 = 0x0006;
pub const INTERVAL: u16 = 0x0007;
/// Time in 2^-30 second units.
pub const TIME_HR: u16 = 0x0008;
/// Interval in 2^-30 second units.
pub const INTERVAL_HR: u16 = 0x0009;
pub const MESSAGE: u16 = 0x0100;
pub const SEVERITY: u16 = 0x0101;
pub const SIGNATURE: u16 = 0x0200;
pub const ENCRYPTION: u16 = 0x0210;
