//! Fixture helpers for the collectd integration tests.
//!
//! [`PacketBuilder`] assembles datagrams part by part so tests can state
//! the wire layout they expect instead of spelling out hex. It writes
//! exactly what the decoder reads, including 4-byte derive samples, so it
//! is a test fixture and not a general collectd encoder.

#![allow(clippy::pedantic)]

use collectd_types::Value;
use collectd_wire::{HEADER_SIZE, part_type};

/// Seconds component of every timestamp in [`cpu_disk_sample`].
pub const SAMPLE_EPOCH: i64 = 1_419_765_641;

/// Block devices reported by the disk plugin in [`cpu_disk_sample`].
pub const SAMPLE_DISKS: [&str; 5] = ["sda1", "sda2", "sda5", "dm-0", "dm-1"];

/// Per-disk metric types in [`cpu_disk_sample`], in emission order.
pub const SAMPLE_DISK_TYPES: [&str; 4] = ["disk_octets", "disk_ops", "disk_time", "disk_merge"];

/// CPU states reported by the cpu plugin in [`cpu_disk_sample`].
pub const SAMPLE_CPU_STATES: [&str; 6] = ["user", "nice", "system", "idle", "wait", "interrupt"];

/// Chaining builder for a single datagram.
///
/// ```rust
/// use collectd_tests::PacketBuilder;
///
/// let datagram = PacketBuilder::new().hostname("localhost").build();
/// assert_eq!(&datagram[..4], &[0x00, 0x00, 0x00, 0x0E]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct PacketBuilder {
    buf: Vec<u8>,
}

impl PacketBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a part with an arbitrary code and content; the length field
    /// is computed.
    ///
    /// # Panics
    ///
    /// If the part would not fit the 16-bit length field.
    pub fn raw_part(mut self, type_code: u16, content: &[u8]) -> Self {
        let length = u16::try_from(content.len() + HEADER_SIZE).expect("part too long");
        self.buf.extend_from_slice(&type_code.to_be_bytes());
        self.buf.extend_from_slice(&length.to_be_bytes());
        self.buf.extend_from_slice(content);
        self
    }

    /// Append bytes verbatim, for building malformed datagrams.
    pub fn raw_bytes(mut self, bytes: &[u8]) -> Self {
        self.buf.extend_from_slice(bytes);
        self
    }

    /// Append a NUL-terminated string part.
    pub fn text(self, type_code: u16, text: &str) -> Self {
        let mut content = text.as_bytes().to_vec();
        content.push(0);
        self.raw_part(type_code, &content)
    }

    pub fn hostname(self, host: &str) -> Self {
        self.text(part_type::HOSTNAME, host)
    }

    pub fn plugin(self, plugin: &str) -> Self {
        self.text(part_type::PLUGIN, plugin)
    }

    pub fn plugin_instance(self, instance: &str) -> Self {
        self.text(part_type::PLUGIN_INSTANCE, instance)
    }

    pub fn type_name(self, type_name: &str) -> Self {
        self.text(part_type::TYPE, type_name)
    }

    pub fn type_instance(self, instance: &str) -> Self {
        self.text(part_type::TYPE_INSTANCE, instance)
    }

    pub fn message(self, message: &str) -> Self {
        self.text(part_type::MESSAGE, message)
    }

    /// Append a plain big-endian i64 part.
    pub fn number(self, type_code: u16, value: i64) -> Self {
        self.raw_part(type_code, &value.to_be_bytes())
    }

    /// Append a high-resolution time: `seconds` plus `fraction` / 2^30.
    pub fn time_hr(self, seconds: i64, fraction: u32) -> Self {
        self.number(part_type::TIME_HR, high_res(seconds, fraction))
    }

    pub fn interval_hr(self, seconds: i64) -> Self {
        self.number(part_type::INTERVAL_HR, high_res(seconds, 0))
    }

    /// Append a value list holding `values` in order.
    pub fn values(self, values: &[Value]) -> Self {
        let count = u16::try_from(values.len()).expect("too many values");
        let mut content = count.to_be_bytes().to_vec();
        for value in values {
            content.push(value.kind().wire_byte());
            match *value {
                Value::Counter(v) => content.extend_from_slice(&v.to_be_bytes()),
                Value::Gauge(v) => content.extend_from_slice(&v.to_le_bytes()),
                Value::Derive(v) | Value::Absolute(v) => {
                    content.extend_from_slice(&v.to_be_bytes());
                }
            }
        }
        self.raw_part(part_type::VALUES, &content)
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn build(self) -> Vec<u8> {
        self.buf
    }
}

/// Raw high-resolution encoding of `seconds + fraction / 2^30`.
pub fn high_res(seconds: i64, fraction: u32) -> i64 {
    (seconds << 30) | i64::from(fraction & 0x3FFF_FFFF)
}

/// A datagram shaped like one flush of the disk and cpu read plugins on a
/// single host: 20 disk value lists (5 devices × 4 types, two derive
/// samples each) followed by 6 cpu value lists (one derive sample each).
///
/// Like collectd's own writer, identifier parts are only repeated when
/// they change, so the datagram carries 1 hostname, 2 plugin, 6 plugin
/// instance, 21 type, 6 type instance and 26 high-resolution time parts,
/// plus a single interval.
///
/// The committed file `tests/golden/cpu_disk.dat` holds these bytes.
pub fn cpu_disk_sample() -> Vec<u8> {
    let mut tick = 0u32;
    let mut next_time = |b: PacketBuilder| {
        let b = b.time_hr(SAMPLE_EPOCH, tick << 20);
        tick += 1;
        b
    };

    let mut b = PacketBuilder::new().hostname("localhost");

    for (i, disk) in SAMPLE_DISKS.iter().enumerate() {
        let n = i32::try_from(i).expect("few disks");
        for (j, type_name) in SAMPLE_DISK_TYPES.iter().enumerate() {
            b = next_time(b);
            if i == 0 && j == 0 {
                b = b.interval_hr(10).plugin("disk");
            }
            if j == 0 {
                b = b.plugin_instance(disk);
            }
            let (read, write) = match j {
                0 => (1024 * (n + 1), 2048 * (n + 1)),
                1 => (n + 10, n + 20),
                2 => (n + 1, n + 2),
                _ => (0, n),
            };
            b = b
                .type_name(type_name)
                .values(&[Value::Derive(read), Value::Derive(write)]);
        }
    }

    let cpu_ticks = [1000, 5, 300, 90_000, 12, 0];
    for (k, state) in SAMPLE_CPU_STATES.iter().enumerate() {
        b = next_time(b);
        if k == 0 {
            b = b.plugin("cpu").plugin_instance("0").type_name("cpu");
        }
        b = b
            .type_instance(state)
            .values(&[Value::Derive(cpu_ticks[k])]);
    }

    b.build()
}
