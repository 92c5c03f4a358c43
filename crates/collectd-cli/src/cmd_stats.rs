/// Implementation of `cdpart stats`.
///
/// ```text
/// File:    cpu_disk.dat
/// Size:    1151 bytes, 89 parts
///
/// Parts by type:
///   HOSTNAME               1
///   TIME_HR               26
///   ...
///
/// Values by kind:
///   derive                46
/// ```
use std::collections::BTreeMap;

use anyhow::Result;
use collectd_decoder::PartSliceExt;
use collectd_types::{PartType, ValueKind};

use crate::{FileArgs, Options};

pub fn run(args: &FileArgs, options: &Options) -> Result<()> {
    let (bytes, parts) = options.load(&args.file)?;

    println!("File:    {}", args.file.display());
    println!("Size:    {} bytes, {} parts", bytes.len(), parts.len());

    // Keyed by wire code so the listing follows the numeric order of the
    // part types rather than the order they first appeared.
    let mut by_type: BTreeMap<u16, usize> = BTreeMap::new();
    for part in &parts {
        *by_type.entry(part.type_code()).or_default() += 1;
    }

    println!();
    println!("Parts by type:");
    for (code, count) in &by_type {
        let label = PartType::from_wire_id(*code).label();
        println!("  {label:<18} {count:>4}");
    }

    let mut by_kind: BTreeMap<u8, usize> = BTreeMap::new();
    for list in parts.value_lists() {
        for value in &list.values {
            *by_kind.entry(value.kind().wire_byte()).or_default() += 1;
        }
    }

    if !by_kind.is_empty() {
        println!();
        println!("Values by kind:");
        for (byte, count) in &by_kind {
            let label = ValueKind::from_wire_byte(*byte).map_or("?", ValueKind::label);
            println!("  {label:<18} {count:>4}");
        }
    }

    Ok(())
}
