/// Implementation of `cdpart inspect`.
///
/// Prints one line per decoded part, in wire order, optionally filtered
/// to a single part type.
///
/// ```text
/// 0    HOSTNAME "localhost"
/// 1    TIME_HR 1419765641
/// 2    INTERVAL_HR 10
/// 3    PLUGIN "disk"
/// ...
/// ```
use anyhow::{Result, bail};
use collectd_types::PartType;

use crate::{InspectArgs, Options};

pub fn run(args: &InspectArgs, options: &Options) -> Result<()> {
    let filter = match args.part_type.as_deref() {
        Some(label) => match PartType::from_label(label) {
            Some(part_type) => Some(part_type),
            None => bail!("unknown part type {label:?}"),
        },
        None => None,
    };

    let (_, parts) = options.load(&args.file)?;

    for (idx, part) in parts.iter().enumerate() {
        if let Some(wanted) = filter
            && part.part_type() != wanted
        {
            continue;
        }

        if args.lengths {
            println!("{idx:<4} {part} ({} bytes)", part.header().length);
        } else {
            println!("{idx:<4} {part}");
        }
    }

    Ok(())
}
