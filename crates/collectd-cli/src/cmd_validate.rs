/// Implementation of `cdpart validate`.
///
/// Decodes the datagram and prints a short confirmation. Any decode
/// failure surfaces through `main` as a non-zero exit.
///
/// ```text
/// ✓ cpu_disk.dat: 89 parts, 1151 bytes
/// ```
use anyhow::Result;

use crate::{FileArgs, Options};

pub fn run(args: &FileArgs, options: &Options) -> Result<()> {
    let (bytes, parts) = options.load(&args.file)?;
    println!(
        "✓ {}: {} part{}, {} bytes",
        args.file.display(),
        parts.len(),
        if parts.len() == 1 { "" } else { "s" },
        bytes.len()
    );
    Ok(())
}
