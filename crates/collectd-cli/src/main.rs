/// collectd part inspector: decode captured collectd network datagrams
/// and print what they contain.
///
/// # Command overview
///
/// ```text
/// cdpart <COMMAND> [OPTIONS]
///
/// Commands:
///   inspect    Print one line per decoded part
///   validate   Check that a datagram decodes cleanly
///   stats      Count parts per type and values per kind
///   dump       Print the decoded parts as JSON
///   help       Print help information
///
/// Global options:
///   -v, --verbose     Log skipped parts and decode progress to stderr
///   --plain-time      Also decode the pre-5.0 TIME / INTERVAL parts
///   -h, --help        Print help
///   -V, --version     Print version
/// ```
///
/// Input files hold exactly one datagram as it arrived on the wire (for
/// example a UDP payload written out by tcpdump or a test harness).
///
/// # Exit codes
///
/// | Code | Meaning                                       |
/// |------|-----------------------------------------------|
/// | 0    | Success                                       |
/// | 1    | Error (unreadable file, malformed datagram)   |
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use collectd_decoder::{PacketDecoder, Registry};
use collectd_types::Part;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod cmd_dump;
mod cmd_inspect;
mod cmd_stats;
mod cmd_validate;

// ── CLI root ──────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "cdpart", version, about = "collectd network datagram inspector")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log decode progress and skipped parts (RUST_LOG overrides).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Decode low-resolution TIME (0x0001) and INTERVAL (0x0007) parts
    /// instead of skipping them.
    #[arg(long, global = true)]
    plain_time: bool,
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Print one line per decoded part.
    Inspect(InspectArgs),
    /// Check that a datagram decodes cleanly.
    Validate(FileArgs),
    /// Count parts per type and values per kind.
    Stats(FileArgs),
    /// Print the decoded parts as JSON.
    Dump(DumpArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Arguments for `cdpart inspect`.
///
/// ```text
/// ┌──────────────────┬───────────────────────────────────────────────┐
/// │ Flag             │ Effect                                        │
/// ├──────────────────┼───────────────────────────────────────────────┤
/// │ --part-type NAME │ Only show parts of this type (e.g. plugin)    │
/// │ --lengths        │ Append each part's declared length            │
/// └──────────────────┴───────────────────────────────────────────────┘
/// ```
#[derive(clap::Args)]
pub struct InspectArgs {
    /// Path to the datagram file.
    pub file: PathBuf,

    /// Only show parts of this type, by label (`plugin`, `time-hr`, ...).
    #[arg(long)]
    pub part_type: Option<String>,

    /// Append each part's declared length in bytes.
    #[arg(long)]
    pub lengths: bool,
}

#[derive(clap::Args)]
pub struct FileArgs {
    /// Path to the datagram file.
    pub file: PathBuf,
}

#[derive(clap::Args)]
pub struct DumpArgs {
    /// Path to the datagram file.
    pub file: PathBuf,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pub pretty: bool,
}

/// Settings shared by every sub-command.
pub struct Options {
    pub plain_time: bool,
}

impl Options {
    /// The registry selected by the global flags.
    pub fn registry(&self) -> Cow<'static, Registry> {
        if self.plain_time {
            Cow::Owned(Registry::with_plain_time())
        } else {
            Cow::Borrowed(Registry::standard())
        }
    }

    /// Read `path` and decode it as one datagram.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not decode.
    pub fn load(&self, path: &Path) -> Result<(Vec<u8>, Vec<Part>)> {
        let bytes = fs::read(path).with_context(|| format!("cannot read {}", path.display()))?;
        debug!(path = %path.display(), len = bytes.len(), "read datagram");
        let registry = self.registry();
        let parts = PacketDecoder::new(&registry)
            .decode(&bytes)
            .with_context(|| format!("failed to decode {}", path.display()))?;
        Ok((bytes, parts))
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = Options {
        plain_time: cli.plain_time,
    };

    let result = match cli.command {
        Commands::Inspect(args) => cmd_inspect::run(&args, &options),
        Commands::Validate(args) => cmd_validate::run(&args, &options),
        Commands::Stats(args) => cmd_stats::run(&args, &options),
        Commands::Dump(args) => cmd_dump::run(&args, &options),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
