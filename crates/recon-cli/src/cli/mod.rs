use clap::Parser;

pub mod global;

pub use global::OutputFormat;

/// Top-level CLI parser for the `recon` binary.
///
/// Flags override values from `.recon/config.toml` and `RECON_*` variables.
#[derive(Debug, Parser)]
#[command(
    name = "recon",
    version,
    about = "Cross-check drivers, vehicles, and reservations from the back-office data API"
)]
pub struct Cli {
    /// Data API root URL (default: http://localhost:4050)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Per-section fetch timeout in seconds, 0 to disable
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Reservations shown in the sample and resolution sections
    #[arg(long)]
    pub sample_size: Option<usize>,

    /// Output format: text, json
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Quiet mode (errors only on stderr)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}
