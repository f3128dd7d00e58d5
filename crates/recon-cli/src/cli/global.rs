use clap::ValueEnum;

/// Report output mode.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Numbered plain-text sections.
    Text,
    /// The same sections as pretty-printed JSON.
    Json,
}
