use std::io::Write;

use anyhow::Context;
use recon_core::Report;

use crate::cli::OutputFormat;

/// Render a report to a string in the requested format.
pub fn render(report: &Report, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(report.render()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)? + "\n"),
    }
}

/// Write a rendered report to `writer`. Write failures, such as a closed
/// pipe, are returned instead of panicking.
pub fn write_report<W: Write>(
    writer: &mut W,
    report: &Report,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let rendered = render(report, format)?;
    writer
        .write_all(rendered.as_bytes())
        .and_then(|()| writer.flush())
        .context("failed to write report")
}

/// Print a report to stdout in the requested format.
pub fn output(report: &Report, format: OutputFormat) -> anyhow::Result<()> {
    write_report(&mut std::io::stdout().lock(), report, format)
}
