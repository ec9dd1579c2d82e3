//! Text and JSON rendering of scan results.

use std::io::{self, Write};
use std::path::Path;

use clap::ValueEnum;
use serde::Serialize;

use durank_core::{Entry, ScanWarning, format_size, serialize_path_lossy};
use durank_scan::ScanResult;

#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// How each ranked line is laid out in text output.
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum ListStyle {
    /// `#1  1.20 GB    path`
    #[default]
    Ranked,
    /// `#1 [FILE] path -> 1.20 GB`
    Detailed,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(serialize_with = "serialize_path_lossy")]
    root: &'a Path,
    total_size: u64,
    files_scanned: u64,
    dirs_scanned: u64,
    scan_duration_ms: u64,
    entries: &'a [Entry],
    warnings: &'a [ScanWarning],
}

/// Write the ranking followed by the total line.
pub fn write_text(out: &mut impl Write, result: &ScanResult, style: ListStyle) -> io::Result<()> {
    for (i, entry) in result.entries().iter().enumerate() {
        match style {
            ListStyle::Ranked => {
                let rank = format!("#{}", i + 1);
                writeln!(
                    out,
                    "{rank:3} {:10} {}",
                    format_size(entry.size()),
                    entry.path().display()
                )?;
            }
            ListStyle::Detailed => {
                let kind = if entry.is_file() { "FILE" } else { "FOLDER" };
                writeln!(
                    out,
                    "#{} [{kind}] {} -> {}",
                    i + 1,
                    entry.path().display(),
                    format_size(entry.size())
                )?;
            }
        }
    }

    let summary = &result.summary;
    writeln!(
        out,
        "Total size of scanned from `{}` is {}",
        summary.root.display(),
        format_size(summary.total_size)
    )?;

    if summary.has_warnings() {
        writeln!(
            out,
            "{} warning(s) during scan; results are a lower bound",
            summary.warnings.len()
        )?;
    }

    Ok(())
}

/// Write the full result as a pretty-printed JSON document.
pub fn write_json(out: &mut impl Write, result: &ScanResult) -> io::Result<()> {
    let summary = &result.summary;
    let report = JsonReport {
        root: &summary.root,
        total_size: summary.total_size,
        files_scanned: summary.files_scanned,
        dirs_scanned: summary.dirs_scanned,
        scan_duration_ms: summary.scan_duration.as_millis() as u64,
        entries: result.entries(),
        warnings: &summary.warnings,
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)
}
