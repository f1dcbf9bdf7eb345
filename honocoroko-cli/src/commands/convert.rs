use anyhow::{Context, Result};
use honocoroko_core::{try_transliterate, Diagnostic, Direction, RecordingSink, TransliterationOptions};
use serde::Serialize;
use std::fs;
use std::io::{self, Read, Write};
use tracing::{debug, info, warn};

/// Where the text to convert comes from
#[derive(Debug, Clone, Copy)]
pub enum Source<'a> {
    /// Inline text from the command line
    Text(&'a str),
    /// A file path, or "-" for stdin
    Path(&'a str),
}

#[derive(Serialize)]
struct ReportEntry {
    direction: Direction,
    offset: usize,
    character: char,
    codepoint: String,
    message: String,
}

impl From<&Diagnostic> for ReportEntry {
    fn from(d: &Diagnostic) -> Self {
        Self {
            direction: d.direction,
            offset: d.offset,
            character: d.character,
            codepoint: format!("U+{:04X}", d.codepoint()),
            message: d.to_string(),
        }
    }
}

/// Convert `source` in `direction` and write the result.
///
/// Returns the number of unmapped characters.
pub fn execute(
    source: Source<'_>,
    output: Option<&str>,
    direction: Direction,
    options: &TransliterationOptions,
    report: Option<&str>,
) -> Result<usize> {
    let text = read_source(source)?;
    info!("Converting {} chars ({})", text.chars().count(), direction);

    let sink = RecordingSink::new();
    let converted = try_transliterate(&text, direction, options, &sink)
        .with_context(|| "Strict mode rejected the input")?;

    let diagnostics = sink.take();
    for d in &diagnostics {
        debug!("offset {}: {}", d.offset, d);
    }
    if !diagnostics.is_empty() {
        warn!("{} characters had no mapping and were copied through", diagnostics.len());
    }

    match output {
        Some(path) => {
            fs::write(path, &converted)
                .with_context(|| format!("Failed to write output file: {}", path))?;
            info!("Output written to: {}", path);
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(converted.as_bytes())?;
            if !converted.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
        }
    }

    if let Some(report_path) = report {
        let entries: Vec<ReportEntry> = diagnostics.iter().map(ReportEntry::from).collect();
        let json = serde_json::to_string_pretty(&entries)
            .with_context(|| "Failed to serialize diagnostics report")?;
        fs::write(report_path, json)
            .with_context(|| format!("Failed to write report file: {}", report_path))?;
        info!("Diagnostics report written to: {}", report_path);
    }

    Ok(diagnostics.len())
}

fn read_source(source: Source<'_>) -> Result<String> {
    match source {
        Source::Text(text) => Ok(text.to_string()),
        Source::Path("-") => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .with_context(|| "Failed to read stdin")?;
            Ok(buf)
        }
        Source::Path(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path)),
    }
}
