//! Report presentation: terminal and JSON writers.

use crate::core::Report;
use colored::Colorize;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Terminal,
    Json,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    root: PathBuf,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, root: &Path) -> Self {
        Self {
            writer,
            root: root.to_path_buf(),
        }
    }

    fn display_path(&self, path: &Path) -> String {
        pathdiff::diff_paths(path, &self.root)
            .unwrap_or_else(|| path.to_path_buf())
            .display()
            .to_string()
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()> {
        for finding in &report.findings {
            let path = self.display_path(&finding.path);
            writeln!(self.writer, "{}  {}", path.cyan(), finding.names.join(", "))?;
        }
        if !report.findings.is_empty() {
            writeln!(self.writer)?;
        }
        writeln!(
            self.writer,
            "{} in {} ({} ms)",
            plural(report.total_declarations, "component").bold(),
            plural(report.files_with_findings, "file"),
            report.elapsed_ms
        )?;
        Ok(())
    }
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

pub fn create_writer(format: OutputFormat, root: &Path) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(std::io::stdout())),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(std::io::stdout(), root)),
    }
}
