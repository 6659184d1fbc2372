use crate::io::output::OutputFormat;
use crate::pipeline::DEFAULT_BATCH_SIZE;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    /// Colored per-file listing with a summary line
    Terminal,
    /// Pretty-printed JSON report
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Terminal => OutputFormat::Terminal,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "reactscan")]
#[command(about = "Scan a directory tree for React component declarations", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory to scan
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "terminal")]
    pub format: FormatArg,

    /// Files read concurrently per batch
    #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
    pub batch_size: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["reactscan"]);
        assert_eq!(cli.path, PathBuf::from("."));
        assert!(matches!(cli.format, FormatArg::Terminal));
        assert_eq!(cli.batch_size, DEFAULT_BATCH_SIZE);
    }

    #[test]
    fn parses_path_and_format() {
        let cli = Cli::parse_from(["reactscan", "web/src", "--format", "json"]);
        assert_eq!(cli.path, PathBuf::from("web/src"));
        assert!(matches!(cli.format, FormatArg::Json));
    }
}
