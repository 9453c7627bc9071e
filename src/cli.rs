use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::{ColorMode, OutputFormat};

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "role-report")]
#[command(
    author,
    version,
    about = "Collect role-annotated directories and source files into one knowledge report"
)]
#[command(long_about = "Walks a directory tree, records every directory that holds a \
    role.txt marker together with its role description, and lists the directory's \
    .js/.jsx/.mjs/.css files. Files whose first line starts with `// role:` are \
    embedded in full.\n\n\
    Exit codes:\n  \
    0 - Report written\n  \
    1 - Configuration, read, decode or write error")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a directory tree and write the knowledge report
    Scan(ScanArgs),

    /// Generate a default configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
pub struct ScanArgs {
    /// Root directory to scan
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Report file to write (overrides config, default: GptKnowledge.txt)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Eligible file extensions (comma-separated, e.g., js,jsx,css)
    #[arg(long, value_delimiter = ',')]
    pub ext: Option<Vec<String>>,

    /// Marker file name that tags a directory (overrides config)
    #[arg(long)]
    pub marker_file: Option<String>,

    /// First-line token that embeds a file's content (overrides config)
    #[arg(long)]
    pub content_marker: Option<String>,

    /// Directory exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Output format [possible values: text, json]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Print the report to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for the configuration file
    #[arg(short, long, default_value = ".role-report.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
