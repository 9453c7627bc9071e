use std::path::{Path, PathBuf};

use tracing::info;

use crate::cli::{Cli, ScanArgs};
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::output::{ErrorOutput, OutputFormat, ScanProgress};
use crate::report::write_report;
use crate::scanner::{RoleScanner, Scanner};
use crate::{EXIT_ERROR, EXIT_SUCCESS, Result, RoleReportError};

/// Where the formatted report ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    Written {
        path: PathBuf,
        directories: usize,
        files: usize,
    },
    Printed,
}

#[must_use]
pub fn run_scan(args: &ScanArgs, cli: &Cli) -> i32 {
    match run_scan_impl(args, cli) {
        Ok(ScanOutcome::Written {
            path,
            directories,
            files,
        }) => {
            if !cli.quiet {
                println!(
                    "Wrote {directories} directories and {files} files to {}",
                    path.display()
                );
            }
            EXIT_SUCCESS
        }
        Ok(ScanOutcome::Printed) => EXIT_SUCCESS,
        Err(e) => {
            ErrorOutput::new(cli.color.into()).print_report_error(&e);
            EXIT_ERROR
        }
    }
}

/// Scan `args.root` and write (or print) the formatted report.
///
/// # Errors
/// Returns an error if configuration is invalid, any scanned file cannot be read
/// as text, or the report cannot be written.
pub fn run_scan_impl(args: &ScanArgs, cli: &Cli) -> Result<ScanOutcome> {
    // 1. Load configuration and apply CLI overrides
    let mut config = load_config(args.config.as_deref(), cli.no_config)?;
    apply_cli_overrides(&mut config, args);
    config.validate()?;
    let format = resolve_format(args.format, &config)?;

    // 2. Scan
    let progress = ScanProgress::new(cli.quiet);
    let scanner = RoleScanner::from_config(&config)?.with_progress(progress.clone());
    info!(root = %args.root.display(), marker = %config.scanner.marker_file, "Scanning");
    let scanned = scanner.scan(&args.root);
    progress.finish();
    let report = scanned?;
    info!(
        visited = progress.position(),
        directories = report.directory_count(),
        files = report.file_count(),
        "Walk finished"
    );

    if report.is_empty() && !cli.quiet {
        ErrorOutput::new(cli.color.into()).print_warning(
            &format!(
                "No directories with {} found under {}",
                config.scanner.marker_file,
                args.root.display()
            ),
            Some("the report is empty; check the marker file name or the scan root"),
        );
    }

    // 3. Format and emit
    let output = format.formatter().format(&report)?;

    if args.stdout {
        print!("{output}");
        return Ok(ScanOutcome::Printed);
    }

    let path = config.output.path;
    write_report(&path, &output)?;
    info!(path = %path.display(), entries = report.entries().len(), "Report written");

    Ok(ScanOutcome::Written {
        path,
        directories: report.directory_count(),
        files: report.file_count(),
    })
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

fn apply_cli_overrides(config: &mut Config, args: &ScanArgs) {
    if let Some(ref ext) = args.ext {
        config.scanner.extensions.clone_from(ext);
    }

    if let Some(ref marker_file) = args.marker_file {
        config.scanner.marker_file.clone_from(marker_file);
    }

    if let Some(ref marker) = args.content_marker {
        config.content.marker.clone_from(marker);
    }

    config.scanner.exclude.extend(args.exclude.iter().cloned());

    if let Some(ref output) = args.output {
        config.output.path.clone_from(output);
    }
}

fn resolve_format(cli_format: Option<OutputFormat>, config: &Config) -> Result<OutputFormat> {
    if let Some(format) = cli_format {
        return Ok(format);
    }
    config
        .output
        .format
        .parse()
        .map_err(|e: String| RoleReportError::Config(format!("output.format: {e}")))
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
