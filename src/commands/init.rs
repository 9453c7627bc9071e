use std::fs;

use crate::output::ErrorOutput;
use crate::{EXIT_ERROR, EXIT_SUCCESS, Result, RoleReportError};

#[must_use]
pub fn run_init(args: &crate::cli::InitArgs, cli: &crate::cli::Cli) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            ErrorOutput::new(cli.color.into()).print_report_error(&e);
            EXIT_ERROR
        }
    }
}

/// Writes a commented default configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &crate::cli::InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(RoleReportError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template()).map_err(|source| {
        RoleReportError::OutputWrite {
            path: output_path.clone(),
            source,
        }
    })?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# role-report configuration file

version = "1"

[scanner]
# File whose presence tags a directory; its trimmed text is the role description
marker_file = "role.txt"

# Files directly inside a tagged directory with these extensions are listed
extensions = ["js", "jsx", "mjs", "css"]

# Directories whose name starts with one of these prefixes are never entered
skip_prefixes = [".git"]

# Additional directories to skip (glob syntax, relative to the scan root)
exclude = [
    # "**/node_modules",
    # "**/dist",
]

[content]
# Files whose first line starts with this token are embedded in full
marker = "// role:"

[output]
# Report file, overwritten on every run
path = "GptKnowledge.txt"

# Report format: "text" or "json"
format = "text"
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
