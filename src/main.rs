//! hdrdoc — generate reStructuredText documentation skeletons from C++ headers.
//!
//! Scans a header line by line, recognizes namespaces, classes, enums,
//! enumerators and functions, and writes Sphinx C++ domain directives with
//! placeholder text for each:
//!
//! - `hdrdoc -i include/gum/video/window.hpp -o docs/window.rst`
//! - `hdrdoc -i window.hpp -f json -o -`

mod anchor;
mod model;
mod render;
mod scanner;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Write};

#[derive(Parser)]
#[command(
    name = "hdrdoc",
    about = "Generate reStructuredText documentation skeletons from C++ headers"
)]
struct Cli {
    /// The file to process
    #[arg(short = 'i', long, value_name = "FILE")]
    input: String,

    /// The file to write to (default: testing.rst). Use - for stdout.
    #[arg(short = 'o', long, value_name = "FILE")]
    output: Option<String>,

    /// Output format: rst (default), json
    #[arg(short = 'f', long, default_value = "rst")]
    format: String,
}

/// Base name of the output file when -o is omitted.
const DEFAULT_OUTPUT_STEM: &str = "testing";

fn main() -> Result<()> {
    let cli = Cli::parse();

    let renderer = render::create_renderer(&cli.format)?;

    let content = fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input))?;

    let doc = scanner::scan(&content, &cli.input);
    warn_about(&doc);

    let output = renderer.render(&doc)?;

    let out_path = cli
        .output
        .unwrap_or_else(|| default_output_name(renderer.file_extension()));
    if out_path == "-" {
        io::stdout()
            .write_all(output.as_bytes())
            .context("failed to write stdout")?;
    } else {
        fs::write(&out_path, &output).with_context(|| format!("failed to write {}", out_path))?;
    }

    Ok(())
}

fn default_output_name(ext: &str) -> String {
    format!("{}.{}", DEFAULT_OUTPUT_STEM, ext)
}

/// Report scans that probably missed something. Never fatal.
fn warn_about(doc: &model::Document) {
    if doc.entries().next().is_none() {
        eprintln!("warning: no declarations recognized in {}", doc.source.path);
    }
    for scope in &doc.unclosed {
        eprintln!(
            "warning: {} body still open at end of {}",
            scope, doc.source.path
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_for_rst() {
        assert_eq!(default_output_name("rst"), "testing.rst");
    }

    #[test]
    fn default_output_follows_format() {
        assert_eq!(default_output_name("json"), "testing.json");
    }

    #[test]
    fn cli_requires_input() {
        assert!(Cli::try_parse_from(["hdrdoc"]).is_err());
    }

    #[test]
    fn cli_long_and_short_flags() {
        let cli = Cli::try_parse_from(["hdrdoc", "--input", "a.hpp", "-o", "a.rst"]).unwrap();
        assert_eq!(cli.input, "a.hpp");
        assert_eq!(cli.output.as_deref(), Some("a.rst"));
        assert_eq!(cli.format, "rst");
    }
}
