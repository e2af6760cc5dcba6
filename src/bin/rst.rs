//! Command-line interface for rst-nano
//! This binary parses an rst file and prints the resulting document in one of several formats.
//!
//! Usage:
//!   rst `<path>` [--format `<format>`] [--no-levels]   - Parse a file (`-` reads stdin)
//!
//! Set `RUST_LOG=debug` to see the pipeline stages.

use clap::{Arg, ArgAction, Command};
use rst_nano::rst::formats::{format_document, parse_tree_to_treeviz, OutputFormat};
use rst_nano::rst::loader::DocumentLoader;
use std::error::Error;

const FORMATS: [&str; 6] = ["tag", "treeviz", "json", "yaml", "ir", "tokens"];

fn main() {
    env_logger::init();

    let matches = Command::new("rst")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse a small subset of reStructuredText and print the document")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the rst file, or '-' to read from stdin")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format")
                .value_parser(FORMATS)
                .default_value("treeviz"),
        )
        .arg(
            Arg::new("no-levels")
                .long("no-levels")
                .help("Leave header levels unresolved")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let path = matches
        .get_one::<String>("path")
        .map(String::as_str)
        .unwrap_or("-");
    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("treeviz");
    let resolve_levels = !matches.get_flag("no-levels");

    match handle_parse_command(path, format, resolve_levels) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Load the input, run the requested pipeline and format its output
fn handle_parse_command(
    path: &str,
    format: &str,
    resolve_levels: bool,
) -> Result<String, Box<dyn Error>> {
    let loader = if path == "-" {
        DocumentLoader::from_reader(std::io::stdin().lock(), "<stdin>")?
    } else {
        DocumentLoader::from_path(path)?
    };

    let formatted = match format {
        "ir" => {
            let tree = loader.parse_tree()?;
            parse_tree_to_treeviz(&tree.root, &tree.source)
        }
        "tokens" => loader
            .tokenize()?
            .iter()
            .map(|(token, range)| format!("{:?} {}\n", range, token))
            .collect(),
        name => {
            let format: OutputFormat = name.parse()?;
            let doc = if resolve_levels {
                loader.parse()?
            } else {
                loader.parse_unresolved()?
            };
            log::debug!("parsed {} blocks", doc.len());
            format_document(&doc, format)?
        }
    };

    Ok(ensure_trailing_newline(formatted))
}

fn ensure_trailing_newline(mut output: String) -> String {
    if !output.ends_with('\n') {
        output.push('\n');
    }
    output
}
