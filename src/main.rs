use std::path::PathBuf;

use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use tracing_subscriber::EnvFilter;

use sst_printer::{load_document, unparse_document};

fn init_tracing() {
    // Stdout carries the rendered text only.
    let filter =
        EnvFilter::try_from_env("SST_PRINTER_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let matches = Command::new("sst-printer")
        .about("Render a code-entity document as pseudocode")
        .arg(
            Arg::new("input")
                .help("JSON document holding the entity and its optional hierarchy")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf))
                .index(1),
        )
        .arg(
            Arg::new("namespaces")
                .long("namespaces")
                .help("List the namespaces seen while rendering on stderr")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let input = matches
        .get_one::<PathBuf>("input")
        .ok_or_else(|| anyhow::anyhow!("Missing input file"))?;

    let document = load_document(input)?;
    let output = unparse_document(&document);

    if matches.get_flag("namespaces") {
        for namespace in output.seen_namespaces() {
            eprintln!("{}", namespace);
        }
    }

    println!("{}", output);

    Ok(())
}
