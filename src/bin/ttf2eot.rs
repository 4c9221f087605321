use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use eot::{
    cli::{self, CliError},
    convert_ttf_to_eot,
};

/// Wraps a TTF/OpenType font in the header of an existing EOT file.
///
/// Only the size fields of the template's header are updated; names and metrics are copied as-is.
#[derive(Debug, Parser)]
struct Args {
    /// The EOT file whose header is reused
    template_path: PathBuf,
    /// The font to embed
    in_path: PathBuf,
    /// Where to write the new EOT file
    out_path: PathBuf,
}

fn run(args: Args) -> Result<(), CliError> {
    let template = cli::read_file(&args.template_path)?;
    let ttf = cli::read_file(&args.in_path)?;
    let eot = convert_ttf_to_eot(&template, &ttf)?;
    cli::write_file(&args.out_path, &eot)
}

fn main() -> ExitCode {
    cli::init_logger();
    match cli::parse_args::<Args>() {
        Ok(args) => cli::report(run(args)),
        Err(code) => code,
    }
}
