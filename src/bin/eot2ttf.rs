use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use eot::{
    cli::{self, CliError},
    convert_eot_to_ttf,
};

/// Extracts the TTF/OpenType font from an uncompressed EOT file.
#[derive(Debug, Parser)]
struct Args {
    /// The EOT file to read
    in_path: PathBuf,
    /// Where to write the extracted font
    out_path: PathBuf,
}

fn run(args: Args) -> Result<(), CliError> {
    let input = cli::read_file(&args.in_path)?;
    let ttf = convert_eot_to_ttf(&input)?;
    cli::write_file(&args.out_path, &ttf)
}

fn main() -> ExitCode {
    cli::init_logger();
    match cli::parse_args::<Args>() {
        Ok(args) => cli::report(run(args)),
        Err(code) => code,
    }
}
