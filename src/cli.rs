//! Shared plumbing for the `eot2ttf` and `ttf2eot` binaries

use std::{
    fs, io,
    path::{Path, PathBuf},
    process::ExitCode,
};

use env_logger::Env;
use log::LevelFilter;
use thiserror::Error;

use crate::{ExtractError, RebuildError};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("File {} not found", .0.display())]
    NotFound(PathBuf),
    #[error("Failed to read `{}`: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("Failed to write `{}`: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Extract(#[from] ExtractError),
    #[error(transparent)]
    Rebuild(#[from] RebuildError),
}

/// Set up logging; `EOT_LOG` overrides the default `warn` level.
pub fn init_logger() {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .format_timestamp(None)
        .parse_env(Env::new().filter("EOT_LOG"))
        .init();
}

/// Parses the command line, exiting with status 1 on a usage error.
pub fn parse_args<T: clap::Parser>() -> Result<T, ExitCode> {
    T::try_parse().map_err(|e| {
        let _ = e.print();
        if e.use_stderr() {
            ExitCode::FAILURE
        } else {
            // --help and --version
            ExitCode::SUCCESS
        }
    })
}

/// Reads a whole file, naming it when it does not exist.
pub fn read_file(path: &Path) -> Result<Vec<u8>, CliError> {
    fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => CliError::NotFound(path.to_owned()),
        _ => CliError::Read {
            path: path.to_owned(),
            source,
        },
    })
}

pub fn write_file(path: &Path, data: &[u8]) -> Result<(), CliError> {
    fs::write(path, data).map_err(|source| CliError::Write {
        path: path.to_owned(),
        source,
    })?;
    log::info!("Wrote {} bytes to `{}`", data.len(), path.display());
    Ok(())
}

/// Reports the outcome of a conversion as a process exit status.
pub fn report(result: Result<(), CliError>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
