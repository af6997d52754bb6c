//! The `c2py` command line.
//!
//! Reads one C source (file or stdin), translates it, and either prints the
//! Python or hands both texts to the terminal viewer. A C parse failure is
//! not an error here: its explanation is the output.

pub mod args;

use crate::ui;
use crate::Translation;
use args::Args;
use clap::Parser;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Failures of the binary itself, as opposed to untranslatable C.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read {}: {source}", origin(.path))]
    Read {
        path: Option<PathBuf>,
        #[source]
        source: io::Error,
    },

    #[error("cannot write {}: {source}", destination(.path))]
    Write {
        path: Option<PathBuf>,
        #[source]
        source: io::Error,
    },

    #[error("input exceeds {limit} bytes")]
    TooLarge { limit: u64 },

    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}

fn origin(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map_or_else(|| "stdin".to_string(), |p| p.display().to_string())
}

fn destination(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map_or_else(|| "stdout".to_string(), |p| p.display().to_string())
}

/// Parse arguments from the process and run.
pub fn run() -> Result<(), CliError> {
    let args = Args::parse();
    init_tracing(args.verbose);
    execute(&args)
}

/// Run with already-parsed arguments.
pub fn execute(args: &Args) -> Result<(), CliError> {
    let path = args.input_path().cloned();
    let source = match &path {
        Some(path) => {
            let file = fs::File::open(path).map_err(|source| CliError::Read {
                path: Some(path.clone()),
                source,
            })?;
            read_limited(file, args.max_bytes, Some(path))?
        }
        None => read_limited(io::stdin().lock(), args.max_bytes, None)?,
    };

    info!(input = %origin(&path), bytes = source.len(), "read C source");
    let translation = Translation::of(&source);

    if args.tui {
        return Ok(ui::run(source, translation)?);
    }

    write_output(&translation.text, args.output.as_deref())
}

/// Read all of `reader` as UTF-8, refusing more than `limit` bytes.
pub fn read_limited<R: Read>(
    reader: R,
    limit: u64,
    path: Option<&PathBuf>,
) -> Result<String, CliError> {
    let mut source = String::new();
    reader
        .take(limit.saturating_add(1))
        .read_to_string(&mut source)
        .map_err(|err| CliError::Read {
            path: path.cloned(),
            source: err,
        })?;

    if source.len() as u64 > limit {
        return Err(CliError::TooLarge { limit });
    }
    Ok(source)
}

fn write_output(text: &str, path: Option<&Path>) -> Result<(), CliError> {
    let wrap = |source: io::Error| CliError::Write {
        path: path.map(Path::to_path_buf),
        source,
    };

    match path {
        Some(path) => fs::write(path, format!("{}\n", text)).map_err(wrap),
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", text)
                .and_then(|()| stdout.flush())
                .map_err(wrap)
        }
    }
}

/// Install a stderr subscriber whose level follows the `-v` count.
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_within_limit() {
        let source = read_limited(Cursor::new("int x;"), 6, None).unwrap();
        assert_eq!(source, "int x;");
    }

    #[test]
    fn test_read_over_limit_is_rejected() {
        let err = read_limited(Cursor::new("int x;"), 5, None).unwrap_err();
        assert!(matches!(err, CliError::TooLarge { limit: 5 }));
        assert_eq!(err.to_string(), "input exceeds 5 bytes");
    }

    #[test]
    fn test_invalid_utf8_is_a_read_error() {
        let path = PathBuf::from("bad.c");
        let err = read_limited(Cursor::new(vec![0xff, 0xfe]), 16, Some(&path)).unwrap_err();
        assert!(matches!(err, CliError::Read { .. }));
        assert!(err.to_string().starts_with("cannot read bad.c:"));
    }

    #[test]
    fn test_write_to_file_adds_newline() {
        let path = std::env::temp_dir().join(format!("c2py-cli-{}.py", std::process::id()));
        write_output("def f():\n    pass", Some(&path)).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(written, "def f():\n    pass\n");
    }
}
