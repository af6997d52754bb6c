//! Command-line arguments for the `c2py` binary.

use clap::Parser;
use std::path::PathBuf;

/// Default ceiling on input size, in bytes (1 MiB)
pub const DEFAULT_MAX_BYTES: u64 = 1024 * 1024;

/// Translate C source into approximate Python.
#[derive(Debug, Parser)]
#[command(
    name = "c2py",
    version,
    about = "Best-effort C to Python translator with a side-by-side viewer."
)]
pub struct Args {
    /// C source file to translate; reads stdin when absent or `-`.
    pub file: Option<PathBuf>,

    /// Write the Python output here instead of stdout.
    #[arg(short, long, value_name = "OUT")]
    pub output: Option<PathBuf>,

    /// Open the side-by-side terminal viewer instead of printing.
    #[arg(long, conflicts_with = "output")]
    pub tui: bool,

    /// Reject inputs larger than this many bytes.
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_BYTES)]
    pub max_bytes: u64,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// The input path, or `None` for stdin.
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.file.as_ref().filter(|path| path.as_os_str() != "-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["c2py"]).unwrap();
        assert!(args.input_path().is_none());
        assert!(args.output.is_none());
        assert!(!args.tui);
        assert_eq!(args.max_bytes, DEFAULT_MAX_BYTES);
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn test_dash_means_stdin() {
        let args = Args::try_parse_from(["c2py", "-"]).unwrap();
        assert!(args.input_path().is_none());

        let args = Args::try_parse_from(["c2py", "prog.c", "-o", "prog.py", "-vv"]).unwrap();
        assert_eq!(args.input_path(), Some(&PathBuf::from("prog.c")));
        assert_eq!(args.output, Some(PathBuf::from("prog.py")));
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_tui_conflicts_with_output() {
        assert!(Args::try_parse_from(["c2py", "--tui", "-o", "out.py"]).is_err());
        assert!(Args::try_parse_from(["c2py", "--tui", "--max-bytes", "64"]).is_ok());
    }
}
