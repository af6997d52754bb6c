// c2py: best-effort C to Python translator

use std::process;

fn main() {
    if let Err(err) = c2py::cli::run() {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
