//! Deprecated `dream` command.
//!
//! Prints a deprecation warning, then forwards every argument to the
//! replacement CLI and exits with its exit code.
//!
//! Usage:
//!   dream [ARGS...]

fn main() -> ! {
    std::process::exit(dream_cli::run())
}
