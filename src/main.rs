//! vibeguard CLI binary.
//!
//! All logic lives in the library; main.rs only maps the exit code.

fn main() {
    // cli::run() handles ALL output including errors.
    if let Err(code) = vibeguard::cli::run() {
        std::process::exit(code.as_i32());
    }
}
