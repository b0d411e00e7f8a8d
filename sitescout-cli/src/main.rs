//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = sitescout_cli::run() {
        eprintln!("sitescout: {err}");
        std::process::exit(1);
    }
}
