//! Binary entry point. All terminal concerns live in `cli/`; this file only
//! runs it and turns the outcome into a process exit code.

mod cli;

fn main() {
    match cli::run() {
        Ok(outcome) => std::process::exit(outcome.exit_code()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
