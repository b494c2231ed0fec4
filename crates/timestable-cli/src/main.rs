use std::process::ExitCode;

mod cli;
mod logging;
mod modes;

fn main() -> ExitCode {
    match cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e:#}"); // pretty anyhow chain
            ExitCode::FAILURE
        }
    }
}
