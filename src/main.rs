mod cli;

use std::process::ExitCode;

fn main() -> ExitCode {
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            cli::report_error(e.as_ref());
            ExitCode::FAILURE
        }
    }
}
