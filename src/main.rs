//! zipflat - extract a folder of ZIP archives and flatten the result

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = zipflat_lib::commands::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
