use std::process::ExitCode;
use table2model::cli::cli_main::run;

pub fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
