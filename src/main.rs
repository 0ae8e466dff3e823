use std::process::ExitCode;

fn main() -> ExitCode {
    match ccm_extinction::app::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}
