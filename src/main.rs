use std::process::ExitCode;

use routestack::ui::output;

fn main() -> ExitCode {
    match routestack::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}
