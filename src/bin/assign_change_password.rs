use std::process::ExitCode;

use domain_assign::AssignError;

fn main() -> ExitCode {
    match domain_assign::apps::run_assign_change_password(std::env::args().skip(1)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(AssignError::Usage(err)) => {
            // clap renders the usage block itself
            let _ = err.print();
            ExitCode::from(2)
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
