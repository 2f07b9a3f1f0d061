use std::process::ExitCode;

fn main() -> ExitCode {
    match openspool_presets::run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
