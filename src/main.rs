use std::process::ExitCode;

fn main() -> ExitCode {
    nestest::cli::run()
}
