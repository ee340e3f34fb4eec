use std::process::ExitCode;

fn main() -> ExitCode {
    hey::entry::run()
}
