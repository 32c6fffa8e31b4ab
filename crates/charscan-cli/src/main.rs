//! `charscan`: print the character spans of files or strings.

use std::{env, io, process::ExitCode};

use charscan_cli::{CHARSET_ENV, CliError, Command, Config, USAGE, init_tracing, run};

fn main() -> ExitCode {
    init_tracing();

    let default_charset = env::var(CHARSET_ENV).ok();
    let command = match Config::from_args(env::args_os().skip(1), default_charset.as_deref()) {
        Ok(command) => command,
        Err(err @ CliError::Usage(_)) => {
            eprintln!("error: {err}");
            eprintln!();
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let config = match command {
        Command::Help => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Command::Scan(config) => config,
    };

    let stdout = io::stdout();
    match run(&config, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "charscan failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
