use std::process::ExitCode;

use clap::Parser;

use boxtext_cli::Cli;
use boxtext_cli::CliError;
use boxtext_cli::run;
use boxtext_cli::telemetry::init_tracing;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version are reported through the error path too.
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => return report(&CliError::Argument(err)),
    };

    let _telemetry = init_tracing(cli.log_level());

    match run(&cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => report(&err),
    }
}

fn report(err: &CliError) -> ExitCode {
    match err {
        CliError::Argument(clap_err) => {
            let _ = clap_err.print();
        }
        other => eprintln!("Error: {other}"),
    }
    ExitCode::from(err.exit_code())
}
