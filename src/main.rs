use anyhow::Context;
use charview::api::CharacterClient;
use charview::cli::Cli;
use charview::config::Config;
use charview::print::{print_characters, PrintError};
use charview::{logging, ui};
use clap::Parser;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }?;
    cli.apply_overrides(&mut config);
    config.validate()?;

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    let client = CharacterClient::new(config.api.endpoint.clone());
    let selection = cli.selection();

    if cli.print {
        logging::init_stderr_tracing(&config.logging).context("Failed to initialize logging")?;
        let mut stdout = io::stdout();
        return match runtime.block_on(print_characters(&client, &selection, &mut stdout)) {
            Ok(_) => Ok(ExitCode::SUCCESS),
            Err(PrintError::Fetch(err)) => {
                tracing::warn!(kind = err.kind(), details = %err.details(), "Character fetch failed");
                eprintln!("Error: {}", err.user_message());
                Ok(ExitCode::FAILURE)
            }
            Err(err) => Err(err.into()),
        };
    }

    let log_path = config.log_path();
    logging::init_file_tracing(&config.logging, &log_path)
        .with_context(|| format!("Failed to open log file '{}'", log_path.display()))?;
    ui::runtime::run(&config, client, runtime.handle().clone(), &selection)?;
    Ok(ExitCode::SUCCESS)
}
