//! scenescrape - CLI entry point

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use scenescrape::cli::Cli;
use scenescrape::fetch::OfflineFetcher;
use scenescrape::router::{parse_command, Command};
use scenescrape::{logging, Config, HttpFetcher, RequestRouter};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // --help and --version are not failures
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(&cli) {
        Ok(line) => {
            println!("{}", line);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String> {
    let config = Config::resolve(cli.config.as_deref())?;
    logging::init(&config.log.level);
    logging::install_panic_hook();

    let command = parse_command(cli.command.as_deref())?;
    let output = match command {
        Command::ScrapeUrl => {
            let fetcher = HttpFetcher::new(&config.http.user_agent)
                .context("Failed to set up HTTP client")?;
            RequestRouter::new(&fetcher).handle_reader(command, io::stdin().lock())?
        }
        Command::ScrapeFragment => {
            RequestRouter::new(&OfflineFetcher).handle_reader(command, io::stdin().lock())?
        }
    };
    Ok(output)
}
