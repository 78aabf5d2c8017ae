use clap::Parser;
use presale::adapter::inbound::cli::command::{CheckCommand, Cli, Commands};
use presale::adapter::inbound::cli::output::{self, OutputConfig};
use presale::adapter::inbound::cli::{allowance, balances, buy, check, estimate};
use presale::error::{Error, Result};
use presale::infrastructure::config::settings::Config;
use std::path::Path;
use tracing::{debug, error};

fn load_config(path: &Path, log_level: Option<&str>) -> Result<Config> {
    let config = Config::load(path)?;
    config.logging.clone().with_level(log_level).init();
    debug!(path = %path.display(), "Configuration loaded");
    Ok(config)
}

async fn run(cli: Cli) -> Result<()> {
    let log_level = cli.log_level.as_deref();
    match &cli.command {
        Commands::Estimate(args) => estimate::execute(args),
        Commands::Balances(args) => {
            let config = load_config(&args.config, log_level)?;
            balances::execute(&config).await
        }
        Commands::Allowance(args) => {
            let config = load_config(&args.config.config, log_level)?;
            allowance::execute(args, &config).await
        }
        Commands::Buy(args) => {
            let config = load_config(&args.config.config, log_level)?;
            buy::execute(args, &config).await
        }
        Commands::Check(CheckCommand::Config(args)) => check::execute_config(&args.config),
        Commands::Check(CheckCommand::Connection(args)) => {
            check::execute_connection(&args.config).await
        }
    }
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet));

    if let Err(e) = run(cli).await {
        // Purchase failures were already logged and shown as a notification.
        if !matches!(e, Error::Purchase(_)) {
            error!(error = %e, "Command failed");
            output::error(&e.to_string());
        }
        std::process::exit(1);
    }
}
