//! Command-line interface definitions.
//!
//! Defines the CLI structure for the presale client using `clap`.

use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Token presale purchase client
#[derive(Parser, Debug)]
#[command(name = "presale")]
#[command(version)]
pub struct Cli {
    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Override log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Estimate GLF received for a USDT amount
    Estimate(EstimateArgs),

    /// Show USDT and GLF balances of the configured wallet
    Balances(ConfigPathArg),

    /// Check whether the presale allowance covers an amount
    Allowance(AllowanceArgs),

    /// Buy GLF with USDT (approves first when needed)
    Buy(BuyArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `presale check`.
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate configuration file
    Config(ConfigPathArg),
    /// Test RPC connectivity and chain ID
    Connection(ConfigPathArg),
}

/// Shared argument for commands that only need a config path.
#[derive(Args, Debug, Clone)]
pub struct ConfigPathArg {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,
}

/// Arguments for `presale estimate`.
#[derive(Args, Debug)]
pub struct EstimateArgs {
    /// USDT amount to spend
    pub amount: String,

    /// USDT per GLF (defaults to the presale price)
    #[arg(long)]
    pub price: Option<Decimal>,
}

/// Arguments for `presale allowance`.
#[derive(Args, Debug)]
pub struct AllowanceArgs {
    /// USDT amount the purchase would spend
    pub amount: String,

    #[command(flatten)]
    pub config: ConfigPathArg,
}

/// Arguments for `presale buy`.
#[derive(Args, Debug)]
pub struct BuyArgs {
    /// USDT amount to spend
    #[arg(required_unless_present = "max", conflicts_with = "max")]
    pub amount: Option<String>,

    /// Spend the entire USDT balance
    #[arg(long)]
    pub max: bool,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    #[command(flatten)]
    pub config: ConfigPathArg,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn buy_requires_amount_or_max() {
        assert!(Cli::try_parse_from(["presale", "buy"]).is_err());
        assert!(Cli::try_parse_from(["presale", "buy", "--max"]).is_ok());
        assert!(Cli::try_parse_from(["presale", "buy", "10", "--max"]).is_err());
    }

    #[test]
    fn buy_parses_amount_and_flags() {
        let cli = Cli::try_parse_from(["presale", "buy", "25", "-y", "-c", "alt.toml"]).unwrap();
        let Commands::Buy(args) = cli.command else {
            panic!("expected buy");
        };
        assert_eq!(args.amount.as_deref(), Some("25"));
        assert!(args.yes);
        assert_eq!(args.config.config, PathBuf::from("alt.toml"));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["presale", "estimate", "10", "--json"]).unwrap();
        assert!(cli.json);
    }
}
