use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "rota",
    about = "Rota — fairness-ranked rotation ledger for shared expenses",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve(ServeArgs),
    /// Print the current fairness ranking
    Roster(RosterArgs),
    /// Write a fresh seed snapshot
    Seed(SeedArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// Load settings from a TOML config file; flags below override it
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long)]
    pub bind: Option<String>,

    /// Path of the JSON ledger snapshot
    #[arg(long)]
    pub ledger: Option<String>,

    /// Incoming-webhook URL for notifications
    #[arg(long)]
    pub webhook: Option<String>,
}

#[derive(Args)]
pub struct RosterArgs {
    #[arg(long, default_value = "rota-ledger.json")]
    pub ledger: String,
}

#[derive(Args)]
pub struct SeedArgs {
    #[arg(long, default_value = "rota-ledger.json")]
    pub ledger: String,

    /// Participant names; defaults to the built-in roster
    pub names: Vec<String>,

    /// Overwrite an existing snapshot
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_serve() {
        let cli = Cli::try_parse_from(["rota", "serve", "--bind", "0.0.0.0:8080"]).unwrap();
        if let Command::Serve(args) = cli.command {
            assert_eq!(args.bind, Some("0.0.0.0:8080".into()));
            assert!(args.config.is_none());
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_serve_with_webhook() {
        let cli =
            Cli::try_parse_from(["rota", "serve", "--webhook", "https://example.com/h"]).unwrap();
        if let Command::Serve(args) = cli.command {
            assert_eq!(args.webhook, Some("https://example.com/h".into()));
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_roster_default_ledger() {
        let cli = Cli::try_parse_from(["rota", "roster"]).unwrap();
        if let Command::Roster(args) = cli.command {
            assert_eq!(args.ledger, "rota-ledger.json");
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_seed_with_names() {
        let cli = Cli::try_parse_from(["rota", "seed", "--force", "A", "B"]).unwrap();
        if let Command::Seed(args) = cli.command {
            assert!(args.force);
            assert_eq!(args.names, vec!["A", "B"]);
        } else {
            panic!("wrong command");
        }
    }
}
