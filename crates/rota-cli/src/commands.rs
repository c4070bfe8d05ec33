use std::fs;
use std::sync::Arc;

use colored::Colorize;

use rota_engine::{default_roster, RotationEngine};
use rota_server::{RotaServer, ServerConfig};
use rota_store::{save_roster, FileSnapshotStore, SnapshotStore};
use rota_types::Roster;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args),
        Command::Roster(args) => cmd_roster(args),
        Command::Seed(args) => cmd_seed(args),
    }
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::from_toml(&fs::read_to_string(path)?)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.bind_addr = bind.parse()?;
    }
    if let Some(ledger) = args.ledger {
        config.ledger_path = ledger.into();
    }
    if let Some(webhook) = args.webhook {
        config.webhook_url = Some(webhook);
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(RotaServer::new(config).serve())?;
    Ok(())
}

fn cmd_roster(args: RosterArgs) -> anyhow::Result<()> {
    let store = Arc::new(FileSnapshotStore::new(&args.ledger));
    let engine = RotationEngine::new(store, default_roster());
    let ranking = engine.init();

    println!("{}", "Rotation (lowest ratio pays next)".bold());
    for (index, p) in ranking.iter().enumerate() {
        let marker = if index < 2 { "→".green().bold() } else { " ".normal() };
        println!(
            "{} {}. {}  {}",
            marker,
            index + 1,
            p.name.yellow(),
            format!(
                "(paid {}x | attended {}x | total {:.2} | ratio {:.2})",
                p.payment_count, p.attendance_count, p.total_paid, p.fairness_ratio
            )
            .dimmed(),
        );
    }
    Ok(())
}

fn cmd_seed(args: SeedArgs) -> anyhow::Result<()> {
    let store = FileSnapshotStore::new(&args.ledger);
    if !args.force && store.read()?.is_some() {
        anyhow::bail!("snapshot already exists at {}; use --force to overwrite", args.ledger);
    }

    let roster = if args.names.is_empty() {
        default_roster()
    } else {
        Roster::seeded(args.names)
    };
    if !save_roster(&store, &roster) {
        anyhow::bail!("failed to write seed snapshot to {}", args.ledger);
    }

    println!(
        "{} Seeded {} participants into {}",
        "✓".green().bold(),
        roster.len(),
        args.ledger.bold(),
    );
    Ok(())
}
