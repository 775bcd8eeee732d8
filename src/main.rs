// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! gears - find lathe change-gear trains for a pitch or TPI

mod cli;
mod output;

use anyhow::{Context, Result};
use change_gears::{optimize, search, Settings, SettingsStore, Target};
use clap::Parser;
use std::process;
use tracing::info;

use cli::{Cli, Command, SettingsCommand};
use output::OutputFormatter;

/// At most this many comma-separated gear lists are read.
const MAX_GEAR_LISTS: usize = 3;

fn main() {
    let cli = Cli::parse();

    cli.init_logging();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let formatter = OutputFormatter::new(cli.format);

    match cli.command.clone() {
        Command::Search { target, all } => run_search(&cli, &formatter, target, all),
        Command::Chart { targets } => run_chart(&cli, &formatter, &targets),
        Command::Settings(command) => run_settings(&cli, command),
    }
}

fn open_store(cli: &Cli) -> Result<SettingsStore> {
    let path = cli
        .settings
        .clone()
        .unwrap_or_else(SettingsStore::default_path);
    SettingsStore::open(&path)
        .with_context(|| format!("Failed to read settings from {}", path.display()))
}

/// Saved profile (or defaults) with command-line overrides applied.
fn resolve_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = match &cli.profile {
        Some(name) => open_store(cli)?.get(name)?.clone(),
        None => Settings::default(),
    };

    if !cli.gears.is_empty() {
        if cli.gears.len() > MAX_GEAR_LISTS {
            anyhow::bail!(
                "At most {} gear lists may be given, got {}",
                MAX_GEAR_LISTS,
                cli.gears.len()
            );
        }
        settings.gear_lists = cli.gears.clone();
    }
    if let Some(leadscrew) = cli.leadscrew_override() {
        settings.leadscrew = leadscrew;
    }
    Ok(settings)
}

fn run_search(cli: &Cli, formatter: &OutputFormatter, target: Target, all: bool) -> Result<()> {
    let settings = resolve_settings(cli)?;
    let pool = settings.pool();
    info!(gears = pool.len(), leadscrew = ?settings.leadscrew, "searching for {}", target);

    let found = search(&pool, settings.leadscrew, target, all || settings.include_all);
    println!("{}", formatter.format_search(target, &found)?);
    Ok(())
}

fn run_chart(cli: &Cli, formatter: &OutputFormatter, targets: &[Target]) -> Result<()> {
    let settings = resolve_settings(cli)?;
    let pool = settings.pool();
    info!(gears = pool.len(), rows = targets.len(), "building thread chart");

    let chosen = optimize(targets, &pool, settings.leadscrew);
    println!("{}", formatter.format_chart(targets, &chosen)?);
    Ok(())
}

fn run_settings(cli: &Cli, command: SettingsCommand) -> Result<()> {
    let mut store = open_store(cli)?;

    match command {
        SettingsCommand::Save { name, all } => {
            let mut settings = resolve_settings(cli)?;
            settings.include_all |= all;
            let replaced = store.insert(&name, settings).is_some();
            store
                .save()
                .with_context(|| format!("Failed to write {}", store.path().display()))?;
            if !cli.quiet {
                let verb = if replaced { "Updated" } else { "Saved" };
                eprintln!("{} settings {:?} in {}", verb, name, store.path().display());
            }
        }
        SettingsCommand::Show { name } => {
            let settings = store.get(&name)?;
            println!("{}", serde_json::to_string_pretty(settings)?);
        }
        SettingsCommand::List => {
            for name in store.names() {
                println!("{}", name);
            }
        }
        SettingsCommand::Remove { name } => {
            store.remove(&name)?;
            store
                .save()
                .with_context(|| format!("Failed to write {}", store.path().display()))?;
            if !cli.quiet {
                eprintln!("Removed settings {:?}", name);
            }
        }
    }

    Ok(())
}
