// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use yuanbook::config::Config;
use yuanbook::ledger::Ledger;
use yuanbook::storage::{Gateway, StorageBackend};
use yuanbook::{cli, commands};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let config = Config::from_env()?;
    let gateway = Gateway::new(StorageBackend::open(&config)?);
    let mut ledger = Ledger::open(gateway);

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Data store ready at {}", ledger.gateway().describe());
        }
        Some(("add", sub)) => commands::transactions::add(&mut ledger, sub)?,
        Some(("ai", sub)) => commands::ai::handle(&mut ledger, &config, sub)?,
        Some(("tx", sub)) => commands::transactions::handle(&mut ledger, sub)?,
        Some(("category", sub)) => commands::categories::handle(sub)?,
        Some(("budget", sub)) => commands::budgets::handle(&mut ledger, sub)?,
        Some(("report", sub)) => commands::reports::handle(&ledger, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&ledger, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(ledger.transactions())?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
