// Copyright (c) 2025 Nestegg Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use nestegg::{cli, commands, db};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let store = db::open_or_init()?;

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Database initialized at {}", db::db_path()?.display());
        }
        Some(("tx", sub)) => commands::transactions::handle(&store, sub)?,
        Some(("balance", sub)) => commands::balance::handle(&store, sub)?,
        Some(("dashboard", sub)) => commands::dashboard::handle(&store, sub)?,
        Some(("networth", sub)) => commands::networth::handle(&store, sub)?,
        Some(("plan", sub)) => commands::plan::handle(&store, sub)?,
        Some(("tools", sub)) => commands::tools::handle(sub)?,
        Some(("export", sub)) => commands::exporter::handle(&store, sub)?,
        Some(("import", sub)) => commands::importer::handle(&store, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
