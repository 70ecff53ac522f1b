// Copyright (c) 2025 Nestegg Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store::SqliteStore;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::Connection;
use std::fs;
use std::path::PathBuf;

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("app.nestegg", "Nestegg", "nestegg"));

pub fn db_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("nestegg.sqlite"))
}

pub fn open_or_init() -> Result<SqliteStore> {
    let path = db_path()?;
    let conn =
        Connection::open(&path).with_context(|| format!("Open DB at {}", path.display()))?;
    let store = SqliteStore::new(conn)?;
    Ok(store)
}
