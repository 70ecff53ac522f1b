// Copyright (c) 2025 Nestegg Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod aggregate;
pub mod cli;
pub mod commands;
pub mod db;
pub mod models;
pub mod networth;
pub mod planning;
pub mod project;
pub mod store;
pub mod utils;
