// Copyright (c) 2025 Nestegg Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod balance;
pub mod dashboard;
pub mod exporter;
pub mod importer;
pub mod networth;
pub mod plan;
pub mod tools;
pub mod transactions;
