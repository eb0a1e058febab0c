// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod ai;
pub mod capture;
pub mod categories;
pub mod cli;
pub mod commands;
pub mod config;
pub mod db;
pub mod entry;
pub mod ledger;
pub mod models;
pub mod stats;
pub mod storage;
pub mod utils;
