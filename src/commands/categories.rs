// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::categories;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    if let Some(("list", sub)) = m.subcommand() {
        let all = categories::list_all();
        if !maybe_print_json(sub.get_flag("json"), &all)? {
            let data = all
                .iter()
                .map(|c| {
                    vec![
                        c.icon.to_string(),
                        c.id.to_string(),
                        c.name.to_string(),
                        c.r#type.to_string(),
                    ]
                })
                .collect();
            println!("{}", pretty_table(&["", "ID", "Name", "Type"], data));
        }
    }
    Ok(())
}
