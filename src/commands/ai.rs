// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ai::GenerativeModel;
use crate::ai::gemini::GeminiClient;
use crate::capture::FileMicrophone;
use crate::categories;
use crate::config::Config;
use crate::entry::{AiEntry, EntryError};
use crate::ledger::Ledger;
use crate::utils::{fmt_signed, pretty_table};
use anyhow::{Result, bail};
use chrono::{Local, NaiveDate};
use std::path::Path;

pub fn handle(ledger: &mut Ledger, config: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let client = GeminiClient::new(config.ai.clone())?;
    let today = Local::now().date_naive();
    let n = run(ledger, client, sub, today)?;

    let rows: Vec<Vec<String>> = ledger.transactions()[..n]
        .iter()
        .map(|t| {
            vec![
                categories::display_name(&t.category_id).to_string(),
                t.note.clone(),
                fmt_signed(t),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Category", "Note", "Amount"], rows));
    println!("Added {} transaction(s).", n);
    Ok(())
}

fn stage<M: GenerativeModel>(
    entry: &mut AiEntry<M>,
    sub: &clap::ArgMatches,
) -> Result<(), EntryError> {
    if let Some(text) = sub.get_one::<String>("text") {
        entry.staging_mut().set_text(text.as_str());
    }
    if let Some(image) = sub.get_one::<String>("image") {
        entry.staging_mut().stage_image_file(Path::new(image.trim()))?;
    }
    if let Some(audio) = sub.get_one::<String>("audio") {
        let mut mic = FileMicrophone::new(audio.trim());
        entry.record_voice(&mut mic)?;
    }
    Ok(())
}

/// Stage the arguments, submit once, and return how many transactions were
/// added to the front of the ledger.
pub fn run<M: GenerativeModel>(
    ledger: &mut Ledger,
    model: M,
    sub: &clap::ArgMatches,
    today: NaiveDate,
) -> Result<usize> {
    let mut entry = AiEntry::new(model);
    let outcome = stage(&mut entry, sub).and_then(|_| entry.submit(ledger, today));
    match outcome {
        Ok(n) => Ok(n),
        Err(e) => {
            log::debug!("ai entry error: {:?}", e);
            bail!("{}", e.user_message())
        }
    }
}
