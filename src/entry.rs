// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! AI entry flow: staged input -> one model request -> ledger.

use crate::ai::{AiError, GenerativeModel, Pipeline};
use crate::capture::{CaptureError, Microphone, Recorder, Staging};
use crate::ledger::{Ledger, StoreError};
use crate::models::NewTransaction;
use chrono::NaiveDate;
use log::{info, warn};

pub const MSG_NOTHING_STAGED: &str =
    "Type a description, attach a receipt photo or record a voice memo first.";
pub const MSG_MICROPHONE: &str = "Cannot access the microphone. Check permissions.";
pub const MSG_UNRECOGNIZED: &str =
    "No clear line items were recognized. Try a sharper photo or a more detailed description.";
pub const MSG_AI_FAILED: &str = "AI analysis failed. Check your network and try again.";
pub const MSG_NO_API_KEY: &str = "AI entry needs an API key. Set GEMINI_API_KEY and try again.";
pub const MSG_BAD_ATTACHMENT: &str = "The attached photo or recording could not be read.";
pub const MSG_NOT_SAVED: &str = "Entries were added but could not be saved.";

#[derive(Debug, thiserror::Error)]
pub enum EntryError {
    #[error(transparent)]
    Capture(#[from] CaptureError),
    #[error(transparent)]
    Ai(#[from] AiError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl EntryError {
    /// The fixed message shown to the user for this failure.
    pub fn user_message(&self) -> &'static str {
        match self {
            EntryError::Capture(CaptureError::MicrophoneUnavailable(_)) => MSG_MICROPHONE,
            EntryError::Capture(CaptureError::NothingStaged) => MSG_NOTHING_STAGED,
            EntryError::Capture(_) => MSG_BAD_ATTACHMENT,
            EntryError::Ai(AiError::MissingApiKey) => MSG_NO_API_KEY,
            EntryError::Ai(e) if e.is_unrecognized() => MSG_UNRECOGNIZED,
            EntryError::Ai(_) => MSG_AI_FAILED,
            EntryError::Store(_) => MSG_NOT_SAVED,
        }
    }
}

pub struct AiEntry<M> {
    staging: Staging,
    recorder: Recorder,
    pipeline: Pipeline<M>,
}

impl<M: GenerativeModel> AiEntry<M> {
    pub fn new(model: M) -> Self {
        AiEntry {
            staging: Staging::new(),
            recorder: Recorder::new(),
            pipeline: Pipeline::new(model),
        }
    }

    pub fn staging(&self) -> &Staging {
        &self.staging
    }

    pub fn staging_mut(&mut self) -> &mut Staging {
        &mut self.staging
    }

    /// Record one voice memo and stage it. On failure nothing is staged.
    pub fn record_voice(&mut self, mic: &mut dyn Microphone) -> Result<(), EntryError> {
        let clip = self.recorder.record_from(mic)?;
        self.staging.stage_audio(clip);
        Ok(())
    }

    /// Send the staged parts and merge the results into `ledger` in one
    /// `add_many`. Returns how many transactions were added.
    pub fn submit(&mut self, ledger: &mut Ledger, today: NaiveDate) -> Result<usize, EntryError> {
        let parts = self.staging.take_parts()?;
        let records = match self.pipeline.parse_multimodal(&parts, today) {
            Ok(r) => r,
            Err(e) => {
                warn!("AI entry failed: {}", e);
                return Err(e.into());
            }
        };
        let n = records.len();
        let items: Vec<NewTransaction> = records.into_iter().map(NewTransaction::from).collect();
        self.staging.clear();
        ledger.add_many(items)?;
        info!("AI entry added {} transactions", n);
        Ok(n)
    }
}
