// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! AI normalization pipeline: prompt + staged parts in, repaired records out.

pub mod gemini;
pub mod normalize;
pub mod prompt;

use crate::categories;
use crate::models::{MultimodalPart, ParsedTransaction};
use chrono::NaiveDate;
use log::debug;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("no API key configured (set GEMINI_API_KEY)")]
    MissingApiKey,
    #[error("AI request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("AI service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("AI response is not a valid record array: {0}")]
    Malformed(#[source] serde_json::Error),
    #[error("AI response contained no records")]
    NoItems,
}

impl AiError {
    /// True when the model answered but produced nothing usable.
    pub fn is_unrecognized(&self) -> bool {
        matches!(self, AiError::Malformed(_) | AiError::NoItems)
    }
}

#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// System instruction first, then the staged parts.
    pub parts: Vec<MultimodalPart>,
    pub response_schema: Value,
}

pub trait GenerativeModel {
    /// Send one request and return the raw text of the model's answer.
    fn generate(&self, request: &GenerateRequest) -> Result<String, AiError>;
}

impl<M: GenerativeModel + ?Sized> GenerativeModel for &M {
    fn generate(&self, request: &GenerateRequest) -> Result<String, AiError> {
        (**self).generate(request)
    }
}

impl<M: GenerativeModel + ?Sized> GenerativeModel for Box<M> {
    fn generate(&self, request: &GenerateRequest) -> Result<String, AiError> {
        (**self).generate(request)
    }
}

pub struct Pipeline<M> {
    model: M,
}

impl<M: GenerativeModel> Pipeline<M> {
    pub fn new(model: M) -> Self {
        Pipeline { model }
    }

    pub fn build_request(&self, parts: &[MultimodalPart], today: NaiveDate) -> GenerateRequest {
        let mut all = Vec::with_capacity(parts.len() + 1);
        all.push(MultimodalPart::text(prompt::system_instruction(
            categories::list_all(),
            today,
        )));
        all.extend_from_slice(parts);
        GenerateRequest {
            parts: all,
            response_schema: prompt::response_schema(),
        }
    }

    pub fn parse_multimodal(
        &self,
        parts: &[MultimodalPart],
        today: NaiveDate,
    ) -> Result<Vec<ParsedTransaction>, AiError> {
        let request = self.build_request(parts, today);
        let raw = self.model.generate(&request)?;
        let records = normalize::parse_records(&raw)?;
        debug!("model returned {} records", records.len());
        if records.is_empty() {
            return Err(AiError::NoItems);
        }
        Ok(normalize::repair(records))
    }
}
