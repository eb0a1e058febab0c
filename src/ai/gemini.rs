// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Blocking client for the hosted Gemini `generateContent` endpoint.

use super::{AiError, GenerateRequest, GenerativeModel};
use crate::config::AiSettings;
use crate::utils::http_client;
use log::debug;
use serde_json::{Value, json};

pub struct GeminiClient {
    http: reqwest::blocking::Client,
    settings: AiSettings,
}

impl GeminiClient {
    pub fn new(settings: AiSettings) -> Result<Self, AiError> {
        let http = http_client(settings.timeout).map_err(AiError::Transport)?;
        Ok(GeminiClient { http, settings })
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.settings.base_url, self.settings.model
        )
    }
}

pub fn request_body(request: &GenerateRequest) -> Value {
    json!({
        "contents": [{ "parts": request.parts }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": request.response_schema,
        }
    })
}

/// Concatenated text of the first candidate; `"[]"` when there is none.
pub fn response_text(v: &Value) -> String {
    let text: String = v
        .pointer("/candidates/0/content/parts")
        .and_then(|p| p.as_array())
        .map(|parts| {
            parts
                .iter()
                .filter_map(|p| p.get("text").and_then(|t| t.as_str()))
                .collect()
        })
        .unwrap_or_default();
    if text.trim().is_empty() {
        "[]".to_string()
    } else {
        text
    }
}

impl GenerativeModel for GeminiClient {
    fn generate(&self, request: &GenerateRequest) -> Result<String, AiError> {
        let key = self
            .settings
            .api_key
            .as_deref()
            .ok_or(AiError::MissingApiKey)?;
        let url = self.endpoint();
        debug!("POST {} ({} parts)", url, request.parts.len());

        let resp = self
            .http
            .post(&url)
            .header("x-goog-api-key", key)
            .json(&request_body(request))
            .send()
            .map_err(AiError::Transport)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(AiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        let v: Value = resp.json().map_err(AiError::Transport)?;
        Ok(response_text(&v))
    }
}
