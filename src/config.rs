// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.yuanbook", "Yuanbook", "yuanbook"));

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_AI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    File,
    Sqlite,
}

impl FromStr for BackendKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "file" | "local" => Ok(BackendKind::File),
            "sqlite" | "host" => Ok(BackendKind::Sqlite),
            other => Err(anyhow::anyhow!(
                "Unknown storage backend '{}', expected file|sqlite",
                other
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AiSettings {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout: Option<Duration>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    /// Explicit backend; `None` means detect at startup.
    pub backend: Option<BackendKind>,
    pub ai: AiSettings,
}

pub fn default_data_dir() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    Ok(proj.data_dir().to_path_buf())
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |k: &str| lookup(k).filter(|v| !v.trim().is_empty());

        let data_dir = match get("YUANBOOK_DATA_DIR") {
            Some(d) => PathBuf::from(d.trim()),
            None => default_data_dir()?,
        };
        let backend = get("YUANBOOK_STORAGE")
            .map(|s| s.parse::<BackendKind>())
            .transpose()?;
        let timeout = get("YUANBOOK_AI_TIMEOUT_SECS")
            .map(|s| {
                s.trim()
                    .parse::<u64>()
                    .with_context(|| format!("Invalid YUANBOOK_AI_TIMEOUT_SECS '{}'", s))
            })
            .transpose()?
            .map(Duration::from_secs);

        Ok(Config {
            data_dir,
            backend,
            ai: AiSettings {
                api_key: get("GEMINI_API_KEY").or_else(|| get("API_KEY")),
                model: get("YUANBOOK_AI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
                base_url: get("YUANBOOK_AI_BASE_URL")
                    .map(|u| u.trim_end_matches('/').to_string())
                    .unwrap_or_else(|| DEFAULT_AI_BASE_URL.to_string()),
                timeout,
            },
        })
    }
}
