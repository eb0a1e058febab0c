// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;
use yuanbook::config::{BackendKind, Config, DEFAULT_AI_BASE_URL, DEFAULT_MODEL};

fn config_with(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
    let env: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_lookup(|k| env.get(k).cloned())
}

#[test]
fn defaults_without_environment() {
    let c = config_with(&[("YUANBOOK_DATA_DIR", "/tmp/yb")]).unwrap();
    assert_eq!(c.data_dir, PathBuf::from("/tmp/yb"));
    assert_eq!(c.backend, None);
    assert_eq!(c.ai.api_key, None);
    assert_eq!(c.ai.model, DEFAULT_MODEL);
    assert_eq!(c.ai.base_url, DEFAULT_AI_BASE_URL);
    assert_eq!(c.ai.timeout, None);
}

#[test]
fn environment_overrides() {
    let c = config_with(&[
        ("YUANBOOK_DATA_DIR", "/tmp/yb"),
        ("YUANBOOK_STORAGE", "Host"),
        ("API_KEY", "fallback"),
        ("YUANBOOK_AI_MODEL", "gemini-custom"),
        ("YUANBOOK_AI_BASE_URL", "http://localhost:8080/v1/"),
        ("YUANBOOK_AI_TIMEOUT_SECS", "30"),
    ])
    .unwrap();
    assert_eq!(c.backend, Some(BackendKind::Sqlite));
    assert_eq!(c.ai.api_key.as_deref(), Some("fallback"));
    assert_eq!(c.ai.model, "gemini-custom");
    assert_eq!(c.ai.base_url, "http://localhost:8080/v1");
    assert_eq!(c.ai.timeout, Some(Duration::from_secs(30)));

    let c = config_with(&[
        ("YUANBOOK_DATA_DIR", "/tmp/yb"),
        ("GEMINI_API_KEY", "primary"),
        ("API_KEY", "fallback"),
        ("YUANBOOK_STORAGE", "  "),
    ])
    .unwrap();
    assert_eq!(c.ai.api_key.as_deref(), Some("primary"));
    assert_eq!(c.backend, None);
}

#[test]
fn invalid_values_rejected() {
    assert!(config_with(&[("YUANBOOK_DATA_DIR", "/tmp/yb"), ("YUANBOOK_STORAGE", "s3")]).is_err());
    assert!(
        config_with(&[("YUANBOOK_DATA_DIR", "/tmp/yb"), ("YUANBOOK_AI_TIMEOUT_SECS", "soon")])
            .is_err()
    );
}
