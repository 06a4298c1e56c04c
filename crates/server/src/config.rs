use std::{collections::HashMap, fs, path::PathBuf};

use anyhow::bail;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub server_bind: String,
    pub dataset_path: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "127.0.0.1:8050".into(),
            dataset_path: "./data/spacex_launch_dash.csv".into(),
        }
    }
}

pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("dashboard.toml") {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            if let Some(v) = file_cfg.get("bind_addr") {
                settings.server_bind = v.clone();
            }
            if let Some(v) = file_cfg.get("dataset_path") {
                settings.dataset_path = v.clone();
            }
        }
    }

    if let Ok(v) = std::env::var("SERVER_BIND") {
        settings.server_bind = v;
    }
    if let Ok(v) = std::env::var("APP__BIND_ADDR") {
        settings.server_bind = v;
    }

    if let Ok(v) = std::env::var("DATASET_PATH") {
        settings.dataset_path = v;
    }
    if let Ok(v) = std::env::var("APP__DATASET_PATH") {
        settings.dataset_path = v;
    }

    settings
}

/// Resolves the configured CSV path and fails fast when the file is
/// missing; a dashboard without its dataset has nothing to serve.
pub fn prepare_dataset_path(raw_dataset_path: &str) -> anyhow::Result<PathBuf> {
    let raw_dataset_path = raw_dataset_path.trim();
    let path = if raw_dataset_path.is_empty() {
        PathBuf::from(Settings::default().dataset_path)
    } else {
        PathBuf::from(raw_dataset_path)
    };

    if !path.is_file() {
        bail!(
            "launch CSV '{}' does not exist or is not a file",
            path.display()
        );
    }

    Ok(path)
}
