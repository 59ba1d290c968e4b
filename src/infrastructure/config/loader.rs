//! 어댑터 설정 파일 탐색/병합 로더.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::application::config::AdapterSettings;

/// 명시 설정 파일 경로를 지정하는 환경변수.
pub const SETTINGS_ENV: &str = "TSTOY_DSC_CONFIG";

#[derive(Debug, Clone)]
pub(crate) struct LoadedSettings {
    pub settings: AdapterSettings,
    pub searched_paths: Vec<PathBuf>,
    pub loaded_paths: Vec<PathBuf>,
}

pub(crate) fn load_merged_settings() -> Result<LoadedSettings> {
    load_from_paths(settings_paths())
}

/// 주어진 경로를 순서대로 병합한다. 없는 파일은 건너뛴다.
pub(crate) fn load_from_paths(paths: Vec<PathBuf>) -> Result<LoadedSettings> {
    let mut merged = AdapterSettings::default();
    let mut loaded_paths = Vec::new();

    for path in &paths {
        if !path.is_file() {
            continue;
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings at {}", path.display()))?;
        let parsed: AdapterSettings = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse JSON in {}", path.display()))?;
        merged.merge_from(parsed);
        loaded_paths.push(path.to_path_buf());
    }

    tracing::debug!(loaded = loaded_paths.len(), "adapter settings loaded");

    Ok(LoadedSettings {
        settings: merged,
        searched_paths: paths,
        loaded_paths,
    })
}

/// 시스템 + 사용자 + 명시 경로 순으로 병합 경로를 구성한다.
pub fn settings_paths() -> Vec<PathBuf> {
    // 낮은 우선순위 -> 높은 우선순위 순서로 병합됨.
    let mut paths = vec![PathBuf::from("/etc/tstoy-dsc/config.json")];

    if let Some(base) = dirs::config_dir() {
        paths.push(base.join("tstoy-dsc").join("config.json"));
    }

    if let Ok(path) = env::var(SETTINGS_ENV)
        && !path.trim().is_empty()
    {
        paths.push(Path::new(&path).to_path_buf());
    }

    dedup_paths(paths)
}

fn dedup_paths(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut out = Vec::new();
    for p in paths {
        if !out.contains(&p) {
            out.push(p);
        }
    }
    out
}
