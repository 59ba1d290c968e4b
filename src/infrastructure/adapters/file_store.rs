//! 설정 파일 저장소 포트 구현 어댑터.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::application::ports::ConfigFileStore;
use crate::domain::file::FileContent;

/// 파일 시스템의 JSON 설정 파일을 다루는 어댑터. 잠금은 하지 않는다.
pub struct JsonFileStore;

impl ConfigFileStore for JsonFileStore {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn load(&self, path: &Path) -> Result<FileContent> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        FileContent::from_json(&raw)
            .with_context(|| format!("failed to parse JSON in {}", path.display()))
    }

    fn save(&self, path: &Path, content: &FileContent) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }

        let rendered = content.to_json_pretty()?;
        fs::write(path, format!("{rendered}\n"))
            .with_context(|| format!("failed to write {}", path.display()))
    }

    fn remove(&self, path: &Path) -> Result<()> {
        fs::remove_file(path).with_context(|| format!("failed to remove {}", path.display()))
    }
}
