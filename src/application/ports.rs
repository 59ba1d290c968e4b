//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::application::config::AdapterSettings;
use crate::domain::file::FileContent;
use crate::domain::record::{ConfigRecord, Scope};

/// 어댑터 설정 로딩/점검을 담당하는 저장소 포트.
pub trait SettingsRepository: Send + Sync {
    fn load(&self) -> Result<AdapterSettings>;
    fn inspect_pretty_json(&self) -> Result<String>;
}

/// scope별 설정 파일 경로를 알아내는 포트.
pub trait PathResolver: Send + Sync {
    fn resolve(&self, scope: Scope) -> Result<PathBuf>;
}

/// 설정 파일 읽기/쓰기/삭제 포트.
pub trait ConfigFileStore: Send + Sync {
    fn exists(&self, path: &Path) -> bool;
    fn load(&self, path: &Path) -> Result<FileContent>;
    /// 상위 디렉터리를 만들고 파일 전체를 교체한다.
    fn save(&self, path: &Path, content: &FileContent) -> Result<()>;
    fn remove(&self, path: &Path) -> Result<()>;
}

/// 관측 상태 출력 포트.
pub trait StatePrinter: Send + Sync {
    fn emit(&self, record: &ConfigRecord) -> Result<()>;
}
