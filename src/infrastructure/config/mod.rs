//! 어댑터 설정(JSON) 로딩/병합과 외부 실행 파일 탐지 모듈.
//! 여러 경로의 설정을 우선순위대로 병합하고, 실행 진단용 정보를 함께 제공한다.

mod inspection;
mod loader;
mod resolve;
mod utils;

use anyhow::Result;

use crate::application::config::AdapterSettings;

pub use inspection::{ExecutableInspection, SettingsInspection};
pub use loader::{SETTINGS_ENV, settings_paths};
pub use resolve::{run_show_path, show_path_args};
pub use utils::locate_executable;

impl AdapterSettings {
    /// 병합된 최종 설정을 로딩한다.
    pub fn load() -> Result<Self> {
        Ok(loader::load_merged_settings()?.settings)
    }

    /// 디버깅/진단용 설정 정보를 구성한다.
    pub fn inspect() -> Result<SettingsInspection> {
        let loaded = loader::load_merged_settings()?;
        Ok(SettingsInspection::from_loaded(loaded))
    }

    /// 설정 진단 결과를 사람이 읽기 쉬운 JSON으로 반환한다.
    pub fn inspect_pretty_json() -> Result<String> {
        Ok(serde_json::to_string_pretty(&Self::inspect()?)?)
    }
}
