//! 설정 저장소 포트 구현 어댑터.

use anyhow::Result;

use crate::application::config::AdapterSettings;
use crate::application::ports::SettingsRepository;

/// JSON 기반 어댑터 설정 저장소.
pub struct JsonSettingsRepository;

impl SettingsRepository for JsonSettingsRepository {
    fn load(&self) -> Result<AdapterSettings> {
        AdapterSettings::load()
    }

    fn inspect_pretty_json(&self) -> Result<String> {
        AdapterSettings::inspect_pretty_json()
    }
}
