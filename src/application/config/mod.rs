//! 어댑터 자체 설정 스키마(순수 데이터).
//!
//! 주의: 파일/환경변수/프로세스 접근은 `infrastructure`에서만 수행한다.

use serde::{Deserialize, Serialize};

/// 경로 조회에 사용하는 기본 실행 파일 이름.
pub const DEFAULT_EXECUTABLE: &str = "tstoy";

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AdapterSettings {
    /// 설정 경로를 알려 주는 실행 파일(이름 또는 경로)
    pub executable: Option<String>,
}

impl AdapterSettings {
    pub fn executable(&self) -> String {
        self.executable
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_EXECUTABLE)
            .to_string()
    }

    /// 후순위(나중 파일) 값으로 덮어쓰는 병합 규칙.
    pub(crate) fn merge_from(&mut self, other: AdapterSettings) {
        if other.executable.is_some() {
            self.executable = other.executable;
        }
    }
}
