//! 도메인 정책(원하는 상태와 파일 내용 병합, 관측 상태 구성).

use crate::domain::file::{FileContent, UpdatesBlock};
use crate::domain::record::{ConfigRecord, Ensure, Scope};

/// 원하는 상태를 현재 파일 내용에 반영한 결과를 만든다.
///
/// - 기존 `updates` 블록이 있으면 그 자리에서 값만 맞춘다.
/// - 없으면 원하는 값으로 새 블록을 붙인다. 두 값이 모두 기본값이어도 붙이므로
///   새로 쓰는 파일에는 항상 `updates` 키가 생긴다.
pub fn reconcile(desired: &ConfigRecord, mut current: FileContent) -> FileContent {
    match current.updates.as_mut() {
        Some(updates) => {
            if updates.automatic != desired.update_automatically {
                updates.automatic = desired.update_automatically;
            }
            if updates.check_frequency != desired.update_frequency {
                updates.check_frequency = desired.update_frequency;
            }
        }
        None => {
            current.updates = Some(UpdatesBlock {
                automatic: desired.update_automatically,
                check_frequency: desired.update_frequency,
                ..UpdatesBlock::default()
            });
        }
    }
    current
}

/// 파일 존재 여부와 (읽을 수 있었다면) 내용으로 관측 상태를 구성한다.
pub fn observe(scope: Scope, exists: bool, content: Option<&FileContent>) -> ConfigRecord {
    if !exists {
        return ConfigRecord::absent(scope);
    }

    let mut record = ConfigRecord {
        ensure: Ensure::Present,
        scope: Some(scope),
        ..ConfigRecord::default()
    };

    if let Some(updates) = content.and_then(|c| c.updates.as_ref()) {
        record.update_automatically = updates.automatic;
        record.update_frequency = updates.check_frequency;
    }

    record
}
