//! 유스케이스 모음과 유스케이스 공통 경계 처리.
//!
//! 경로 해석/출력 실패는 여기서 로그로 남기고 기본값으로 계속 진행한다.

pub mod export_state;
pub mod get_state;
pub mod inspect_settings;
pub mod set_state;

use std::path::PathBuf;

use crate::application::ports::{PathResolver, StatePrinter};
use crate::domain::record::{ConfigRecord, Scope};

/// 경로 해석에 실패하면 빈 경로를 돌려준다. 빈 경로는 "파일 없음"으로 취급된다.
pub(crate) fn resolve_or_empty(resolver: &dyn PathResolver, scope: Scope) -> PathBuf {
    match resolver.resolve(scope) {
        Ok(path) => {
            tracing::debug!(%scope, path = %path.display(), "resolved configuration path");
            path
        }
        Err(err) => {
            tracing::warn!(%scope, "failed to resolve configuration path: {err:#}");
            PathBuf::new()
        }
    }
}

pub(crate) fn emit_or_log(printer: &dyn StatePrinter, record: &ConfigRecord) {
    if let Err(err) = printer.emit(record) {
        tracing::error!("failed to print configuration state: {err:#}");
    }
}
