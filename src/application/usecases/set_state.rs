//! 설정 파일을 원하는 상태로 맞추는 유스케이스.

use std::path::Path;

use anyhow::{Result, bail};

use crate::application::ports::{ConfigFileStore, PathResolver, StatePrinter};
use crate::domain::file::FileContent;
use crate::domain::policy::reconcile;
use crate::domain::record::{ConfigRecord, Ensure, MAX_UPDATE_FREQUENCY, MIN_UPDATE_FREQUENCY};

use super::{emit_or_log, resolve_or_empty};

pub struct SetStateUseCase<'a> {
    pub path_resolver: &'a dyn PathResolver,
    pub file_store: &'a dyn ConfigFileStore,
    pub printer: &'a dyn StatePrinter,
}

impl<'a> SetStateUseCase<'a> {
    /// 원하는 상태를 적용하고, 입력 레코드를 그대로 관측 상태로 출력한다.
    /// - scope가 없으면 아무것도 쓰지 않고 실패한다.
    /// - 파일 쓰기/삭제 실패는 로그만 남긴다(best effort).
    pub fn execute(&self, desired: ConfigRecord) -> Result<ConfigRecord> {
        let Some(scope) = desired.scope else {
            bail!("config is empty: a scope is required to set the configuration");
        };

        if desired.ensure == Ensure::Present
            && desired.update_frequency != 0
            && !desired.frequency_in_range()
        {
            tracing::warn!(
                %scope,
                frequency = desired.update_frequency,
                "updateFrequency should be between {MIN_UPDATE_FREQUENCY} and {MAX_UPDATE_FREQUENCY} days"
            );
        }

        let path = resolve_or_empty(self.path_resolver, scope);
        match desired.ensure {
            Ensure::Present => self.write(&desired, &path),
            Ensure::Absent => self.delete(&path),
        }

        emit_or_log(self.printer, &desired);
        Ok(desired)
    }

    fn write(&self, desired: &ConfigRecord, path: &Path) {
        let current = if self.file_store.exists(path) {
            // 읽을 수 없는 파일은 빈 내용으로 간주하고 덮어쓴다.
            self.file_store.load(path).unwrap_or_else(|err| {
                tracing::warn!(
                    path = %path.display(),
                    "failed to read configuration file, starting from empty content: {err:#}"
                );
                FileContent::default()
            })
        } else {
            FileContent::default()
        };

        let content = reconcile(desired, current);
        match self.file_store.save(path, &content) {
            Ok(()) => tracing::info!(path = %path.display(), "configuration file written"),
            Err(err) => tracing::error!(
                path = %path.display(),
                "failed to write configuration file: {err:#}"
            ),
        }
    }

    fn delete(&self, path: &Path) {
        if !self.file_store.exists(path) {
            tracing::debug!(path = %path.display(), "configuration file already absent");
            return;
        }

        match self.file_store.remove(path) {
            Ok(()) => tracing::info!(path = %path.display(), "configuration file removed"),
            Err(err) => tracing::error!(
                path = %path.display(),
                "failed to remove configuration file: {err:#}"
            ),
        }
    }
}
