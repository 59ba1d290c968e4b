//! 현재 설정 파일 상태를 읽어 관측 상태로 출력하는 유스케이스.

use crate::application::ports::{ConfigFileStore, PathResolver, StatePrinter};
use crate::domain::policy::observe;
use crate::domain::record::{ConfigRecord, Scope};

use super::{emit_or_log, resolve_or_empty};

pub struct GetStateUseCase<'a> {
    pub path_resolver: &'a dyn PathResolver,
    pub file_store: &'a dyn ConfigFileStore,
    pub printer: &'a dyn StatePrinter,
}

impl<'a> GetStateUseCase<'a> {
    /// 주어진 순서대로 scope마다 한 레코드씩 출력한다.
    pub fn execute(&self, scopes: &[Scope]) -> Vec<ConfigRecord> {
        scopes
            .iter()
            .map(|scope| {
                let record = self.read(*scope);
                emit_or_log(self.printer, &record);
                record
            })
            .collect()
    }

    /// 한 scope의 관측 상태. 파싱 실패는 "업데이트 설정 없음"으로 본다.
    pub fn read(&self, scope: Scope) -> ConfigRecord {
        let path = resolve_or_empty(self.path_resolver, scope);
        let exists = self.file_store.exists(&path);

        let content = if exists {
            match self.file_store.load(&path) {
                Ok(content) => Some(content),
                Err(err) => {
                    tracing::warn!(
                        %scope,
                        path = %path.display(),
                        "failed to read configuration file: {err:#}"
                    );
                    None
                }
            }
        } else {
            None
        };

        observe(scope, exists, content.as_ref())
    }
}
