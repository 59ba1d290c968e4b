//! 모든 scope의 현재 상태를 내보내는 유스케이스.

use crate::application::ports::{ConfigFileStore, PathResolver, StatePrinter};
use crate::domain::record::{ConfigRecord, Scope};

use super::get_state::GetStateUseCase;

pub struct ExportStateUseCase<'a> {
    pub path_resolver: &'a dyn PathResolver,
    pub file_store: &'a dyn ConfigFileStore,
    pub printer: &'a dyn StatePrinter,
}

impl<'a> ExportStateUseCase<'a> {
    pub fn execute(&self) -> Vec<ConfigRecord> {
        GetStateUseCase {
            path_resolver: self.path_resolver,
            file_store: self.file_store,
            printer: self.printer,
        }
        .execute(&Scope::ALL)
    }
}
