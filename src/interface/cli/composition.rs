//! 애플리케이션 조립(composition root) 모듈.

use anyhow::Result;

use crate::application::ports::{PathResolver, SettingsRepository};
use crate::application::usecases::export_state::ExportStateUseCase;
use crate::application::usecases::get_state::GetStateUseCase;
use crate::application::usecases::inspect_settings::InspectSettingsUseCase;
use crate::application::usecases::set_state::SetStateUseCase;
use crate::infrastructure::adapters::{
    JsonFileStore, JsonSettingsRepository, StdoutPrinter, TstoyPathResolver,
};

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
pub struct AppComposition {
    settings_repo: JsonSettingsRepository,
    file_store: JsonFileStore,
    printer: StdoutPrinter,
}

impl Default for AppComposition {
    fn default() -> Self {
        Self {
            settings_repo: JsonSettingsRepository,
            file_store: JsonFileStore,
            printer: StdoutPrinter,
        }
    }
}

impl AppComposition {
    /// 설정된 실행 파일을 찾아 경로 해석기를 만든다. 찾지 못하면 즉시 실패한다.
    pub fn path_resolver(&self) -> Result<TstoyPathResolver> {
        let settings = self.settings_repo.load()?;
        TstoyPathResolver::discover(&settings.executable())
    }

    /// 상태 조회 유스케이스를 생성한다.
    pub fn get_state_usecase<'a>(&'a self, path_resolver: &'a dyn PathResolver) -> GetStateUseCase<'a> {
        GetStateUseCase {
            path_resolver,
            file_store: &self.file_store,
            printer: &self.printer,
        }
    }

    /// 상태 적용 유스케이스를 생성한다.
    pub fn set_state_usecase<'a>(&'a self, path_resolver: &'a dyn PathResolver) -> SetStateUseCase<'a> {
        SetStateUseCase {
            path_resolver,
            file_store: &self.file_store,
            printer: &self.printer,
        }
    }

    /// 전체 scope 내보내기 유스케이스를 생성한다.
    pub fn export_state_usecase<'a>(
        &'a self,
        path_resolver: &'a dyn PathResolver,
    ) -> ExportStateUseCase<'a> {
        ExportStateUseCase {
            path_resolver,
            file_store: &self.file_store,
            printer: &self.printer,
        }
    }

    /// 설정 점검 유스케이스를 생성한다.
    pub fn inspect_settings_usecase(&self) -> InspectSettingsUseCase<'_> {
        InspectSettingsUseCase {
            settings_repo: &self.settings_repo,
        }
    }
}
