//! 애플리케이션 포트를 실제 인프라 구현체로 연결하는 어댑터 계층.

mod file_store;
mod path_resolver;
mod settings_repository;
mod state_printer;

pub use file_store::JsonFileStore;
pub use path_resolver::TstoyPathResolver;
pub use settings_repository::JsonSettingsRepository;
pub use state_printer::StdoutPrinter;
