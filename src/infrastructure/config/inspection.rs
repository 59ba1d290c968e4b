//! 적용 설정 진단(inspection) 뷰 모델.

use serde::Serialize;

use super::loader::LoadedSettings;
use super::resolve::run_show_path;
use super::utils::locate_executable;
use crate::application::config::AdapterSettings;

#[derive(Debug, Clone, Serialize)]
pub struct SettingsInspection {
    pub searched_paths: Vec<String>,
    pub loaded_paths: Vec<String>,
    pub settings: AdapterSettings,
    pub executable: ExecutableInspection,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExecutableInspection {
    pub name: String,
    pub located: Option<String>,
    /// 실행 파일이 `show path`로 알려 준 경로(machine, user 순)
    pub reported_paths: Vec<String>,
    pub error: Option<String>,
}

impl SettingsInspection {
    pub(crate) fn from_loaded(loaded: LoadedSettings) -> Self {
        Self {
            searched_paths: loaded
                .searched_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            loaded_paths: loaded
                .loaded_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            executable: executable_inspection(&loaded.settings.executable()),
            settings: loaded.settings,
        }
    }
}

fn executable_inspection(name: &str) -> ExecutableInspection {
    let Some(program) = locate_executable(name) else {
        return ExecutableInspection {
            name: name.to_string(),
            located: None,
            reported_paths: Vec::new(),
            error: Some("not found in the working directory or PATH".to_string()),
        };
    };

    let (reported_paths, error) = match run_show_path(&program, None) {
        Ok(stdout) => (
            stdout
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(ToString::to_string)
                .collect(),
            None,
        ),
        Err(err) => (Vec::new(), Some(format!("{err:#}"))),
    };

    ExecutableInspection {
        name: name.to_string(),
        located: Some(program.display().to_string()),
        reported_paths,
        error,
    }
}
