//! 경로 해석 포트 구현 어댑터.

use std::path::PathBuf;

use anyhow::{Result, bail};

use crate::application::ports::PathResolver;
use crate::domain::record::Scope;
use crate::infrastructure::config::{locate_executable, run_show_path};

/// `<exe> show path <scope>`의 stdout을 설정 파일 경로로 쓰는 어댑터.
#[derive(Debug, Clone)]
pub struct TstoyPathResolver {
    program: PathBuf,
}

impl TstoyPathResolver {
    /// 실행 파일을 찾지 못하면 어떤 명령도 실행하기 전에 실패한다.
    pub fn discover(executable: &str) -> Result<Self> {
        let Some(program) = locate_executable(executable) else {
            bail!("{executable} not found in the working directory or PATH");
        };
        tracing::debug!(program = %program.display(), "located configuration executable");
        Ok(Self { program })
    }
}

impl PathResolver for TstoyPathResolver {
    fn resolve(&self, scope: Scope) -> Result<PathBuf> {
        let stdout = run_show_path(&self.program, Some(scope))?;
        if stdout.is_empty() {
            bail!(
                "{} reported an empty path for scope {scope}",
                self.program.display()
            );
        }
        Ok(PathBuf::from(stdout))
    }
}
