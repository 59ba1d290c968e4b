//! 외부 실행 파일에 설정 경로를 묻는 유틸리티.
//!
//! - 프로세스 실행은 인프라 계층에서만 수행한다.
//! - 자식 프로세스가 끝날 때까지 호출자를 막는다(타임아웃 없음).

use std::path::Path;
use std::process::{Command, Stdio};

use anyhow::{Context, Result, bail};

use crate::domain::record::Scope;

/// `show path [scope]` 인자. scope가 없으면 모든 scope 경로를 묻는다.
pub fn show_path_args(scope: Option<Scope>) -> Vec<&'static str> {
    let mut args = vec!["show", "path"];
    if let Some(scope) = scope {
        args.push(scope.as_str());
    }
    args
}

/// 실행 파일의 stdout을 공백을 걷어 내고 반환한다.
pub fn run_show_path(program: &Path, scope: Option<Scope>) -> Result<String> {
    let args = show_path_args(scope);
    let label = format!("{} {}", program.display(), args.join(" "));

    let output = Command::new(program)
        .args(&args)
        .stdin(Stdio::null())
        .output()
        .with_context(|| format!("failed to run `{label}`"))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        bail!(
            "`{}` failed ({}): {}",
            label,
            output.status,
            if stderr.is_empty() {
                "no stderr output"
            } else {
                stderr.as_str()
            }
        );
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}
