//! 리다이렉트된 stdin에서 JSON 입력을 읽는 모듈.

use std::io::{self, IsTerminal, Read};

use anyhow::{Context, Result};

/// stdin이 터미널이 아닐 때만 읽는다. 공백뿐인 입력은 입력 없음으로 본다.
pub fn read_redirected_stdin() -> Result<Option<String>> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }

    let mut raw = String::new();
    stdin
        .lock()
        .read_to_string(&mut raw)
        .context("failed to read JSON input from stdin")?;
    Ok(non_blank(&raw))
}

pub(crate) fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
