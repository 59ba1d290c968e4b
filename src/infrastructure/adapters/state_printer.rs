//! 관측 상태 출력 포트 구현 어댑터.

use std::io::{self, Write};

use anyhow::Result;

use crate::application::ports::StatePrinter;
use crate::domain::record::ConfigRecord;

/// 레코드마다 stdout에 JSON 한 줄을 쓴다.
pub struct StdoutPrinter;

impl StatePrinter for StdoutPrinter {
    fn emit(&self, record: &ConfigRecord) -> Result<()> {
        let line = record.to_json_line()?;
        let mut out = io::stdout().lock();
        writeln!(out, "{line}")?;
        out.flush()?;
        Ok(())
    }
}
