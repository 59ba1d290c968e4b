//! tstoy가 읽는 설정 파일의 디스크 표현.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::json::{canonicalize_keys, is_false, is_zero, parse_object};

const FILE_KEYS: &[&str] = &["updates"];
const UPDATES_KEYS: &[&str] = &["automatic", "checkFrequency"];

/// 설정 파일 전체. `updates` 외의 최상위 키는 다시 쓸 때 그대로 보존한다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updates: Option<UpdatesBlock>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// 업데이트 정책 블록. 기본값 필드는 쓰지 않고, 모르는 키는 그대로 둔다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatesBlock {
    #[serde(default, skip_serializing_if = "is_false")]
    pub automatic: bool,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub check_frequency: i32,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl FileContent {
    pub fn from_json(text: &str) -> Result<Self> {
        let mut object = canonicalize_keys(parse_object(text)?, FILE_KEYS);

        if let Some(Value::Object(updates)) = object.get_mut("updates") {
            *updates = canonicalize_keys(std::mem::take(updates), UPDATES_KEYS);
        }

        serde_json::from_value(Value::Object(object)).context("unexpected configuration layout")
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
