//! DSC 리소스 레코드(원하는 상태 / 관측 상태) 값 객체.

use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::json::{canonicalize_keys, is_false, is_zero, parse_object};

/// 권장 업데이트 확인 주기(일) 범위.
pub const MIN_UPDATE_FREQUENCY: i32 = 1;
pub const MAX_UPDATE_FREQUENCY: i32 = 90;

const RECORD_KEYS: &[&str] = &["ensure", "scope", "updateAutomatically", "updateFrequency"];

/// 설정 파일이 적용되는 대상 범위.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Scope {
    Machine,
    User,
}

impl Scope {
    /// 전체 조회 시 열거 순서.
    pub const ALL: [Scope; 2] = [Scope::Machine, Scope::User];

    pub fn as_str(self) -> &'static str {
        match self {
            Scope::Machine => "machine",
            Scope::User => "user",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scope {
    type Err = anyhow::Error;

    fn from_str(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "machine" => Ok(Scope::Machine),
            "user" => Ok(Scope::User),
            _ => bail!("unable to convert '{raw}' to scope, must be one of: machine, user"),
        }
    }
}

impl TryFrom<String> for Scope {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// 설정 파일의 존재 여부(원하는 상태).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Ensure {
    #[default]
    Present,
    Absent,
}

impl Ensure {
    pub fn as_str(self) -> &'static str {
        match self {
            Ensure::Present => "present",
            Ensure::Absent => "absent",
        }
    }
}

impl fmt::Display for Ensure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Ensure {
    type Err = anyhow::Error;

    fn from_str(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "present" => Ok(Ensure::Present),
            "absent" => Ok(Ensure::Absent),
            _ => bail!("unable to convert '{raw}' to ensure, must be one of: absent, present"),
        }
    }
}

impl TryFrom<String> for Ensure {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// CLI 입력으로 만든 원하는 상태, 또는 get/set 이후 출력하는 관측 상태.
///
/// 직렬화 키 순서는 `ensure`, `scope`, `updateAutomatically`, `updateFrequency`이며
/// 기본값(false/0)인 업데이트 필드와 비어 있는 scope는 생략한다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigRecord {
    #[serde(default)]
    pub ensure: Ensure,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<Scope>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub update_automatically: bool,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub update_frequency: i32,
}

impl ConfigRecord {
    /// 파일이 없는 scope의 관측 상태.
    pub fn absent(scope: Scope) -> Self {
        Self {
            ensure: Ensure::Absent,
            scope: Some(scope),
            ..Self::default()
        }
    }

    /// `--inputJSON`/stdin으로 받은 JSON 블롭을 해석한다.
    /// 키는 대소문자를 가리지 않고, `null` 값은 미지정으로 취급한다.
    pub fn from_json(text: &str) -> Result<Self> {
        let object = parse_object(text).context("input JSON is not a valid object")?;
        let object: serde_json::Map<String, Value> = canonicalize_keys(object, RECORD_KEYS)
            .into_iter()
            .filter(|(_, value)| !value.is_null())
            .collect();

        serde_json::from_value(Value::Object(object))
            .context("input JSON does not describe a configuration")
    }

    /// stdout 계약에 맞춘 한 줄 JSON.
    pub fn to_json_line(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn frequency_in_range(&self) -> bool {
        (MIN_UPDATE_FREQUENCY..=MAX_UPDATE_FREQUENCY).contains(&self.update_frequency)
    }
}
