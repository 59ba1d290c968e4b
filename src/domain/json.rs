//! 입력/파일 JSON을 도메인 타입으로 옮기기 전에 정규화하는 헬퍼.

use anyhow::{Result, bail};
use serde_json::{Map, Value};

/// 텍스트를 JSON 객체로 파싱한다. 최상위가 객체가 아니면 오류.
pub(crate) fn parse_object(text: &str) -> Result<Map<String, Value>> {
    match serde_json::from_str::<Value>(text)? {
        Value::Object(object) => Ok(object),
        other => bail!("expected a JSON object, found {}", kind_of(&other)),
    }
}

/// `known`과 대소문자만 다른 키를 정규 이름으로 바꾼다.
/// 알 수 없는 키는 그대로 둔다.
pub(crate) fn canonicalize_keys(object: Map<String, Value>, known: &[&str]) -> Map<String, Value> {
    object
        .into_iter()
        .map(|(key, value)| {
            let canonical = known
                .iter()
                .find(|name| name.eq_ignore_ascii_case(&key))
                .map(|name| (*name).to_string())
                .unwrap_or(key);
            (canonical, value)
        })
        .collect()
}

pub(crate) fn is_false(value: &bool) -> bool {
    !*value
}

pub(crate) fn is_zero(value: &i32) -> bool {
    *value == 0
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
