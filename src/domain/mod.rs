//! Domain layer
//! 리소스 레코드/설정 파일 값 객체와 병합 정책을 외부 I/O 없이 표현한다.

pub mod file;
mod json;
pub mod policy;
pub mod record;
pub mod schema;
