//! Infrastructure layer
//! 외부 시스템(실행 파일/파일시스템/stdout)과 직접 통신하는 구현체 집합.

pub mod adapters;
pub mod config;
