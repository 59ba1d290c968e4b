//! Interface layer
//! CLI 입력을 액션으로 바꾸고 유스케이스를 조립한다.

pub mod cli;
