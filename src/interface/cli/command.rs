//! CLI 명령 파싱 모듈.

use anyhow::{Result, bail};
use clap::{Args, Parser, Subcommand};

use crate::domain::record::{
    ConfigRecord, Ensure, MAX_UPDATE_FREQUENCY, MIN_UPDATE_FREQUENCY, Scope,
};

use super::input::{non_blank, read_redirected_stdin};

#[derive(Debug, Parser)]
#[command(name = "tstoy-dsc", version)]
#[command(about = "DSC resource for the tstoy application's configuration files")]
pub struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

/// 모든 하위 명령에서 쓸 수 있는 옵션.
#[derive(Debug, Args)]
struct GlobalArgs {
    /// The target scope for the configuration
    #[arg(long, global = true, value_name = "machine|user", value_parser = parse_scope)]
    scope: Option<Scope>,

    /// Whether the configuration file should exist [default: present]
    #[arg(long, global = true, value_name = "present|absent", value_parser = parse_ensure)]
    ensure: Option<Ensure>,

    /// Whether the configuration should set the app to automatically update
    #[arg(
        long = "updateAutomatically",
        global = true,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    update_automatically: Option<bool>,

    /// How frequently the configuration should update, between 1 and 90 days inclusive
    #[arg(
        long = "updateFrequency",
        global = true,
        value_name = "DAYS",
        value_parser = clap::value_parser!(i32)
            .range(i64::from(MIN_UPDATE_FREQUENCY)..=i64::from(MAX_UPDATE_FREQUENCY))
    )]
    update_frequency: Option<i32>,

    /// Specify options as a JSON blob instead of using the scope, ensure, and update* flags
    #[arg(long = "inputJSON", global = true, value_name = "JSON")]
    input_json: Option<String>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Gets the current state of a tstoy configuration file
    Get {
        /// Get the configurations for all scopes
        #[arg(long)]
        all: bool,
    },
    /// Sets a tstoy configuration file to the desired state
    Set,
    /// Exports the current state of every scope
    Export,
    /// Prints the JSON schema of the resource
    Schema,
    /// Shows effective adapter settings and executable availability
    Config,
}

pub enum CliAction {
    /// 주어진 scope 순서대로 상태를 읽는다.
    Get(Vec<Scope>),
    Set(ConfigRecord),
    Export,
    Schema,
    InspectConfig,
}

impl Cli {
    pub fn parse_action() -> Result<CliAction> {
        Cli::parse().into_action(read_redirected_stdin)
    }

    /// 파싱된 인자를 실행 액션으로 바꾼다.
    /// `stdin`은 `--inputJSON`이 없고 JSON이 필요할 때만 호출된다.
    pub fn into_action<F>(self, stdin: F) -> Result<CliAction>
    where
        F: FnOnce() -> Result<Option<String>>,
    {
        match self.command {
            Commands::Get { all } => {
                if all {
                    return Ok(CliAction::Get(Scope::ALL.to_vec()));
                }

                // 명시한 --scope가 JSON보다 우선한다.
                let scope = match self.global.scope {
                    Some(scope) => Some(scope),
                    None => match self.global.json_input(stdin)? {
                        Some(json) => ConfigRecord::from_json(&json)?.scope,
                        None => None,
                    },
                };

                let Some(scope) = scope else {
                    bail!("must provide a scope (use --scope, --all or a JSON input with \"scope\")");
                };
                Ok(CliAction::Get(vec![scope]))
            }
            Commands::Set => {
                let desired = match self.global.json_input(stdin)? {
                    Some(json) => ConfigRecord::from_json(&json)?,
                    None => self.global.record(),
                };
                Ok(CliAction::Set(desired))
            }
            Commands::Export => Ok(CliAction::Export),
            Commands::Schema => Ok(CliAction::Schema),
            Commands::Config => Ok(CliAction::InspectConfig),
        }
    }
}

impl GlobalArgs {
    fn json_input<F>(&self, stdin: F) -> Result<Option<String>>
    where
        F: FnOnce() -> Result<Option<String>>,
    {
        match self.input_json.as_deref().and_then(non_blank) {
            Some(json) => Ok(Some(json)),
            None => stdin(),
        }
    }

    fn record(&self) -> ConfigRecord {
        ConfigRecord {
            ensure: self.ensure.unwrap_or_default(),
            scope: self.scope,
            update_automatically: self.update_automatically.unwrap_or(false),
            update_frequency: self.update_frequency.unwrap_or(0),
        }
    }
}

fn parse_scope(raw: &str) -> Result<Scope, String> {
    raw.parse().map_err(|err: anyhow::Error| err.to_string())
}

fn parse_ensure(raw: &str) -> Result<Ensure, String> {
    raw.parse().map_err(|err: anyhow::Error| err.to_string())
}
