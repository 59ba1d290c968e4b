//! `tstoy-dsc` 바이너리 진입점.

use anyhow::Result;
use tstoy_dsc::domain::schema::resource_schema;
use tstoy_dsc::interface::cli::{AppComposition, Cli, CliAction};

fn main() {
    // stdout은 JSON 출력 전용이므로 로그는 stderr로 보낸다.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let action = match Cli::parse_action() {
        Ok(action) => action,
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run(action) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run(action: CliAction) -> Result<()> {
    let composition = AppComposition::default();

    match action {
        CliAction::Get(scopes) => {
            let resolver = composition.path_resolver()?;
            composition.get_state_usecase(&resolver).execute(&scopes);
        }
        CliAction::Set(desired) => {
            let resolver = composition.path_resolver()?;
            composition.set_state_usecase(&resolver).execute(desired)?;
        }
        CliAction::Export => {
            let resolver = composition.path_resolver()?;
            composition.export_state_usecase(&resolver).execute();
        }
        CliAction::Schema => println!("{}", serde_json::to_string(&resource_schema())?),
        CliAction::InspectConfig => println!("{}", composition.inspect_settings_usecase().execute()?),
    }

    Ok(())
}
