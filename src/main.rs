use std::path::Path;
use clap::Parser;

use password_generator_field::api;
use password_generator_field::cli::{handlers, Args, CliCommand, FieldArgs};
use password_generator_field::core::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let mut config = Config::load();
    if let Some(port) = args.port {
        config.web_port = port;
    }

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .parse_default_env()
        .init();

    log::debug!("Loaded config: {:?}", config);

    match args.command {
        Some(CliCommand::Render(field_args)) => {
            println!("{}", handlers::handle_render(&field_args, &config)?);
        }
        Some(CliCommand::Hash { value }) => {
            println!("{}", handlers::handle_hash(&value, &config)?);
        }
        Some(CliCommand::Serve(field_args)) => serve(&field_args, &config).await?,
        None => {
            let field_args = FieldArgs { name: "Password".to_string(), ..FieldArgs::default() };
            serve(&field_args, &config).await?
        }
    }

    Ok(())
}

async fn serve(field_args: &FieldArgs, config: &Config) -> anyhow::Result<()> {
    let field = handlers::build_field(field_args, config);
    log::info!("🔒 Serving field '{}' ({})", field.name(), field.component());

    api::start_server(field, config).await?;
    Ok(())
}
