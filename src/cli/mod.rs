// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod handlers;

pub use commands::{CliCommand, FieldArgs};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Command to execute (defaults to serving the API)
    #[command(subcommand)]
    pub command: Option<CliCommand>,

    /// API server port
    #[arg(long, env = "WEB_PORT")]
    pub port: Option<u16>,
}
