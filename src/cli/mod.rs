pub mod commands;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;

#[derive(Parser)]
#[command(name = "pocketbook")]
#[command(about = "Pocketbook web server and route gate tooling")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Run the HTTP server")]
    Serve {
        #[arg(long, short, help = "Port to listen on (overrides PORT / APP_PORT)")]
        port: Option<u16>,
    },

    #[command(about = "Show the route gate decision for a request path")]
    Classify {
        #[arg(help = "Request path, e.g. /transactions/123")]
        path: String,
        #[arg(long = "cookie", value_name = "NAME=VALUE", help = "Cookie sent with the request (repeatable)")]
        cookies: Vec<String>,
    },

    #[command(about = "List protected prefixes and the route patterns derived from them")]
    Routes,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli, config: AppConfig) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    match cli.command {
        Commands::Serve { port } => commands::serve::handle(config, port).await,
        Commands::Classify { path, cookies } => {
            commands::classify::handle(&config, &path, &cookies, output_format)
        }
        Commands::Routes => commands::routes::handle(&config, output_format),
    }
}
