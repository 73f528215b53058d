//! cld-mo - Media Optimizer command line client
//!
//! Reads credentials from `CLOUDINARY_URL` / `CLOUDINARY_*` (a `.env` file is
//! honored) and calls the Media Optimizer API.

use anyhow::Context;
use clap::{Parser, Subcommand};
use cloudinary_dispatch::api::media_optimizer;
use cloudinary_dispatch::{ApiClient, ApiResponse, CallOptions, Config, HttpTransport};
use std::process::ExitCode;
use tracing::debug;

#[derive(Debug, Parser)]
#[command(name = "cld-mo", version, about = "Cloudinary Media Optimizer client")]
struct Cli {
    /// Override the configured cloud name
    #[arg(long, global = true)]
    cloud_name: Option<String>,

    /// Override the API base URL
    #[arg(long, global = true)]
    upload_prefix: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check the service is reachable
    Ping,
    /// Warm the cache for one URL
    WarmUp { url: String },
    /// Invalidate cached URLs, sent in batches of 20
    Invalidate {
        #[arg(required = true)]
        urls: Vec<String>,
    },
}

impl Cli {
    fn call_options(&self) -> CallOptions {
        let mut options = CallOptions::new();
        if let Some(cloud_name) = &self.cloud_name {
            options = options.cloud_name(cloud_name);
        }
        if let Some(prefix) = &self.upload_prefix {
            options = options.upload_prefix(prefix);
        }
        if let Some(timeout) = self.timeout {
            options = options.transport_option("timeout", timeout);
        }
        options
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if let Err(e) = dotenvy::dotenv() {
        debug!("No .env file loaded: {}", e);
    }

    let config = Config::from_env().context("Failed to load configuration")?;
    let transport = HttpTransport::new().context("Failed to create HTTP transport")?;
    let client = ApiClient::new(config, transport);
    let options = cli.call_options();

    let responses: Vec<ApiResponse> = match &cli.command {
        Command::Ping => vec![media_optimizer::ping(&client, options)?],
        Command::WarmUp { url } => vec![media_optimizer::warm_up(&client, url, options)?],
        Command::Invalidate { urls } => media_optimizer::invalidate(&client, urls, options)?,
    };

    for response in responses {
        println!("{}", response.text());
    }
    Ok(())
}

fn main() -> ExitCode {
    cloudinary_dispatch::init_logging();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
