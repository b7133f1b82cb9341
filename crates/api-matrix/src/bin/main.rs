//! api-matrix CLI - prints the authorization matrix of an OpenAPI document
//!
//! Endpoints are grouped by their first tag and listed with method, path,
//! description and the roles their security requirements name.

use clap::Parser;
use std::process::ExitCode;
use std::time::Duration;
use tracing::{error, info};

use api_matrix::{ReportRunner, RunConfig, RunOutcome};
use openapi_reader::format::DEFAULT_FORMAT;
use openapi_reader::{HttpFetcher, DEFAULT_EXCLUDED_PREFIX};

/// Authorization matrix of an OpenAPI document, in wiki or Markdown syntax
#[derive(Parser, Debug)]
#[command(name = "api-matrix")]
#[command(version)]
#[command(about = "Prints the endpoints of an OpenAPI document grouped by tag, with their required roles")]
struct Args {
    /// URL (http, https, file) or local path of the OpenAPI document
    url: String,

    /// Output format: wiki or markdown
    #[arg(default_value = DEFAULT_FORMAT)]
    format: String,

    /// Leave out paths starting with this prefix (repeatable)
    #[arg(long = "exclude", value_name = "PREFIX", default_value = DEFAULT_EXCLUDED_PREFIX)]
    exclude: Vec<String>,

    /// HTTP request timeout in seconds
    #[arg(long, default_value = "30")]
    timeout: u64,

    /// Extra attempts after a failed fetch
    #[arg(long, default_value = "1")]
    retries: u32,
}

impl From<Args> for RunConfig {
    fn from(args: Args) -> Self {
        RunConfig {
            location: args.url,
            format: args.format,
            excluded_prefixes: args.exclude,
            timeout: Duration::from_secs(args.timeout),
            retries: args.retries,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // Usage problems are reported without processing anything
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = RunConfig::from(args);

    let fetcher = match HttpFetcher::new(config.timeout, config.retries) {
        Ok(fetcher) => fetcher,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = std::io::stdout().lock();
    match ReportRunner::new(&fetcher).with_config(config).run(&mut stdout).await {
        Ok(RunOutcome::Printed { groups, endpoints }) => {
            info!("Printed {} endpoints in {} groups", endpoints, groups);
            ExitCode::SUCCESS
        }
        Ok(RunOutcome::NoApi) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
