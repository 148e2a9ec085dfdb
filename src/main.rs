//! Binary entrypoint: load config, start logging, serve until SIGTERM.

use std::process::ExitCode;
use std::sync::Arc;

use tracing::error;

use wmata_incidents::{Config, IncidentFetcher, IncidentService, Server, app, logging};

#[tokio::main]
async fn main() -> ExitCode {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("wmata-incidents: {e}");
            return ExitCode::FAILURE;
        }
    };

    logging::init_tracing(&config);

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "server exited with error");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Config) -> Result<(), wmata_incidents::Error> {
    let service = Arc::new(IncidentService::new(IncidentFetcher::new(&config)?));
    Server::bind(config.bind_addr).await?.serve(app(service)).await
}
