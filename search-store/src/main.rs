use std::io;

use clap::Parser;
use tracing::error;

use search_store::commands::run;
use search_store::logging::init_tracing;
use search_store::{Cli, Dependencies, Settings, StoreError};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let settings = match Settings::from_env().and_then(|settings| cli.apply(settings)) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    init_tracing(settings.log_format);

    if let Err(e) = execute(cli, &settings).await {
        error!(error = %e, "Command failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Connect and run the command, abandoning it on Ctrl-C.
async fn execute(cli: Cli, settings: &Settings) -> Result<(), StoreError> {
    let dependencies = Dependencies::new(settings).await?;
    let mut stdout = io::stdout().lock();

    tokio::select! {
        result = run(cli.command, &dependencies.client, io::stdin(), &mut stdout) => result,
        _ = tokio::signal::ctrl_c() => Err(StoreError::Interrupted),
    }
}
