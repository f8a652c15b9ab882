pub mod commands;

use clap::Parser;
use commands::Commands;
use log::error;
use shared::networking::endpoint::Endpoint;
use shared::{env, logger};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() {
    env::init();
    logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Worker(args) => {
            let address = args.address.unwrap_or_else(|| "127.0.0.1".to_string());
            let port = args.port.unwrap_or(8787);

            let endpoint = Endpoint::new(address, port);
            if let Err(e) = worker::run_worker(&endpoint).await {
                error!("Worker error: {}", e);
                std::process::exit(1);
            }
        }
        Commands::Render(args) => {
            if let Err(e) = commands::render::run(args).await {
                error!("Render failed: {}", e);
                std::process::exit(1);
            }
        }
    }
}
