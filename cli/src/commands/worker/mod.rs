use clap::Parser;

#[derive(Parser, Debug)]
pub struct WorkerCommand {
    /// Interface to listen on. Defaults to 127.0.0.1.
    #[arg(short, long)]
    pub address: Option<String>,

    /// Port to listen on. Defaults to 8787.
    #[arg(short, long)]
    pub port: Option<u16>,
}
