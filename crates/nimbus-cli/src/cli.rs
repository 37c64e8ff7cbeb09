use clap::Parser;

use nimbus_chat::Provider;

/// Nimbus — terminal chat front for the cloud AI agent samples.
#[derive(Parser, Debug)]
#[command(name = "nimbus", version, about)]
pub struct Args {
    /// Backend variant to talk to: aws, azure, or gcp.
    #[arg(short, long)]
    pub provider: Option<Provider>,

    /// Backend base URL override (e.g. http://localhost:8082).
    #[arg(short, long)]
    pub endpoint: Option<String>,

    /// Log filter override (e.g. debug, nimbus_chat=debug).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
