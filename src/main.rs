use std::sync::Arc;

use dotenvy::dotenv;
use review_ai::{Config, GeminiClient, PromptForwarder};
use tracing::error;

#[tokio::main]
async fn main() {
    // diagnostics go to stderr, the demo response to stdout
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    dotenv().ok();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("{err}");
            std::process::exit(1);
        }
    };

    let client = GeminiClient::new(config.api_key);
    let forwarder = PromptForwarder::new(Arc::new(client));

    match forwarder.forward("Explain how AI works in a few words").await {
        Some(text) => println!("AI Response: {text}"),
        None => println!("AI Response: (none)"),
    }
}
