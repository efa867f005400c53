use std::io;

use termii::{ApiKey, TermiiClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let api_key = std::env::var("TERMII_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "TERMII_API_KEY environment variable is required",
        )
    })?;

    let client = TermiiClient::new(ApiKey::new(api_key)?);

    match client.balance().await {
        Ok(payload) => println!("balance: {payload}"),
        Err(err) => println!("balance failed ({:?}): {err}", err.kind()),
    }

    match client.all_sender_ids().await {
        Ok(payload) => println!("sender ids: {payload}"),
        Err(err) => println!("sender ids failed ({:?}): {err}", err.kind()),
    }

    Ok(())
}
