use std::io;

use termii::{
    ApiKey, Channel, Media, MediaUrl, MessageText, PhoneNumber, SendMessage, SenderId,
    TermiiClient,
};

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let api_key = required_env("TERMII_API_KEY")?;
    let phone_raw = required_env("TERMII_PHONE")?;
    let sender = required_env("TERMII_SENDER_ID")?;
    let message = std::env::var("TERMII_MESSAGE")
        .unwrap_or_else(|_| "Hello from the termii example.".to_owned());

    let client = TermiiClient::new(ApiKey::new(api_key)?);
    let to: PhoneNumber = phone_raw.parse()?;
    let mut request = SendMessage::new(to, SenderId::new(sender)?, MessageText::new(message)?);

    // TERMII_MEDIA_URL switches to WhatsApp, the only channel that carries media.
    if let Ok(media_url) = std::env::var("TERMII_MEDIA_URL") {
        let mut media = Media::new(MediaUrl::new(media_url)?);
        if let Ok(caption) = std::env::var("TERMII_MEDIA_CAPTION") {
            media = media.with_caption(caption);
        }
        request = request.channel(Channel::Whatsapp).media(media);
    }

    let payload = client.send_message(&request).await?;
    println!("response: {payload}");

    Ok(())
}
