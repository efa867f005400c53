use std::io::{self, BufRead, Write};

use termii::{
    ApiKey, MessageText, PhoneNumber, Pin, PinAttempts, PinId, PinLength, PinOptions,
    PinPlaceholder, PinTimeToLive, SendOtp, SenderId, TermiiClient, VerifyOtp,
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

    let client = TermiiClient::new(ApiKey::new(api_key)?);
    let to: PhoneNumber = phone_raw.parse()?;

    let pin = PinOptions::new(
        PinAttempts::new(3)?,
        PinTimeToLive::new(5)?,
        PinLength::new(6)?,
    );
    let request = SendOtp::new(
        to,
        SenderId::new(sender)?,
        pin,
        PinPlaceholder::new("< 1234 >")?,
        MessageText::new("Your verification code is < 1234 >")?,
    )?;

    let sent = client.send_otp(&request).await?;
    println!("send response: {sent}");

    let pin_id = sent
        .get("pinId")
        .and_then(|value| value.as_str())
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "response has no pinId"))?;

    print!("enter the code you received: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    let verify = VerifyOtp::new(PinId::new(pin_id)?, Pin::new(line)?);
    let verified = client.verify_otp(&verify).await?;
    println!("verify response: {verified}");

    Ok(())
}
