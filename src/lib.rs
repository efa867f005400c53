//! Typed Rust client for the Termii SMS, voice and OTP HTTP API.
//!
//! The crate is split into a domain layer of strong types, a transport layer
//! for wire-format details, and a small client layer that issues requests and
//! normalizes responses.
//!
//! Every client method resolves to the untyped JSON body on HTTP `200` and to a
//! [`TermiiError`] otherwise. The error's `Display` text is Termii's documented
//! explanation of the status; [`TermiiError::kind`] lets callers branch without
//! matching on it.
//!
//! ```rust,no_run
//! use termii::{ApiKey, MessageText, PhoneNumber, SendMessage, SenderId, TermiiClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), termii::TermiiError> {
//!     let client = TermiiClient::new(ApiKey::new("...")?);
//!     let to: PhoneNumber = "+2348012345678".parse()?;
//!     let request = SendMessage::new(to, SenderId::new("Termii")?, MessageText::new("hello")?);
//!     let _payload = client.send_message(&request).await?;
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{ErrorKind, TermiiClient, TermiiClientBuilder, TermiiError};
pub use domain::{
    ApiKey, Channel, Classification, CountryCode, DndQuery, FALLBACK_MESSAGE, KnownStatus, Media,
    MediaUrl, MessageText, NumberStatusQuery, PhoneNumber, Pin, PinAttempts, PinId, PinLength,
    PinOptions, PinPlaceholder, PinTimeToLive, PinType, SendInAppOtp, SendMessage, SendOtp,
    SendVoiceCall, SendVoiceOtp, SenderId, SenderIdRequest, ValidationError, VerifyOtp, classify,
};
