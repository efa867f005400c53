//! Transport layer: routes and wire-format details (query parameters and JSON bodies).

use serde::Serialize;

mod account;
mod messaging;
mod otp;
mod payload;

pub use account::{
    SubmitSenderIdBody, encode_balance_query, encode_dnd_query, encode_history_query,
    encode_number_status_query, encode_sender_ids_query, encode_submit_sender_id_body,
};
pub use messaging::{SendMessageBody, encode_send_message_body};
pub use otp::{
    SendInAppOtpBody, SendOtpBody, SendVoiceCallBody, SendVoiceOtpBody, VerifyOtpBody,
    encode_send_in_app_otp_body, encode_send_otp_body, encode_send_voice_call_body,
    encode_send_voice_otp_body, encode_verify_otp_body,
};
pub use payload::decode_payload;

/// A write body with `api_key` added alongside the endpoint's own fields.
#[derive(Debug, Serialize)]
pub struct WithApiKey<'a, B> {
    pub api_key: &'a str,
    #[serde(flatten)]
    pub body: B,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Termii endpoints, relative to the API base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Balance,
    History,
    NumberStatus,
    Dnd,
    SenderIds,
    SubmitSenderId,
    SendMessage,
    SendOtp,
    SendVoiceOtp,
    SendVoiceCall,
    VerifyOtp,
    SendInAppOtp,
}

impl Endpoint {
    pub fn route(self) -> &'static str {
        match self {
            Self::Balance => "get-balance",
            Self::History => "sms/inbox",
            Self::NumberStatus => "insight/number/query",
            Self::Dnd => "check/dnd",
            Self::SenderIds => "sender-id",
            Self::SubmitSenderId => "sender-id/request",
            Self::SendMessage => "sms/send",
            Self::SendOtp => "sms/otp/send",
            Self::SendVoiceOtp => "sms/otp/send/voice",
            Self::SendVoiceCall => "sms/otp/call",
            Self::VerifyOtp => "sms/otp/verify",
            Self::SendInAppOtp => "sms/otp/generate",
        }
    }

    pub fn method(self) -> Method {
        match self {
            Self::Balance | Self::History | Self::NumberStatus | Self::Dnd | Self::SenderIds => {
                Method::Get
            }
            Self::SubmitSenderId
            | Self::SendMessage
            | Self::SendOtp
            | Self::SendVoiceOtp
            | Self::SendVoiceCall
            | Self::VerifyOtp
            | Self::SendInAppOtp => Method::Post,
        }
    }
}
