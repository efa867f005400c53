use serde::Serialize;

use crate::domain::{
    Channel, MessageText, PhoneNumber, Pin, PinId, PinOptions, PinPlaceholder, PinType,
    SendInAppOtp, SendOtp, SendVoiceCall, SendVoiceOtp, SenderId, VerifyOtp,
};

/// `sms/otp/send` body.
#[derive(Debug, Serialize)]
pub struct SendOtpBody<'a> {
    to: PhoneNumber,
    from: &'a SenderId,
    message_type: PinType,
    channel: Channel,
    #[serde(flatten)]
    pin: &'a PinOptions,
    pin_placeholder: &'a PinPlaceholder,
    message_text: &'a MessageText,
}

pub fn encode_send_otp_body(request: &SendOtp) -> SendOtpBody<'_> {
    SendOtpBody {
        to: request.to(),
        from: request.sender(),
        message_type: request.selected_message_type(),
        channel: request.selected_channel(),
        pin: request.pin(),
        pin_placeholder: request.pin_placeholder(),
        message_text: request.message_text(),
    }
}

/// `sms/otp/send/voice` body.
#[derive(Debug, Serialize)]
pub struct SendVoiceOtpBody<'a> {
    phone_number: PhoneNumber,
    #[serde(flatten)]
    pin: &'a PinOptions,
}

pub fn encode_send_voice_otp_body(request: &SendVoiceOtp) -> SendVoiceOtpBody<'_> {
    SendVoiceOtpBody {
        phone_number: request.phone_number(),
        pin: request.pin(),
    }
}

/// `sms/otp/call` body.
#[derive(Debug, Serialize)]
pub struct SendVoiceCallBody {
    phone_number: PhoneNumber,
    code: u32,
}

pub fn encode_send_voice_call_body(request: &SendVoiceCall) -> SendVoiceCallBody {
    SendVoiceCallBody {
        phone_number: request.phone_number(),
        code: request.code(),
    }
}

/// `sms/otp/verify` body.
#[derive(Debug, Serialize)]
pub struct VerifyOtpBody<'a> {
    pin_id: &'a PinId,
    pin: &'a Pin,
}

pub fn encode_verify_otp_body(request: &VerifyOtp) -> VerifyOtpBody<'_> {
    VerifyOtpBody {
        pin_id: request.pin_id(),
        pin: request.pin(),
    }
}

/// `sms/otp/generate` body.
#[derive(Debug, Serialize)]
pub struct SendInAppOtpBody<'a> {
    phone_number: PhoneNumber,
    pin_type: PinType,
    #[serde(flatten)]
    pin: &'a PinOptions,
}

pub fn encode_send_in_app_otp_body(request: &SendInAppOtp) -> SendInAppOtpBody<'_> {
    SendInAppOtpBody {
        phone_number: request.phone_number(),
        pin_type: request.pin_type(),
        pin: request.pin(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use crate::domain::{PinAttempts, PinLength, PinTimeToLive};

    use super::*;

    fn encode<B: Serialize>(body: B) -> Value {
        serde_json::to_value(body).unwrap()
    }

    fn phone() -> PhoneNumber {
        PhoneNumber::new(2348012345678).unwrap()
    }

    fn pin_options() -> PinOptions {
        PinOptions::new(
            PinAttempts::new(10).unwrap(),
            PinTimeToLive::new(5).unwrap(),
            PinLength::new(6).unwrap(),
        )
    }

    #[test]
    fn send_otp_body() {
        let request = SendOtp::new(
            phone(),
            SenderId::new("Approved").unwrap(),
            pin_options(),
            PinPlaceholder::new("< 1234 >").unwrap(),
            MessageText::new("Your pin is < 1234 >").unwrap(),
        )
        .unwrap()
        .message_type(PinType::Alphanumeric)
        .channel(Channel::Dnd);

        assert_eq!(
            encode(encode_send_otp_body(&request)),
            json!({
                "to": 2348012345678u64,
                "from": "Approved",
                "message_type": "ALPHANUMERIC",
                "channel": "dnd",
                "pin_attempts": 10,
                "pin_time_to_live": 5,
                "pin_length": 6,
                "pin_placeholder": "< 1234 >",
                "message_text": "Your pin is < 1234 >",
            })
        );
    }

    #[test]
    fn send_voice_otp_body_uses_phone_number_field() {
        let request = SendVoiceOtp::new(phone(), pin_options());
        assert_eq!(
            encode(encode_send_voice_otp_body(&request)),
            json!({
                "phone_number": 2348012345678u64,
                "pin_attempts": 10,
                "pin_time_to_live": 5,
                "pin_length": 6,
            })
        );
    }

    #[test]
    fn send_voice_call_body() {
        let request = SendVoiceCall::new(phone(), 44_321);
        assert_eq!(
            encode(encode_send_voice_call_body(&request)),
            json!({
                "phone_number": 2348012345678u64,
                "code": 44321,
            })
        );
    }

    #[test]
    fn verify_otp_body() {
        let request = VerifyOtp::new(
            PinId::new("c8dcd048-5e7f-4347-8c89-4470c3af0b").unwrap(),
            Pin::new("195558").unwrap(),
        );
        assert_eq!(
            encode(encode_verify_otp_body(&request)),
            json!({
                "pin_id": "c8dcd048-5e7f-4347-8c89-4470c3af0b",
                "pin": "195558",
            })
        );
    }

    #[test]
    fn send_in_app_otp_body() {
        let request = SendInAppOtp::new(phone(), PinType::Numeric, pin_options());
        assert_eq!(
            encode(encode_send_in_app_otp_body(&request)),
            json!({
                "phone_number": 2348012345678u64,
                "pin_type": "NUMERIC",
                "pin_attempts": 10,
                "pin_time_to_live": 5,
                "pin_length": 6,
            })
        );
    }
}
