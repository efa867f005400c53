use serde::Serialize;

use crate::domain::validation::ValidationError;
use crate::domain::value::{
    Channel, CountryCode, MediaUrl, MessageText, PhoneNumber, Pin, PinAttempts, PinId, PinLength,
    PinPlaceholder, PinTimeToLive, PinType, SenderId,
};

/// Phone number insight lookup (`insight/number/query`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberStatusQuery {
    phone_number: PhoneNumber,
    country_code: CountryCode,
}

impl NumberStatusQuery {
    pub fn new(phone_number: PhoneNumber, country_code: CountryCode) -> Self {
        Self {
            phone_number,
            country_code,
        }
    }

    pub fn phone_number(&self) -> PhoneNumber {
        self.phone_number
    }

    pub fn country_code(&self) -> &CountryCode {
        &self.country_code
    }
}

/// DND registry lookup (`check/dnd`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DndQuery {
    phone_number: PhoneNumber,
}

impl DndQuery {
    pub fn new(phone_number: PhoneNumber) -> Self {
        Self { phone_number }
    }

    pub fn phone_number(&self) -> PhoneNumber {
        self.phone_number
    }
}

/// Sender id registration (`sender-id/request`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SenderIdRequest {
    sender_id: SenderId,
    usecase: String,
    company: String,
}

impl SenderIdRequest {
    pub const USECASE_FIELD: &'static str = "usecase";
    pub const COMPANY_FIELD: &'static str = "company";

    /// `usecase` is a sample of the messages that will be sent under this id.
    pub fn new(
        sender_id: SenderId,
        usecase: impl Into<String>,
        company: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let usecase = usecase.into();
        if usecase.trim().is_empty() {
            return Err(ValidationError::Empty {
                field: Self::USECASE_FIELD,
            });
        }
        let company = company.into();
        if company.trim().is_empty() {
            return Err(ValidationError::Empty {
                field: Self::COMPANY_FIELD,
            });
        }
        Ok(Self {
            sender_id,
            usecase,
            company,
        })
    }

    pub fn sender_id(&self) -> &SenderId {
        &self.sender_id
    }

    pub fn usecase(&self) -> &str {
        &self.usecase
    }

    pub fn company(&self) -> &str {
        &self.company
    }
}

/// Media attachment for [`SendMessage`]. Only delivered on [`Channel::Whatsapp`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Media {
    pub url: MediaUrl,
    pub caption: Option<String>,
}

impl Media {
    pub fn new(url: MediaUrl) -> Self {
        Self { url, caption: None }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

/// Outbound message (`sms/send`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendMessage {
    to: PhoneNumber,
    from: SenderId,
    sms: MessageText,
    channel: Channel,
    media: Option<Media>,
}

impl SendMessage {
    /// Plain message on [`Channel::Generic`].
    pub fn new(to: PhoneNumber, from: SenderId, sms: MessageText) -> Self {
        Self {
            to,
            from,
            sms,
            channel: Channel::default(),
            media: None,
        }
    }

    pub fn channel(mut self, channel: Channel) -> Self {
        self.channel = channel;
        self
    }

    /// Attach media. It is dropped on any channel other than [`Channel::Whatsapp`].
    pub fn media(mut self, media: Media) -> Self {
        self.media = Some(media);
        self
    }

    pub fn to(&self) -> PhoneNumber {
        self.to
    }

    pub fn sender(&self) -> &SenderId {
        &self.from
    }

    pub fn sms(&self) -> &MessageText {
        &self.sms
    }

    pub fn selected_channel(&self) -> Channel {
        self.channel
    }

    /// Media as supplied, whether or not it will be sent.
    pub fn attached_media(&self) -> Option<&Media> {
        self.media.as_ref()
    }

    /// Media that will actually be delivered.
    pub fn deliverable_media(&self) -> Option<&Media> {
        match self.channel {
            Channel::Whatsapp => self.media.as_ref(),
            Channel::Generic | Channel::Dnd => None,
        }
    }
}

/// PIN generation settings shared by the OTP endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PinOptions {
    #[serde(rename = "pin_attempts")]
    pub attempts: PinAttempts,
    #[serde(rename = "pin_time_to_live")]
    pub time_to_live: PinTimeToLive,
    #[serde(rename = "pin_length")]
    pub length: PinLength,
}

impl PinOptions {
    pub fn new(attempts: PinAttempts, time_to_live: PinTimeToLive, length: PinLength) -> Self {
        Self {
            attempts,
            time_to_live,
            length,
        }
    }
}

/// OTP delivered inside a text message (`sms/otp/send`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendOtp {
    to: PhoneNumber,
    from: SenderId,
    message_type: PinType,
    channel: Channel,
    pin: PinOptions,
    pin_placeholder: PinPlaceholder,
    message_text: MessageText,
}

impl SendOtp {
    /// `message_text` must contain `pin_placeholder`; Termii substitutes the PIN there.
    pub fn new(
        to: PhoneNumber,
        from: SenderId,
        pin: PinOptions,
        pin_placeholder: PinPlaceholder,
        message_text: MessageText,
    ) -> Result<Self, ValidationError> {
        if !message_text.as_str().contains(pin_placeholder.as_str()) {
            return Err(ValidationError::MissingPlaceholder {
                placeholder: pin_placeholder.as_str().to_owned(),
            });
        }
        Ok(Self {
            to,
            from,
            message_type: PinType::default(),
            channel: Channel::default(),
            pin,
            pin_placeholder,
            message_text,
        })
    }

    pub fn message_type(mut self, message_type: PinType) -> Self {
        self.message_type = message_type;
        self
    }

    pub fn channel(mut self, channel: Channel) -> Self {
        self.channel = channel;
        self
    }

    pub fn to(&self) -> PhoneNumber {
        self.to
    }

    pub fn sender(&self) -> &SenderId {
        &self.from
    }

    pub fn selected_message_type(&self) -> PinType {
        self.message_type
    }

    pub fn selected_channel(&self) -> Channel {
        self.channel
    }

    pub fn pin(&self) -> &PinOptions {
        &self.pin
    }

    pub fn pin_placeholder(&self) -> &PinPlaceholder {
        &self.pin_placeholder
    }

    pub fn message_text(&self) -> &MessageText {
        &self.message_text
    }
}

/// OTP read out over a voice call (`sms/otp/send/voice`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SendVoiceOtp {
    phone_number: PhoneNumber,
    pin: PinOptions,
}

impl SendVoiceOtp {
    pub fn new(phone_number: PhoneNumber, pin: PinOptions) -> Self {
        Self { phone_number, pin }
    }

    pub fn phone_number(&self) -> PhoneNumber {
        self.phone_number
    }

    pub fn pin(&self) -> &PinOptions {
        &self.pin
    }
}

/// Voice call that speaks a caller-chosen numeric code (`sms/otp/call`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SendVoiceCall {
    phone_number: PhoneNumber,
    code: u32,
}

impl SendVoiceCall {
    pub fn new(phone_number: PhoneNumber, code: u32) -> Self {
        Self { phone_number, code }
    }

    pub fn phone_number(&self) -> PhoneNumber {
        self.phone_number
    }

    pub fn code(&self) -> u32 {
        self.code
    }
}

/// PIN verification (`sms/otp/verify`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyOtp {
    pin_id: PinId,
    pin: Pin,
}

impl VerifyOtp {
    pub fn new(pin_id: PinId, pin: Pin) -> Self {
        Self { pin_id, pin }
    }

    pub fn pin_id(&self) -> &PinId {
        &self.pin_id
    }

    pub fn pin(&self) -> &Pin {
        &self.pin
    }
}

/// PIN generated and returned to the caller instead of delivered (`sms/otp/generate`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SendInAppOtp {
    phone_number: PhoneNumber,
    pin_type: PinType,
    pin: PinOptions,
}

impl SendInAppOtp {
    pub fn new(phone_number: PhoneNumber, pin_type: PinType, pin: PinOptions) -> Self {
        Self {
            phone_number,
            pin_type,
            pin,
        }
    }

    pub fn phone_number(&self) -> PhoneNumber {
        self.phone_number
    }

    pub fn pin_type(&self) -> PinType {
        self.pin_type
    }

    pub fn pin(&self) -> &PinOptions {
        &self.pin
    }
}
