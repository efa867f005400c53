//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod status;
mod validation;
mod value;

pub use request::{
    DndQuery, Media, NumberStatusQuery, PinOptions, SendInAppOtp, SendMessage, SendOtp,
    SendVoiceCall, SendVoiceOtp, SenderIdRequest, VerifyOtp,
};
pub use status::{Classification, FALLBACK_MESSAGE, KnownStatus, classify};
pub use validation::ValidationError;
pub use value::{
    ApiKey, Channel, CountryCode, MediaUrl, MessageText, PhoneNumber, Pin, PinAttempts, PinId,
    PinLength, PinPlaceholder, PinTimeToLive, PinType, SenderId,
};
