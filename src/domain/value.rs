use std::fmt;
use std::str::FromStr;

use phonenumber::country;
use serde::Serialize;
use url::Url;

use crate::domain::validation::ValidationError;

#[derive(Clone, PartialEq, Eq, Hash)]
/// Termii API key (`api_key`).
///
/// Invariant: non-empty after trimming. `Debug` output is redacted.
pub struct ApiKey(String);

impl ApiKey {
    /// Field name used by Termii (`api_key`).
    pub const FIELD: &'static str = "api_key";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
/// Phone number in international format without the leading `+`
/// (for example `2348012345678`).
///
/// Termii expects these as JSON numbers in request bodies, so the value is
/// stored as an integer.
///
/// Invariant: 7 to 15 digits, no leading zero.
pub struct PhoneNumber(u64);

impl PhoneNumber {
    /// Field name used by Termii for most endpoints (`phone_number`).
    pub const FIELD: &'static str = "phone_number";

    pub const MIN_DIGITS: usize = 7;
    pub const MAX_DIGITS: usize = 15;

    /// Create a phone number from its integer form.
    pub fn new(value: u64) -> Result<Self, ValidationError> {
        let digits = value.to_string();
        if !(Self::MIN_DIGITS..=Self::MAX_DIGITS).contains(&digits.len()) {
            return Err(ValidationError::InvalidPhoneNumber { input: digits });
        }
        Ok(Self(value))
    }

    /// Accept an already-international number such as `+234 801-234-5678`.
    ///
    /// A leading `+`, spaces and dashes are ignored; anything else must be a digit.
    pub fn parse_raw(input: impl Into<String>) -> Result<Self, ValidationError> {
        let input = input.into();
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let invalid = || ValidationError::InvalidPhoneNumber {
            input: trimmed.to_owned(),
        };

        let digits: String = trimmed
            .strip_prefix('+')
            .unwrap_or(trimmed)
            .chars()
            .filter(|c| !matches!(c, ' ' | '-'))
            .collect();

        if digits.starts_with('0')
            || !(Self::MIN_DIGITS..=Self::MAX_DIGITS).contains(&digits.len())
            || !digits.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        digits.parse::<u64>().map(Self).map_err(|_| invalid())
    }

    /// Parse a number in any common notation and normalize it through E.164.
    ///
    /// `default_region` is used when the input does not contain an explicit country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Self::parse_raw(e164).map_err(|_| ValidationError::InvalidPhoneNumber { input: raw })
    }

    /// The number as sent to Termii.
    pub fn value(self) -> u64 {
        self.0
    }
}

impl FromStr for PhoneNumber {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_raw(s)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// ISO 3166-1 alpha-2 country code (`country_code`), e.g. `NG`.
///
/// Invariant: two ASCII letters, stored uppercase.
pub struct CountryCode(String);

impl CountryCode {
    /// Field name used by Termii (`country_code`).
    pub const FIELD: &'static str = "country_code";

    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if trimmed.len() != 2 || !trimmed.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(ValidationError::InvalidCountryCode {
                input: trimmed.to_owned(),
            });
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
/// Registered sender id, sent as `from` on messages and `sender_id` on registration.
///
/// Invariant: non-empty after trimming, at most 11 characters.
pub struct SenderId(String);

impl SenderId {
    /// Field name used by the messaging endpoints (`from`).
    pub const FIELD: &'static str = "from";
    pub const MAX_LEN: usize = 11;

    /// Create a validated [`SenderId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        let len = trimmed.chars().count();
        if len > Self::MAX_LEN {
            return Err(ValidationError::TooLong {
                field: Self::FIELD,
                max: Self::MAX_LEN,
                actual: len,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated sender id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
/// SMS message text (`sms`).
///
/// Invariant: non-empty after trimming. The original value (including whitespace) is preserved.
pub struct MessageText(String);

impl MessageText {
    /// Field name used by Termii (`sms`).
    pub const FIELD: &'static str = "sms";

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
/// How many times a PIN may be attempted (`pin_attempts`).
///
/// Invariant: at least 1.
pub struct PinAttempts(u16);

impl PinAttempts {
    pub const FIELD: &'static str = "pin_attempts";
    pub const MIN: u16 = 1;

    pub fn new(value: u16) -> Result<Self, ValidationError> {
        if value < Self::MIN {
            return Err(ValidationError::OutOfRange {
                field: Self::FIELD,
                min: Self::MIN,
                max: u16::MAX,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u16 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
/// PIN validity window in minutes (`pin_time_to_live`).
///
/// Invariant: `0..=60`.
pub struct PinTimeToLive(u16);

impl PinTimeToLive {
    pub const FIELD: &'static str = "pin_time_to_live";
    pub const MIN: u16 = 0;
    pub const MAX: u16 = 60;

    pub fn new(value: u16) -> Result<Self, ValidationError> {
        if value > Self::MAX {
            return Err(ValidationError::OutOfRange {
                field: Self::FIELD,
                min: Self::MIN,
                max: Self::MAX,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u16 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
/// Number of characters in a generated PIN (`pin_length`).
///
/// Invariant: `4..=8`.
pub struct PinLength(u16);

impl PinLength {
    pub const FIELD: &'static str = "pin_length";
    pub const MIN: u16 = 4;
    pub const MAX: u16 = 8;

    pub fn new(value: u16) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::OutOfRange {
                field: Self::FIELD,
                min: Self::MIN,
                max: Self::MAX,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u16 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
/// Token in `message_text` that Termii replaces with the PIN (`pin_placeholder`),
/// e.g. `< 1234 >`.
pub struct PinPlaceholder(String);

impl PinPlaceholder {
    pub const FIELD: &'static str = "pin_placeholder";

    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
/// Id of an issued PIN (`pin_id`), returned by the OTP send endpoints.
///
/// Invariant: non-empty after trimming.
pub struct PinId(String);

impl PinId {
    pub const FIELD: &'static str = "pin_id";

    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
/// PIN entered by the end user (`pin`).
///
/// Invariant: non-empty after trimming.
pub struct Pin(String);

impl Pin {
    pub const FIELD: &'static str = "pin";

    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Publicly reachable `http`/`https` URL of a media attachment.
pub struct MediaUrl(Url);

impl MediaUrl {
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let value = value.as_ref().trim();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: "media.url" });
        }
        let url = Url::parse(value).map_err(|_| ValidationError::InvalidMediaUrl {
            input: value.to_owned(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ValidationError::InvalidMediaUrl {
                input: value.to_owned(),
            });
        }
        Ok(Self(url))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
/// Delivery route (`channel`).
pub enum Channel {
    /// Promotional/transactional route without DND bypass.
    #[default]
    Generic,
    /// Transactional route that reaches DND-registered numbers.
    Dnd,
    /// WhatsApp; the only channel that carries media.
    Whatsapp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
/// Character set of a generated PIN (`message_type` / `pin_type`).
pub enum PinType {
    #[default]
    Numeric,
    Alphanumeric,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_newtypes_trim_or_validate() {
        let key = ApiKey::new("  key ").unwrap();
        assert_eq!(key.as_str(), "key");
        assert!(ApiKey::new("  ").is_err());

        let sender = SenderId::new(" Termii ").unwrap();
        assert_eq!(sender.as_str(), "Termii");
        assert!(SenderId::new("").is_err());

        let msg = MessageText::new(" hi ").unwrap();
        assert_eq!(msg.as_str(), " hi ");
        assert!(MessageText::new("  ").is_err());

        let pin_id = PinId::new(" c8dcd048-5e7f ").unwrap();
        assert_eq!(pin_id.as_str(), "c8dcd048-5e7f");
        assert!(Pin::new(" ").is_err());
        assert!(PinPlaceholder::new("").is_err());
    }

    #[test]
    fn api_key_debug_is_redacted() {
        let key = ApiKey::new("secret").unwrap();
        assert_eq!(format!("{key:?}"), "ApiKey(***)");
    }

    #[test]
    fn sender_id_enforces_max_length() {
        assert!(SenderId::new("ABCDEFGHIJK").is_ok());
        assert!(matches!(
            SenderId::new("ABCDEFGHIJKL"),
            Err(ValidationError::TooLong { max: 11, actual: 12, .. })
        ));
    }

    #[test]
    fn phone_number_accepts_international_digits() {
        let pn = PhoneNumber::new(2348012345678).unwrap();
        assert_eq!(pn.value(), 2348012345678);
        assert_eq!(pn.to_string(), "2348012345678");

        let raw: PhoneNumber = " +234 801-234-5678 ".parse().unwrap();
        assert_eq!(raw, pn);

        assert!(PhoneNumber::new(12).is_err());
        assert!(PhoneNumber::parse_raw("08012345678").is_err());
        assert!(PhoneNumber::parse_raw("234abc45678").is_err());
        assert!(PhoneNumber::parse_raw("").is_err());
    }

    #[test]
    fn phone_number_parse_normalizes_local_format() {
        let pn = PhoneNumber::parse(Some(country::Id::NG), "0801 234 5678").unwrap();
        assert_eq!(pn.value(), 2348012345678);

        let intl = PhoneNumber::parse(None, "+2348012345678").unwrap();
        assert_eq!(intl, pn);
        assert!(PhoneNumber::parse(None, "not-a-number").is_err());
    }

    #[test]
    fn country_code_is_two_letters_uppercased() {
        assert_eq!(CountryCode::new(" ng ").unwrap().as_str(), "NG");
        assert!(CountryCode::new("NGA").is_err());
        assert!(CountryCode::new("N1").is_err());
        assert!(CountryCode::new("").is_err());
    }

    #[test]
    fn pin_ranges_are_enforced() {
        assert!(PinAttempts::new(0).is_err());
        assert!(PinAttempts::new(1).is_ok());

        assert!(PinTimeToLive::new(PinTimeToLive::MIN).is_ok());
        assert!(PinTimeToLive::new(PinTimeToLive::MAX).is_ok());
        assert!(PinTimeToLive::new(PinTimeToLive::MAX + 1).is_err());

        assert!(PinLength::new(3).is_err());
        assert!(PinLength::new(4).is_ok());
        assert!(PinLength::new(8).is_ok());
        assert!(PinLength::new(9).is_err());
    }

    #[test]
    fn media_url_requires_http_scheme() {
        let url = MediaUrl::new("https://example.com/a.png").unwrap();
        assert_eq!(url.as_str(), "https://example.com/a.png");
        assert!(MediaUrl::new("ftp://example.com/a.png").is_err());
        assert!(MediaUrl::new("not a url").is_err());
        assert!(MediaUrl::new(" ").is_err());
    }

    #[test]
    fn enums_serialize_to_wire_names() {
        assert_eq!(serde_json::to_value(Channel::default()).unwrap(), "generic");
        assert_eq!(serde_json::to_value(Channel::Dnd).unwrap(), "dnd");
        assert_eq!(serde_json::to_value(Channel::Whatsapp).unwrap(), "whatsapp");
        assert_eq!(serde_json::to_value(PinType::Numeric).unwrap(), "NUMERIC");
        assert_eq!(
            serde_json::to_value(PinType::Alphanumeric).unwrap(),
            "ALPHANUMERIC"
        );
    }

    #[test]
    fn newtypes_serialize_as_their_inner_value() {
        let pn = PhoneNumber::new(2348012345678).unwrap();
        assert_eq!(serde_json::to_value(pn).unwrap(), 2348012345678u64);
        assert_eq!(
            serde_json::to_value(SenderId::new(" Termii ").unwrap()).unwrap(),
            "Termii"
        );
        assert_eq!(
            serde_json::to_value(PinLength::new(6).unwrap()).unwrap(),
            6
        );
    }
}
