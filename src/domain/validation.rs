use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty {
        field: &'static str,
    },
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
    InvalidPhoneNumber {
        input: String,
    },
    InvalidCountryCode {
        input: String,
    },
    InvalidMediaUrl {
        input: String,
    },
    OutOfRange {
        field: &'static str,
        min: u16,
        max: u16,
        actual: u16,
    },
    MissingPlaceholder {
        placeholder: String,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::TooLong { field, max, actual } => {
                write!(f, "{field} is too long: {actual} characters (max {max})")
            }
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
            Self::InvalidCountryCode { input } => write!(f, "invalid country code: {input}"),
            Self::InvalidMediaUrl { input } => write!(f, "invalid media url: {input}"),
            Self::OutOfRange {
                field,
                min,
                max,
                actual,
            } => {
                write!(
                    f,
                    "{field} out of range: {actual} (expected {min}..={max})"
                )
            }
            Self::MissingPlaceholder { placeholder } => {
                write!(f, "message text does not contain pin placeholder {placeholder}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::Empty { field: "api_key" };
        assert_eq!(err.to_string(), "api_key must not be empty");

        let err = ValidationError::TooLong {
            field: "from",
            max: 11,
            actual: 12,
        };
        assert_eq!(err.to_string(), "from is too long: 12 characters (max 11)");

        let err = ValidationError::InvalidPhoneNumber {
            input: "bad".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid phone number: bad");

        let err = ValidationError::OutOfRange {
            field: "pin_length",
            min: 4,
            max: 8,
            actual: 9,
        };
        assert_eq!(
            err.to_string(),
            "pin_length out of range: 9 (expected 4..=8)"
        );

        let err = ValidationError::MissingPlaceholder {
            placeholder: "< 1234 >".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "message text does not contain pin placeholder < 1234 >"
        );
    }
}
