//! HTTP status classification for Termii responses.

/// Message used for any status that is not in the table, and for requests
/// that never received a response.
pub const FALLBACK_MESSAGE: &str =
    "Server Errors: Something went wrong on Termii's end OR status was not returned";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// HTTP status codes Termii documents for its API.
///
/// Only [`KnownStatus::Ok`] counts as success; every other variant is a
/// recognized failure with a fixed explanation.
pub enum KnownStatus {
    Ok,
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    MethodNotAllowed,
    UnprocessableEntity,
    TooManyRequests,
}

impl KnownStatus {
    /// Convert a raw HTTP status code into a known variant.
    pub fn from_code(code: u16) -> Option<Self> {
        Some(match code {
            200 => Self::Ok,
            400 => Self::BadRequest,
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            405 => Self::MethodNotAllowed,
            422 => Self::UnprocessableEntity,
            429 => Self::TooManyRequests,
            _ => return None,
        })
    }

    /// The HTTP status code for this variant.
    pub fn code(self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::BadRequest => 400,
            Self::Unauthorized => 401,
            Self::Forbidden => 403,
            Self::NotFound => 404,
            Self::MethodNotAllowed => 405,
            Self::UnprocessableEntity => 422,
            Self::TooManyRequests => 429,
        }
    }

    /// Human-readable explanation of this status.
    pub fn message(self) -> &'static str {
        match self {
            Self::Ok => "OK: Request was successful.",
            Self::BadRequest => {
                "Bad Request: Indicates that the server cannot process the request due to a client error."
            }
            Self::Unauthorized => "Unauthorized: No valid API key provided.",
            Self::Forbidden => {
                "Forbidden: The API key doesn't have permissions to perform the request."
            }
            Self::NotFound => "Not Found: The requested resource doesn't exist.",
            Self::MethodNotAllowed => "Method Not Allowed: The selected HTTP method is not allowed.",
            Self::UnprocessableEntity => {
                "Unprocessable Entity: Server understands the content but couldn't process the request."
            }
            Self::TooManyRequests => {
                "Too Many Requests: User has sent too many requests in a given amount of time."
            }
        }
    }

    pub fn is_success(self) -> bool {
        self == Self::Ok
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Outcome of classifying an HTTP status.
pub struct Classification {
    pub success: bool,
    pub message: &'static str,
}

impl Classification {
    const FALLBACK: Self = Self {
        success: false,
        message: FALLBACK_MESSAGE,
    };
}

/// Classify an HTTP status code.
///
/// `None` stands for "no response received" and is treated like any status
/// missing from the table.
pub fn classify(status: Option<u16>) -> Classification {
    match status.and_then(KnownStatus::from_code) {
        Some(known) => Classification {
            success: known.is_success(),
            message: known.message(),
        },
        None => Classification::FALLBACK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FAILURES: [(u16, &str); 7] = [
        (
            400,
            "Bad Request: Indicates that the server cannot process the request due to a client error.",
        ),
        (401, "Unauthorized: No valid API key provided."),
        (
            403,
            "Forbidden: The API key doesn't have permissions to perform the request.",
        ),
        (404, "Not Found: The requested resource doesn't exist."),
        (
            405,
            "Method Not Allowed: The selected HTTP method is not allowed.",
        ),
        (
            422,
            "Unprocessable Entity: Server understands the content but couldn't process the request.",
        ),
        (
            429,
            "Too Many Requests: User has sent too many requests in a given amount of time.",
        ),
    ];

    #[test]
    fn tabulated_failures_map_to_fixed_messages() {
        for (code, message) in FAILURES {
            assert_eq!(
                classify(Some(code)),
                Classification {
                    success: false,
                    message
                },
                "code {code}"
            );
        }
    }

    #[test]
    fn only_200_is_success() {
        assert_eq!(
            classify(Some(200)),
            Classification {
                success: true,
                message: "OK: Request was successful."
            }
        );
        assert!(!classify(Some(201)).success);
        assert!(!classify(Some(204)).success);
    }

    #[test]
    fn unknown_codes_and_missing_status_use_fallback() {
        for code in [201, 302, 418, 500, 503] {
            let classification = classify(Some(code));
            assert!(!classification.success);
            assert_eq!(classification.message, FALLBACK_MESSAGE);
        }
        assert_eq!(classify(None), classify(Some(500)));
        assert!(FALLBACK_MESSAGE.starts_with("Server Errors"));
    }

    #[test]
    fn known_status_round_trips_its_code() {
        for code in [200, 400, 401, 403, 404, 405, 422, 429] {
            let known = KnownStatus::from_code(code).unwrap();
            assert_eq!(known.code(), code);
        }
        assert_eq!(KnownStatus::from_code(500), None);
    }
}
