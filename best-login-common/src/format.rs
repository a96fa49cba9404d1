//! User-friendly copy for backend error messages

/// Shown for failures that carry no message at all
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred. Please try again.";

const INVALID_CREDENTIALS: &str = "Invalid email or password. Please try again.";

const ERROR_MESSAGES: &[(&str, &str)] = &[
    ("User not found", INVALID_CREDENTIALS),
    ("Invalid password", INVALID_CREDENTIALS),
    (
        "Network error",
        "Unable to connect to our servers. Please check your internet connection and try again.",
    ),
    (
        "Too many requests",
        "Too many login attempts. Please wait a few minutes before trying again.",
    ),
    (
        "Server error",
        "Our servers are experiencing issues. Please try again in a few minutes.",
    ),
];

/// Get the user-facing message for a raw backend error.
///
/// Known messages are rewritten, unknown ones pass through unchanged, and
/// `None` (a failure without text) falls back to a generic message.
pub fn format_api_error(raw: Option<&str>) -> String {
    match raw {
        Some(message) => ERROR_MESSAGES
            .iter()
            .find(|(key, _)| *key == message)
            .map_or(message, |(_, friendly)| *friendly)
            .to_string(),
        None => UNEXPECTED_ERROR.to_string(),
    }
}
