//! Login form validation
//!
//! Each field is checked independently and only its first failing rule is
//! reported, so one pass yields at most one message per field.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::auth::LoginRequest;

pub const EMAIL_BLANK: &str = "Email can't be blank";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const PASSWORD_BLANK: &str = "Password can't be blank";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 4 characters";

/// Minimum password length, in characters
pub const PASSWORD_MIN_LENGTH: usize = 4;

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

/// Form fields that can carry a validation message
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Email,
    Password,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Password => "password",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Field values as read from the form, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawLoginForm {
    pub email: Option<String>,
    pub password: Option<String>,
    pub remember: Option<bool>,
}

impl RawLoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            password: Some(password.into()),
            remember: None,
        }
    }
}

/// Validation messages keyed by field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, *message))
    }

    fn insert(&mut self, field: Field, message: &'static str) {
        self.0.entry(field).or_insert(message);
    }
}

/// Check whether `email` has the shape of an address
pub fn is_valid_email(email: &str) -> bool {
    !email.starts_with('.') && !email.contains("..") && EMAIL_SHAPE.is_match(email)
}

fn check_email(email: &str) -> Option<&'static str> {
    if email.is_empty() {
        Some(EMAIL_BLANK)
    } else if !is_valid_email(email) {
        Some(EMAIL_INVALID)
    } else {
        None
    }
}

// Length is counted in UTF-16 units, like the input's `minlength`
fn check_password(password: &str) -> Option<&'static str> {
    if password.is_empty() {
        Some(PASSWORD_BLANK)
    } else if password.encode_utf16().count() < PASSWORD_MIN_LENGTH {
        Some(PASSWORD_TOO_SHORT)
    } else {
        None
    }
}

/// Validate raw form fields into a login request
pub fn validate(raw: &RawLoginForm) -> Result<LoginRequest, FieldErrors> {
    let email = raw.email.as_deref().unwrap_or_default();
    let password = raw.password.as_deref().unwrap_or_default();

    let mut errors = FieldErrors::default();
    if let Some(message) = check_email(email) {
        errors.insert(Field::Email, message);
    }
    if let Some(message) = check_password(password) {
        errors.insert(Field::Password, message);
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
        remember: raw.remember.unwrap_or(false),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_form() {
        let raw = RawLoginForm {
            remember: Some(true),
            ..RawLoginForm::new("test@example.com", "1234")
        };

        let request = validate(&raw).unwrap();
        assert_eq!(request.email, "test@example.com");
        assert_eq!(request.password, "1234");
        assert!(request.remember);
    }

    #[test]
    fn test_remember_defaults_to_false() {
        let request = validate(&RawLoginForm::new("test@example.com", "1234")).unwrap();
        assert!(!request.remember);
    }

    #[test]
    fn test_blank_fields() {
        let errors = validate(&RawLoginForm::default()).unwrap_err();

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(Field::Email), Some(EMAIL_BLANK));
        assert_eq!(errors.get(Field::Password), Some(PASSWORD_BLANK));
    }

    #[test]
    fn test_invalid_email_only() {
        let errors = validate(&RawLoginForm::new("not-an-email", "1234")).unwrap_err();

        assert_eq!(errors.get(Field::Email), Some(EMAIL_INVALID));
        assert_eq!(errors.get(Field::Password), None);
    }

    #[test]
    fn test_short_password_only() {
        let errors = validate(&RawLoginForm::new("test@example.com", "ab")).unwrap_err();

        assert_eq!(errors.get(Field::Email), None);
        assert_eq!(errors.get(Field::Password), Some(PASSWORD_TOO_SHORT));
    }

    #[test]
    fn test_password_length_counts_utf16_units() {
        assert!(validate(&RawLoginForm::new("test@example.com", "äöüß")).is_ok());
        assert!(validate(&RawLoginForm::new("test@example.com", "äöü")).is_err());

        // Each emoji is a surrogate pair, as in the browser
        assert!(validate(&RawLoginForm::new("test@example.com", "😀😀")).is_ok());
        let errors = validate(&RawLoginForm::new("test@example.com", "😀")).unwrap_err();
        assert_eq!(errors.get(Field::Password), Some(PASSWORD_TOO_SHORT));
    }

    #[test]
    fn test_email_shapes() {
        for good in [
            "test@example.com",
            "first.last+tag@mail.example.org",
            "o'brien@example.ie",
            "user_1@sub-domain.example.co",
        ] {
            assert!(is_valid_email(good), "{good} should be accepted");
        }

        for bad in [
            "not-an-email",
            "@example.com",
            "user@",
            "user@example",
            "user@example.c",
            ".user@example.com",
            "user..name@example.com",
            "user.@example.com",
            "user@-example.com",
            "user name@example.com",
        ] {
            assert!(!is_valid_email(bad), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_iter_is_ordered_by_field() {
        let errors = validate(&RawLoginForm::new("", "")).unwrap_err();
        let fields: Vec<Field> = errors.iter().map(|(field, _)| field).collect();
        assert_eq!(fields, vec![Field::Email, Field::Password]);
    }
}
