//! Validation of the login and sign-up forms.

use lazy_static::lazy_static;
use regex::Regex;

use super::auth_model::{LoginData, RegisterData, RegisterPayload};
use crate::errors::FieldErrors;
use crate::utils::strip_non_digits;

const MIN_USERNAME_LEN: usize = 3;
const MAX_USERNAME_LEN: usize = 20;
const MIN_PASSWORD_LEN: usize = 6;

lazy_static! {
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}$")
            .expect("Invalid regex pattern");

    /// Area code without zeros, then the mobile prefix 9 and eight digits.
    static ref MOBILE_PHONE_REGEX: Regex =
        Regex::new(r"^[1-9]{2}9[0-9]{8}$").expect("Invalid regex pattern");
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Whether `phone` is a Brazilian mobile number.
///
/// Formatting characters are ignored and the `55` country code is optional:
/// `(11) 98765-4321` and `+55 11 98765-4321` are both valid.
pub fn is_valid_mobile_phone(phone: &str) -> bool {
    let digits = strip_non_digits(phone);
    let national = match digits.len() {
        13 => digits.strip_prefix("55").unwrap_or(&digits),
        _ => digits.as_str(),
    };
    MOBILE_PHONE_REGEX.is_match(national)
}

pub fn validate_login(data: &LoginData) -> std::result::Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    if !is_valid_email(&data.email) {
        errors.add("email", "Invalid email");
    }
    if data.password.is_empty() {
        errors.add("password", "Password is required");
    }
    errors.into_result()
}

/// Runs every sign-up rule and builds the request body.
pub fn validate_register(data: &RegisterData) -> std::result::Result<RegisterPayload, FieldErrors> {
    let mut errors = FieldErrors::new();

    if data.first_name.is_empty() {
        errors.add("firstName", "First name is required");
    }
    if data.last_name.is_empty() {
        errors.add("lastName", "Last name is required");
    }

    let username_len = data.username.chars().count();
    if username_len < MIN_USERNAME_LEN {
        errors.add("username", "Username must be at least 3 characters");
    } else if username_len > MAX_USERNAME_LEN {
        errors.add("username", "Username is too long");
    }

    if !is_valid_email(&data.email) {
        errors.add("email", "Invalid email");
    }

    if data.password.chars().count() < MIN_PASSWORD_LEN {
        errors.add("password", "Password must be at least 6 characters");
    }
    if data.confirm_password.chars().count() < MIN_PASSWORD_LEN {
        errors.add("confirmPassword", "Confirm your password");
    }
    if data.password != data.confirm_password {
        errors.add("confirmPassword", "Passwords do not match");
    }

    if data.phone.is_empty() {
        errors.add("phone", "Phone is required");
    } else if !is_valid_mobile_phone(&data.phone) {
        errors.add("phone", "Invalid phone number");
    }

    errors.into_result()?;
    Ok(RegisterPayload::from(data.clone()))
}
