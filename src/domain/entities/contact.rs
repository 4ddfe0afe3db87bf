use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

// One "@" with characters on each side and a dot-separated domain.
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

#[derive(Debug, Deserialize, Validate)]
pub struct ContactForm {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(
        length(min = 1, message = "Email is required"),
        regex(path = *EMAIL_REGEX, message = "Invalid email format")
    )]
    pub email: String,

    #[validate(length(min = 1, message = "Subject is required"))]
    pub subject: String,

    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub message: String,
}
