//! Input validation. Every rule runs; violations accumulate in order.

use std::sync::LazyLock;

use blog_shared::dto::{PostInputData, UserInputData};
use regex::Regex;

use crate::error::ValidationErrors;

/// Minimum length, in characters, of passwords, titles and contents.
pub const MIN_TEXT_LENGTH: usize = 5;

/// Top-level message of a failed registration.
pub const INVALID_USER_INPUT: &str = "invalid input.";
/// Top-level message of a failed post create/update.
pub const INVALID_POST_INPUT: &str = "Invalid input";

/// Longest accepted address, in characters.
const MAX_EMAIL_LENGTH: usize = 254;
/// Longest accepted local part, in bytes.
const MAX_LOCAL_PART_BYTES: usize = 64;
/// Longest accepted domain, in bytes.
const MAX_DOMAIN_BYTES: usize = 254;
/// Longest accepted domain label, in characters.
const MAX_LABEL_LENGTH: usize = 63;

// One dot-separated atom of the local part; non-ASCII letters allowed
static LOCAL_ATOM_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~\u{00A0}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFEF}-]+$",
    )
    .expect("local part pattern is valid")
});

static DOMAIN_LABEL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9\u{00A1}-\u{FFFF}-]+$").expect("domain label pattern is valid")
});

// Alphabetic TLD of two or more letters, or a punycode `xn--` label
static TLD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:[A-Za-z\u{00A1}-\u{00A8}\u{00AA}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFEF}]{2,}|xn[A-Za-z0-9-]{2,})$",
    )
    .expect("tld pattern is valid")
});

pub fn is_email(value: &str) -> bool {
    if value.chars().count() > MAX_EMAIL_LENGTH {
        return false;
    }

    let Some((local, domain)) = value.rsplit_once('@') else {
        return false;
    };

    is_local_part(local) && is_domain(domain)
}

fn is_local_part(local: &str) -> bool {
    !local.is_empty()
        && local.len() <= MAX_LOCAL_PART_BYTES
        && local.split('.').all(|atom| LOCAL_ATOM_REGEX.is_match(atom))
}

fn is_domain(domain: &str) -> bool {
    if domain.is_empty() || domain.len() > MAX_DOMAIN_BYTES {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    let Some((tld, _)) = labels.split_last() else {
        return false;
    };
    if labels.len() < 2 || !TLD_REGEX.is_match(tld) {
        return false;
    }

    labels.iter().all(|label| {
        label.chars().count() <= MAX_LABEL_LENGTH
            && !label.starts_with('-')
            && !label.ends_with('-')
            && DOMAIN_LABEL_REGEX.is_match(label)
    })
}

fn has_min_length(value: &str) -> bool {
    !value.is_empty() && value.chars().count() >= MIN_TEXT_LENGTH
}

pub fn validate_user_input(input: &UserInputData) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if !is_email(&input.email) {
        errors.push("Email is invalid");
    }
    if !has_min_length(&input.password) {
        errors.push("Password too short");
    }

    errors
}

pub fn validate_post_input(input: &PostInputData) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if !has_min_length(&input.title) {
        errors.push("Title is required");
    }
    if !has_min_length(&input.content) {
        errors.push("Content is required");
    }

    errors
}
