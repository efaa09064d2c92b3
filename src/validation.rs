//! Field rules shared by the façade and the JSON import boundary.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use crate::models::{BookInput, SpeechInput, TeacherInput, UNKNOWN};

/// Grade levels a book may be filed under.
pub const GRADES: [&str; 7] = [
    "Grade 6", "Grade 7", "Grade 8", "Grade 9", "Grade 10", "Grade 11", "Grade 12",
];

pub const BOOK_TYPES: [&str; 2] = ["book", "booklet"];

/// Titles a teacher name must open with, followed by a space.
pub const HONORIFICS: [&str; 4] = ["Mr.", "Ms.", "Mrs.", "Dr."];

const MIN_NAME_CHARS: usize = 2;

static DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date regex"));
static DOMAIN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([a-zA-Z0-9-]+\.)+[a-zA-Z]{2,}(/.*)?$").expect("valid domain regex")
});
static SCHEME_AND_WWW: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(https?://)?(www\.)?").expect("valid prefix regex"));

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Accepts absolute http(s) URLs and scheme-less links such as
/// `example.com/file.pdf`, which are tried again with `https://` in front.
pub fn is_valid_link(value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() {
        return false;
    }
    let candidate = if value.starts_with("http://") || value.starts_with("https://") {
        value.to_string()
    } else {
        format!("https://{value}")
    };
    if Url::parse(&candidate).is_ok() {
        return true;
    }
    DOMAIN_PATTERN.is_match(&SCHEME_AND_WWW.replace(value, ""))
}

/// Strict `YYYY-MM-DD` that also names a real day.
pub fn parse_iso_date(value: &str) -> Result<NaiveDate, String> {
    if !DATE_PATTERN.is_match(value) {
        return Err("date must use the YYYY-MM-DD format".to_string());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| format!("{value} is not a calendar date"))
}

pub fn check_teacher_name(name: &str) -> Result<(), String> {
    let name = name.trim();
    if name.is_empty() || HONORIFICS.contains(&name) {
        return Err("teacher name is required".to_string());
    }
    let rest = HONORIFICS
        .iter()
        .find_map(|h| name.strip_prefix(h).and_then(|r| r.strip_prefix(' ')));
    match rest {
        None => Err(format!(
            "teacher name must start with one of {} followed by a space",
            HONORIFICS.join(", ")
        )),
        Some(rest) if rest.trim().chars().count() < MIN_NAME_CHARS => Err(format!(
            "teacher name needs at least {MIN_NAME_CHARS} characters after the title"
        )),
        Some(_) => Ok(()),
    }
}

fn check_optional_link(field: &str, value: &str, errors: &mut Vec<String>) {
    if !is_blank(value) && value != UNKNOWN && !is_valid_link(value) {
        errors.push(format!("{field} is not a valid link"));
    }
}

/// Rules the book form applies: a title, and well-formed links when given.
pub fn validate_book_input(input: &BookInput) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    if is_blank(&input.title) {
        errors.push("field \"title\" is required".to_string());
    }
    check_optional_link("url", &input.url, &mut errors);
    check_optional_link("image", &input.image, &mut errors);
    into_result(errors)
}

pub fn validate_teacher_input(input: &TeacherInput) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    if let Err(e) = check_teacher_name(&input.name) {
        errors.push(e);
    }
    if is_blank(&input.subject_id) {
        errors.push("field \"subjectId\" is required".to_string());
    }
    into_result(errors)
}

pub fn validate_speech_input(input: &SpeechInput) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    if is_blank(&input.title) {
        errors.push("field \"title\" is required".to_string());
    }
    if is_blank(&input.content) {
        errors.push("field \"content\" is required".to_string());
    }
    into_result(errors)
}

fn into_result(errors: Vec<String>) -> Result<(), Vec<String>> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_with_and_without_scheme() {
        assert!(is_valid_link("https://example.com/a.pdf"));
        assert!(is_valid_link("example.com/math-12.pdf"));
        assert!(is_valid_link("www.example.com/physics.pdf"));
        assert!(!is_valid_link("https://exa mple.com"));
        assert!(!is_valid_link("   "));
    }

    #[test]
    fn dates_must_be_iso_and_real() {
        assert!(parse_iso_date("2024-01-15").is_ok());
        assert!(parse_iso_date("15/01/2024").is_err());
        assert!(parse_iso_date("2024-02-30").is_err());
    }

    #[test]
    fn teacher_names_need_honorific_and_two_chars() {
        assert!(check_teacher_name("Mr. Smith").is_ok());
        assert!(check_teacher_name("Dr. Sara Mahmoud").is_ok());
        assert!(check_teacher_name("Smith").is_err());
        assert!(check_teacher_name("Mr.Smith").is_err());
        assert!(check_teacher_name("Ms. A").is_err());
        assert!(check_teacher_name("Mr.").is_err());
    }
}
