//! Identifier helpers shared by the stores.

use uuid::Uuid;

const BOOK_CODE_PREFIX: &str = "BOOK-";

/// Opaque, globally unique record id.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Unique id carrying a readable prefix, e.g. `alert-3f2c...`.
pub fn prefixed_id(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4().simple())
}

/// Issues `BOOK-NNN` display codes from a counter that only ever grows, so a
/// code freed by a deletion is never handed out again.
#[derive(Debug, Clone)]
pub struct BookCodeSequence {
    last: u32,
}

impl BookCodeSequence {
    pub fn new() -> Self {
        Self { last: 0 }
    }

    /// Continue after the highest code already in use.
    pub fn starting_after<'a>(codes: impl IntoIterator<Item = &'a str>) -> Self {
        let last = codes.into_iter().filter_map(parse_book_code).max().unwrap_or(0);
        Self { last }
    }

    pub fn next_code(&mut self) -> String {
        self.last += 1;
        format!("{BOOK_CODE_PREFIX}{:03}", self.last)
    }
}

impl Default for BookCodeSequence {
    fn default() -> Self {
        Self::new()
    }
}

/// Numeric part of a `BOOK-NNN` code.
pub fn parse_book_code(code: &str) -> Option<u32> {
    code.strip_prefix(BOOK_CODE_PREFIX)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_zero_padded_and_continue_after_seed() {
        let mut seq = BookCodeSequence::starting_after(["BOOK-001", "BOOK-007", "junk"]);
        assert_eq!(seq.next_code(), "BOOK-008");
        assert_eq!(seq.next_code(), "BOOK-009");
    }

    #[test]
    fn wide_numbers_are_not_truncated() {
        let mut seq = BookCodeSequence::starting_after(["BOOK-999"]);
        assert_eq!(seq.next_code(), "BOOK-1000");
        assert_eq!(parse_book_code("BOOK-1000"), Some(1000));
    }

    #[test]
    fn prefixed_ids_differ() {
        assert_ne!(prefixed_id("alert"), prefixed_id("alert"));
        assert!(prefixed_id("attachment").starts_with("attachment-"));
    }
}
