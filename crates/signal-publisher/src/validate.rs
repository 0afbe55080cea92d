//! Content Validation

use std::fmt;

/// Platform character limit
pub const MAX_POST_CHARS: usize = 280;

/// Why a post was refused before submission
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentRejection {
    /// Character count over [`MAX_POST_CHARS`]
    TooLong(usize),
    Empty,
}

impl fmt::Display for ContentRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentRejection::TooLong(len) => write!(f, "Content too long ({} characters)", len),
            ContentRejection::Empty => write!(f, "Content cannot be empty"),
        }
    }
}

/// Check a post against the platform limits. Length is counted in Unicode
/// scalar values; the length check runs before the emptiness check.
pub fn validate_content(content: &str) -> std::result::Result<(), ContentRejection> {
    let len = content.chars().count();
    if len > MAX_POST_CHARS {
        return Err(ContentRejection::TooLong(len));
    }
    if content.trim().is_empty() {
        return Err(ContentRejection::Empty);
    }
    Ok(())
}
