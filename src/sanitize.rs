//! Message text cleanup applied before anything reaches the log.

/// Maximum characters kept from a single message.
pub const LINE_CHAR_LIMIT: usize = 255;

/// Trim surrounding whitespace and trailing newlines, then cap the result at
/// [`LINE_CHAR_LIMIT`] characters.
///
/// Never fails; an all-whitespace input yields an empty string.
pub fn sanitize(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('\n').trim();

    match trimmed.char_indices().nth(LINE_CHAR_LIMIT) {
        Some((cut, _)) => trimmed[..cut].to_string(),
        None => trimmed.to_string(),
    }
}
