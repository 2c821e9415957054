/// Split a sanitized query into lowercase terms.
///
/// Order and duplicates are preserved: a term repeated in the query counts
/// again for every record it matches.
pub fn tokenize(sanitized: &str) -> Vec<String> {
    sanitized
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
