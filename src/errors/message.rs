//! Human-readable message extraction from provider errors

const REVERT_MARKER: &str = "execution reverted";

/// Reduces a raw provider/contract error string to the part worth showing.
///
/// Takes the revert reason after `execution reverted:` when present,
/// otherwise the first non-empty line.
pub fn short_message(raw: &str) -> String {
    if let Some(idx) = raw.find(REVERT_MARKER) {
        let tail = &raw[idx + REVERT_MARKER.len()..];
        let reason = tail
            .trim_start_matches(|c: char| c == ':' || c.is_whitespace())
            .lines()
            .next()
            .unwrap_or("")
            .trim()
            .trim_matches('"');
        let reason = reason.split(", data:").next().unwrap_or(reason).trim();
        if reason.is_empty() {
            return "Execution reverted".to_string();
        }
        return reason.to_string();
    }

    raw.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("Unknown error")
        .to_string()
}
