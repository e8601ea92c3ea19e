/// Parse a percentage string like "98%" into its integer value.
///
/// Leading/trailing percent signs and whitespace are stripped; anything
/// that still fails to parse yields `None` rather than an error, so a
/// malformed seed value degrades to an absent column instead of aborting
/// ingestion.
pub fn parse_percent(raw: &str) -> Option<i64> {
    let trimmed = raw.trim().trim_matches('%');
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}
