//! Shared CLI utilities.

/// Pipeline runners pass unset inputs as empty strings; treat those as absent.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Parse a task definition revision; an empty value means "not given" (0).
pub fn parse_revision(value: &str) -> Result<u32, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed
        .parse::<u32>()
        .map_err(|_| format!("invalid task definition revision '{trimmed}': expected a non-negative integer"))
}
