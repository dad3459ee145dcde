/// Parse a boolean value from a raw string, accepting common env-style forms.
///
/// Accepted truthy values (case-insensitive): `"1"`, `"true"`, `"yes"`, `"on"`.
/// Accepted falsy values: `"0"`, `"false"`, `"no"`, `"off"`.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Parse a duration such as `"3s"`, `"550ms"` or a bare number of
/// milliseconds.
pub fn parse_duration_ms(raw: &str) -> Option<u64> {
    let trimmed = raw.trim();
    if let Ok(ms) = trimmed.parse::<u64>() {
        return Some(ms);
    }
    humantime::parse_duration(trimmed)
        .ok()
        .and_then(|d| u64::try_from(d.as_millis()).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_forms() {
        assert_eq!(parse_bool("YES"), Some(true));
        assert_eq!(parse_bool(" off "), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn duration_forms() {
        assert_eq!(parse_duration_ms("3s"), Some(3_000));
        assert_eq!(parse_duration_ms("550ms"), Some(550));
        assert_eq!(parse_duration_ms("1200"), Some(1_200));
        assert_eq!(parse_duration_ms("soon"), None);
    }
}
