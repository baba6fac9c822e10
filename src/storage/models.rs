// Persisted playback model

/// Playback state as last written by any page of the site
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoredPlayback {
    pub playing: bool,
    pub time: f64, // Seconds
    pub song: Option<String>,
}

/// Only the exact string `"true"` counts as set.
pub fn parse_flag(value: Option<&str>) -> bool {
    value == Some("true")
}

pub fn format_flag(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Read a stored position, treating anything unusable as the start of the track.
pub fn parse_seconds(value: Option<&str>) -> f64 {
    value
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|secs| secs.is_finite() && *secs >= 0.0)
        .unwrap_or(0.0)
}

pub fn format_seconds(secs: f64) -> String {
    // Keep "-0" out of storage
    if secs == 0.0 {
        return "0".to_string();
    }
    secs.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag(Some("true")));
        assert!(!parse_flag(Some("false")));
        assert!(!parse_flag(Some("TRUE")));
        assert!(!parse_flag(Some("1")));
        assert!(!parse_flag(None));
    }

    #[test]
    fn test_parse_seconds() {
        assert_eq!(parse_seconds(Some("42.5")), 42.5);
        assert_eq!(parse_seconds(Some(" 7 ")), 7.0);
        assert_eq!(parse_seconds(Some("0")), 0.0);
        assert_eq!(parse_seconds(Some("")), 0.0);
        assert_eq!(parse_seconds(Some("abc")), 0.0);
        assert_eq!(parse_seconds(Some("NaN")), 0.0);
        assert_eq!(parse_seconds(Some("inf")), 0.0);
        assert_eq!(parse_seconds(Some("-3")), 0.0);
        assert_eq!(parse_seconds(None), 0.0);
    }

    #[test]
    fn test_format_seconds() {
        assert_eq!(format_seconds(42.5), "42.5");
        assert_eq!(format_seconds(0.0), "0");
        assert_eq!(format_seconds(-0.0), "0");
        assert_eq!(format_seconds(120.0), "120");
        assert_eq!(parse_seconds(Some(&format_seconds(3.25))), 3.25);
    }
}
