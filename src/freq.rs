//! Frequency parsing and display helpers.

/// Parse a frequency argument into Hz.
///
/// Accepts a plain integer in Hz (`433920000`) or a decimal value with a
/// `k`, `M`, or `G` suffix (`97.3M`, `433.92M`, `7040k`). Returns `None`
/// for anything else, including values that do not fit in a `u32`.
pub fn parse_hz(s: &str) -> Option<u32> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    let (value, multiplier) = match s.chars().last() {
        Some('k') | Some('K') => (&s[..s.len() - 1], 1e3),
        Some('M') | Some('m') => (&s[..s.len() - 1], 1e6),
        Some('G') | Some('g') => (&s[..s.len() - 1], 1e9),
        _ => return s.parse::<u32>().ok(),
    };

    let value: f64 = value.parse().ok()?;
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    let hz = value * multiplier;
    if hz > u32::MAX as f64 {
        return None;
    }
    Some(hz.round() as u32)
}

/// Format a frequency in Hz as MHz for display, e.g. `433.92 MHz`.
pub fn format_mhz(hz: u32) -> String {
    format!("{:.2} MHz", hz as f64 / 1_000_000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_hz() {
        assert_eq!(parse_hz("433920000"), Some(433_920_000));
        assert_eq!(parse_hz(" 144800000 "), Some(144_800_000));
    }

    #[test]
    fn test_parse_suffixes() {
        assert_eq!(parse_hz("97.3M"), Some(97_300_000));
        assert_eq!(parse_hz("433.92M"), Some(433_920_000));
        assert_eq!(parse_hz("7040k"), Some(7_040_000));
        assert_eq!(parse_hz("1.7G"), Some(1_700_000_000));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_hz(""), None);
        assert_eq!(parse_hz("MHz"), None);
        assert_eq!(parse_hz("-97.3M"), None);
        assert_eq!(parse_hz("97.3X"), None);
        // 5 GHz overflows u32
        assert_eq!(parse_hz("5G"), None);
    }

    #[test]
    fn test_format_mhz() {
        assert_eq!(format_mhz(433_920_000), "433.92 MHz");
        assert_eq!(format_mhz(144_800_000), "144.80 MHz");
    }
}
