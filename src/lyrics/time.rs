//! Clock-value parsing and formatting.

/// Parse a clock value into integer milliseconds.
///
/// Accepts `h:m:s`, `m:s` or plain seconds; the last component may be
/// fractional. Each component is read as a leading numeric prefix, so a
/// trailing unit such as `"5.5s"` is tolerated. Empty or unreadable input
/// yields 0, and negative totals saturate to 0.
// Float-to-int casts saturate and map NaN to 0
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn parse_time(value: &str) -> u64 {
    let value = value.trim();
    if value.is_empty() {
        return 0;
    }

    let parts: Vec<f64> = value.split(':').map(leading_number).collect();
    let seconds = match parts.as_slice() {
        [h, m, s] => h * 3600.0 + m * 60.0 + s,
        [m, s] => m * 60.0 + s,
        [s] => *s,
        _ => 0.0,
    };

    (seconds * 1000.0).round() as u64
}

/// Read the longest numeric prefix of `s`, or 0 if there is none.
fn leading_number(s: &str) -> f64 {
    let s = s.trim();
    let mut end = 0;
    let mut seen_dot = false;
    for (i, c) in s.char_indices() {
        match c {
            '+' | '-' if i == 0 => {}
            '.' if !seen_dot => seen_dot = true,
            '0'..='9' => {}
            _ => break,
        }
        end = i + c.len_utf8();
    }
    s[..end].parse().unwrap_or(0.0)
}

/// Format milliseconds as `m:ss`, adding `.mmm` when not on a whole second.
pub fn format_timestamp(ms: u64) -> String {
    let minutes = ms / 60_000;
    let seconds = (ms / 1000) % 60;
    let millis = ms % 1000;
    if millis == 0 {
        format!("{minutes}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}.{millis:03}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_time_clock_forms() {
        assert_eq!(parse_time("1:02:03.5"), 3_723_500);
        assert_eq!(parse_time("2:03.25"), 123_250);
        assert_eq!(parse_time("5.5"), 5500);
        assert_eq!(parse_time("00:00:01"), 1000);
    }

    #[test]
    fn test_parse_time_empty_and_invalid() {
        assert_eq!(parse_time(""), 0);
        assert_eq!(parse_time("   "), 0);
        assert_eq!(parse_time("abc"), 0);
        assert_eq!(parse_time("1:2:3:4"), 0);
    }

    #[test]
    fn test_parse_time_tolerates_units() {
        assert_eq!(parse_time("5.5s"), 5500);
        assert_eq!(parse_time("0:01.5s"), 1500);
    }

    #[test]
    fn test_parse_time_rounds_to_nearest_millisecond() {
        assert_eq!(parse_time("1.0004"), 1000);
        assert_eq!(parse_time("1.0006"), 1001);
        assert_eq!(parse_time("0.0015"), 2);
    }

    #[test]
    fn test_parse_time_negative_saturates() {
        assert_eq!(parse_time("-3"), 0);
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(0), "0:00");
        assert_eq!(format_timestamp(65_000), "1:05");
        assert_eq!(format_timestamp(123_250), "2:03.250");
    }
}
