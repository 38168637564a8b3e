use chrono::{DateTime, Utc};

/// Countdown display as `m:ss`.
#[must_use]
pub fn format_mmss(seconds: u32) -> String {
    let minutes = seconds / 60;
    let remainder = seconds % 60;
    format!("{minutes}:{remainder:02}")
}

#[must_use]
pub fn format_datetime(value: DateTime<Utc>) -> String {
    value.to_rfc3339()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_padded_seconds() {
        assert_eq!(format_mmss(0), "0:00");
        assert_eq!(format_mmss(9), "0:09");
        assert_eq!(format_mmss(61), "1:01");
        assert_eq!(format_mmss(900), "15:00");
    }
}
