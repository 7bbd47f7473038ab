/// Format a duration in seconds as `minutes:seconds`.
///
/// Both parts truncate toward zero and neither is zero-padded, so `65.0`
/// renders as `1:5`. Minutes wrap at the hour: `3600.0` renders as `0:0`.
pub(crate) fn format_time(seconds: f64) -> String {
    let minutes = (seconds / 60.0) as i64 % 60;
    let remainder = seconds as i64 % 60;
    format!("{minutes}:{remainder}")
}

#[cfg(test)]
mod tests {
    use super::format_time;

    #[test]
    fn format_time_no_padding() {
        assert_eq!(format_time(65.0), "1:5");
        assert_eq!(format_time(5.0), "0:5");
        assert_eq!(format_time(600.0), "10:0");
    }

    #[test]
    fn format_time_zero() {
        assert_eq!(format_time(0.0), "0:0");
    }

    #[test]
    fn format_time_minutes_wrap_at_hour() {
        assert_eq!(format_time(3600.0), "0:0");
        assert_eq!(format_time(3665.0), "1:5");
    }

    #[test]
    fn format_time_truncates_fractions() {
        assert_eq!(format_time(59.9), "0:59");
        assert_eq!(format_time(125.5), "2:5");
        assert_eq!(format_time(92.999), "1:32");
    }

    #[test]
    fn format_time_non_finite_saturates() {
        assert_eq!(format_time(f64::NAN), "0:0");
    }
}
