//! Display formatting shared by the calculator and the timer.

/// Format a millisecond count as `MM:SS`.
///
/// Sub-second remainders are truncated. Minutes are zero-padded to two
/// digits and grow wider past 99 instead of wrapping.
pub fn format_mm_ss(ms: u64) -> String {
    let total_secs = ms / 1000;
    let minutes = total_secs / 60;
    let seconds = total_secs % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// Render a number the way a browser's `Number.prototype.toString` does.
///
/// Shortest round-trip digits, `-0` shown as `0`, exponent notation with an
/// explicit sign for magnitudes `>= 1e21` or `< 1e-6`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".into();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.into();
    }
    if value == 0.0 {
        return "0".into();
    }

    let abs = value.abs();
    if abs >= 1e21 || abs < 1e-6 {
        let formatted = format!("{value:e}");
        return match formatted.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => formatted,
        };
    }
    format!("{value}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mm_ss_pads_and_truncates() {
        assert_eq!(format_mm_ss(0), "00:00");
        assert_eq!(format_mm_ss(999), "00:00");
        assert_eq!(format_mm_ss(5_000), "00:05");
        assert_eq!(format_mm_ss(61_500), "01:01");
        assert_eq!(format_mm_ss(59 * 60_000 + 59_999), "59:59");
    }

    #[test]
    fn mm_ss_minutes_grow_past_two_digits() {
        assert_eq!(format_mm_ss(100 * 60_000), "100:00");
        assert_eq!(format_mm_ss(125 * 60_000 + 7_000), "125:07");
    }

    #[test]
    fn number_integers_have_no_fraction() {
        assert_eq!(format_number(14.0), "14");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn number_fractions_use_shortest_digits() {
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(0.000001), "0.000001");
    }

    #[test]
    fn number_extremes_use_exponent() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e22), "1.5e+22");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(-2.5e-8), "-2.5e-8");
        assert_eq!(format_number(1e20), "100000000000000000000");
    }
}
