//! Number formatting for tooltips.

/// Fixed-point with `decimals` places and comma-grouped thousands
/// (`1234567.891` → `1,234,567.89`).
pub fn format_grouped(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let fixed = fixed_half_up(value.abs(), decimals);
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let digits = int_part.as_bytes();
    let mut out = String::with_capacity(fixed.len() + digits.len() / 3 + 1);
    // negative zero after rounding prints unsigned
    if value < 0.0 && fixed.bytes().any(|b| (b'1'..=b'9').contains(&b)) {
        out.push('-');
    }
    for (i, &d) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(d as char);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// `{:.N}` rounds exact binary ties to even; ties here round away from zero.
fn fixed_half_up(magnitude: f64, decimals: usize) -> String {
    let scale = 10f64.powi(decimals as i32);
    let scaled = magnitude * scale;
    // only an exactly representable product can sit on a tie
    let exact = magnitude.mul_add(scale, -scaled) == 0.0;
    if !exact || scaled.fract() != 0.5 {
        return format!("{:.*}", decimals, magnitude);
    }

    let digits = format!("{:.0}", scaled.ceil());
    if decimals == 0 {
        return digits;
    }
    let digits = format!("{:0>width$}", digits, width = decimals + 1);
    let (int_part, frac_part) = digits.split_at(digits.len() - decimals);
    format!("{}.{}", int_part, frac_part)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_with_two_decimals() {
        assert_eq!(format_grouped(20.32, 2), "20.32");
        assert_eq!(format_grouped(82.5, 2), "82.50");
        assert_eq!(format_grouped(0.0, 2), "0.00");
        assert_eq!(format_grouped(1234.5, 2), "1,234.50");
        assert_eq!(format_grouped(1234567.891, 2), "1,234,567.89");
        assert_eq!(format_grouped(999.999, 2), "1,000.00");
        assert_eq!(format_grouped(100000.0, 0), "100,000");
    }

    #[test]
    fn exact_ties_round_up() {
        assert_eq!(format_grouped(0.125, 2), "0.13");
        assert_eq!(format_grouped(1234.625, 2), "1,234.63");
        assert_eq!(format_grouped(2.5, 0), "3");
        assert_eq!(format_grouped(0.5, 0), "1");
        assert_eq!(format_grouped(-0.125, 2), "-0.13");
        // 1.005 is stored just below the tie
        assert_eq!(format_grouped(1.005, 2), "1.00");
        assert_eq!(format_grouped(0.375, 2), "0.38");
    }

    #[test]
    fn signs_and_specials() {
        assert_eq!(format_grouped(-1500.25, 2), "-1,500.25");
        assert_eq!(format_grouped(-0.001, 2), "0.00");
        assert_eq!(format_grouped(f64::NAN, 2), "NaN");
    }
}
