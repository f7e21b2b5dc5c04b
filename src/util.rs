/// Round to a fixed number of decimal places.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10_f64.powi(places);
    (value * factor).round() / factor
}

/// `part / total` as a percentage with two decimals. Zero total yields 0.
pub fn percentage(part: usize, total: usize) -> f64 {
    match total {
        positive if positive > 0 => round_to(part as f64 / total as f64 * 100.0, 2),
        _ => 0.0,
    }
}

/// Pad to at least two digits with a leading zero.
pub fn pad_two(n: u32) -> String {
    format!("{n:02}")
}
