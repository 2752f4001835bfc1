//! Unit formatting utilities
//!
//! Areas are kept in square meters and lengths in meters; both are shown
//! rounded to two decimals without trailing zeros ("20", "12.5", "3.14").

/// Round a value to two decimal places.
pub fn round2(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    // Avoid printing "-0"
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Format a number for display, rounded to two decimals.
pub fn format_number(value: f64) -> String {
    format!("{}", round2(value))
}

/// Format an area for display, e.g. `20m²`.
pub fn format_area(area_m2: f64) -> String {
    format!("{}m²", format_number(area_m2))
}

/// Parse the numeric part of an area text such as `20m²` or `12.5m² (Kitchen)`.
pub fn parse_area(text: &str) -> Option<f64> {
    let end = text.find("m²")?;
    text[..end].trim().parse::<f64>().ok()
}

/// Whether `value` lies within `min..=max` on a `step` lattice anchored at `min`.
pub fn is_on_step(value: f64, min: f64, max: f64, step: f64) -> bool {
    if !(min..=max).contains(&value) {
        return false;
    }
    let steps = (value - min) / step;
    (steps - steps.round()).abs() < 1e-9
}
