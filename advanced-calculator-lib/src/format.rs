/// Number of decimal places shown for values that are not whole numbers.
const DISPLAY_PRECISION: usize = 6;

/// Formats a value for presentation.
///
/// Whole numbers are shown without a decimal point, anything else is rounded to six
/// decimal places with trailing zeros removed. Only presentation is affected; callers
/// keep computing with the full-precision value.
///
/// # Examples
///
/// ```
/// use advanced_calculator::format::format_for_display;
///
/// assert_eq!(format_for_display(4.0), "4");
/// assert_eq!(format_for_display(1.0 / 3.0), "0.333333");
/// ```
pub fn format_for_display(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == value.trunc() {
        // Adding zero turns -0 into 0.
        return format!("{:.0}", value + 0.0);
    }

    let rounded = format!("{:.*}", DISPLAY_PRECISION, value);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" => "0".to_string(),
        _ => trimmed.to_string(),
    }
}
