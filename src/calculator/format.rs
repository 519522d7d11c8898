/// Formats a numeric result for display.
///
/// The value is rendered with its `Display` form; a textual form ending in
/// `.0` has that suffix stripped so whole reals read as plain integers.
/// Equal-valued inputs always format identically.
///
/// # Parameters
/// - `value`: The numeric result to render.
///
/// # Returns
/// The display text for the value.
///
/// # Example
/// ```
/// use confab::calculator::format_number;
///
/// assert_eq!(format_number(4.0), "4");
/// assert_eq!(format_number(4.5), "4.5");
/// assert_eq!(format_number(-0.25), "-0.25");
/// assert_eq!(format_number(-0.0), "0");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    // The two IEEE zeros compare equal, so they must render the same.
    let value = if value == 0.0 { 0.0 } else { value };

    let mut text = value.to_string();

    if let Some(stripped) = text.strip_suffix(".0") {
        let kept = stripped.len();
        text.truncate(kept);
    }

    text
}
