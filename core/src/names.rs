/// Turns the trailing field of an input line into a display name.
///
/// Everything from the first `#` onward is a comment. When nothing is left
/// after trimming, the `fallback` (usually the short vendor code) is used.
pub fn display_name(raw: &str, fallback: &str) -> String {
    let name: &str = match raw.split_once('#') {
        Some((before, _)) => before,
        None => raw,
    }
    .trim();

    if name.is_empty() {
        fallback.trim().to_string()
    } else {
        name.to_string()
    }
}
