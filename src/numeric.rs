use tracing::debug;

/// Parses a free-text numeric field.
///
/// Accepts a decimal integer with an optional leading sign. Surrounding
/// whitespace is not stripped. Empty, malformed or out-of-range text yields 0.
pub fn parse_or_zero(text: &str) -> i64 {
    match text.parse::<i64>() {
        Ok(v) => v,
        Err(e) => {
            if !text.is_empty() {
                debug!("Treating malformed numeric input {:?} as 0 ({})", text, e);
            }
            0
        }
    }
}
