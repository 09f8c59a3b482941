//! ISBN normalisation.
//!
//! ISBNs arrive hyphenated, spaced, or straight off a barcode. Lookups and
//! cache keys always use the normalised form: digits plus the `X` check
//! character, nothing else.

/// Length of an ISBN-10 once normalised.
pub const ISBN10_LENGTH: usize = 10;
/// Length of an ISBN-13 (EAN-13) once normalised.
pub const ISBN13_LENGTH: usize = 13;

/// Strips every character except ASCII digits and an uppercase `X`.
///
/// # Examples
///
/// ```
/// use bookshelf_catalog::isbn::normalize;
/// assert_eq!(normalize("978-0-13-468599-1"), "9780134685991");
/// assert_eq!(normalize("0-8044-2957-X"), "080442957X");
/// assert_eq!(normalize("isbn: 12 34"), "1234");
/// ```
pub fn normalize(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit() || *c == 'X').collect()
}

/// Returns `true` if the code normalises to 10 or 13 characters, with an `X`
/// allowed only as the final character.
///
/// This is the acceptance test applied to barcode detections before a scan
/// session hands a code to the lookup service. It checks shape only, not the
/// check digit: plenty of printed barcodes carry a "wrong" one.
pub fn is_valid(raw: &str) -> bool {
    let normalized = normalize(raw);
    if !matches!(normalized.len(), ISBN10_LENGTH | ISBN13_LENGTH) {
        return false;
    }
    match normalized.find('X') {
        Some(position) => position == normalized.len() - 1,
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("9780134685991", true)]
    #[case("978-0-13-468599-1", true)]
    #[case("080442957X", true)]
    #[case("0 8044 2957 X", true)]
    #[case("08044X9571", false)]
    #[case("12345", false)]
    #[case("97801346859912", false)]
    #[case("", false)]
    #[case("080442957x", false)]
    fn test_is_valid(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_valid(input), expected, "input: {input:?}");
    }

    #[test]
    fn test_normalize_keeps_uppercase_x_only() {
        assert_eq!(normalize("x-X-1"), "X1");
    }
}
