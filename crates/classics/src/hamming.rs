//! The Hamming distance between strings.

/// The number of positions at which `x` and `y` hold different characters.
///
/// # Errors
///
/// * If `x` and `y` do not have the same number of characters.
pub fn distance(x: &str, y: &str) -> Result<u32, String> {
    let x = x.chars().map(u32::from).collect::<Vec<_>>();
    let y = y.chars().map(u32::from).collect::<Vec<_>>();
    if x.len() == y.len() {
        Ok(distances::vectors::hamming::<u32, u32>(&x, &y))
    } else {
        Err(format!(
            "Strings must have equal lengths but have {} and {} characters.",
            x.len(),
            y.len()
        ))
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::distance;

    #[test_case("", "", 0 ; "empty")]
    #[test_case("karolin", "kathrin", 3 ; "words")]
    #[test_case("1011101", "1001001", 2 ; "bits")]
    #[test_case("héllo", "hello", 1 ; "unicode")]
    fn equal_lengths(x: &str, y: &str, expected: u32) -> Result<(), String> {
        assert_eq!(distance(x, y)?, expected);
        assert_eq!(distance(y, x)?, expected);
        Ok(())
    }

    #[test]
    fn unequal_lengths() {
        assert!(distance("abc", "ab").is_err());
    }
}
