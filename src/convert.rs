//! Positional base conversion for big-endian digit sequences of any length.
//!
//! The number is divided by the target base one pass at a time, each pass
//! producing the next least significant output digit. This is quadratic in the
//! length of the input, which is fine for identifier-sized payloads.

/// Converts `source`, a big-endian number in `source_base`, to its big-endian
/// representation in `target_base`.
///
/// The result never has leading zero digits, so an empty or all-zero input
/// yields an empty vector. Callers that need to keep leading zeros count them
/// beforehand.
///
/// Panics if either base is below 2.
pub fn convert(source: &[u32], source_base: u32, target_base: u32) -> Vec<u32> {
    assert!(source_base >= 2 && target_base >= 2, "Invalid bases {} and {}", source_base, target_base);
    debug_assert!(source.iter().all(|&digit| digit < source_base));

    let source_base = u64::from(source_base);
    let target_base = u64::from(target_base);

    let start = source.iter().take_while(|&&digit| digit == 0).count();
    let mut number = source[start..].to_vec();
    let mut output = Vec::new();

    while !number.is_empty() {
        let mut quotient = Vec::with_capacity(number.len());
        let mut started = false;
        let mut remainder = 0u64;

        for &digit in &number {
            let accumulator = u64::from(digit) + remainder * source_base;
            let value = accumulator / target_base;
            remainder = accumulator % target_base;
            if started || value != 0 {
                started = true;
                quotient.push(value as u32);
            }
        }

        output.push(remainder as u32);
        number = quotient;
    }

    output.reverse();
    output
}

#[cfg(test)]
mod tests {
    use super::convert;

    #[test]
    fn empty() {
        assert_eq!(convert(&[], 256, 58), Vec::<u32>::new());
        assert_eq!(convert(&[0, 0, 0], 256, 58), Vec::<u32>::new());
    }

    #[test]
    fn small_bases() {
        assert_eq!(convert(&[1, 0], 10, 2), vec![1, 0, 1, 0]);
        assert_eq!(convert(&[1, 0, 1, 0], 2, 10), vec![1, 0]);
        assert_eq!(convert(&[0, 0, 5], 10, 2), vec![1, 0, 1]);
        assert_eq!(convert(&[2, 5, 5], 10, 16), vec![15, 15]);
    }

    #[test]
    fn same_base() {
        assert_eq!(convert(&[0, 7, 0, 3], 10, 10), vec![7, 0, 3]);
    }

    #[test]
    fn base_256_to_58() {
        // 0xffffffff = 4294967295
        assert_eq!(convert(&[255, 255, 255, 255], 256, 58), vec![6, 31, 30, 48, 8, 15]);
        assert_eq!(convert(&[6, 31, 30, 48, 8, 15], 58, 256), vec![255, 255, 255, 255]);
        assert_eq!(convert(&[57], 58, 256), vec![57]);
        assert_eq!(convert(&[1, 0], 58, 256), vec![58]);
        assert_eq!(convert(&[1, 0], 256, 58), vec![4, 24]);
    }

    #[test]
    fn wide_bases() {
        let digits = convert(&[1, 0, 0], 1 << 16, u32::MAX);
        assert_eq!(digits, vec![1, 1]);
    }

    #[test]
    #[should_panic(expected = "Invalid bases")]
    fn rejects_unary() {
        convert(&[0], 1, 58);
    }
}
