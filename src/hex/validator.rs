// ============================================================================
// Hex Validator
// Grammar check for hex fixed-point tokens
// ============================================================================

/// Check that `text` is a well-formed hex fixed-point token.
///
/// Grammar: an optional leading `-`, then one or more characters drawn from
/// the hex digits (either case) and at most one `.`. Field widths are not
/// checked here; `"88888888888888889"` passes and is rejected later by the
/// parser.
///
/// # Examples
/// ```
/// use hexfixed::hex::hex_is_valid;
///
/// assert!(hex_is_valid("-.f6a5865"));
/// assert!(hex_is_valid("."));
/// assert!(!hex_is_valid("--f6a5865"));
/// assert!(!hex_is_valid("-"));
/// assert!(!hex_is_valid(""));
/// ```
pub fn hex_is_valid(text: &str) -> bool {
    let body = text.strip_prefix('-').unwrap_or(text);
    if body.is_empty() {
        return false;
    }

    let mut seen_dot = false;
    for b in body.bytes() {
        match b {
            b'.' if seen_dot => return false,
            b'.' => seen_dot = true,
            b if b.is_ascii_hexdigit() => {}
            _ => return false,
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::{quickcheck, TestResult};

    #[test]
    fn test_accepts_well_formed_tokens() {
        for token in [
            "0",
            "f6a5865.00f2",
            "F6A5865.00F2",
            "-f6a5865.00f2",
            "-.f6a5865",
            ".f6a5865",
            "f6a5865.",
            ".",
            "-.",
            "1.",
            "0.0",
            "ffffffffffffffff.ffffffffffffffff",
        ] {
            assert!(hex_is_valid(token), "{token:?} should be valid");
        }
    }

    #[test]
    fn test_width_is_not_checked() {
        assert!(hex_is_valid("88888888888888889.6666666666666666"));
        assert!(hex_is_valid("6666666666666666.88888888888888889"));
        assert!(hex_is_valid("-6666666666666666.8888888888888888"));
        assert!(hex_is_valid("88888888888888889"));
        assert!(hex_is_valid("7.88888888888888889"));
    }

    #[test]
    fn test_rejects_malformed_tokens() {
        for token in [
            "",
            "-",
            "--f6a5865",
            "-f-6a5865",
            "-7--8",
            "f!6a5865",
            "f.6.a5865",
            "9.0.3",
            "1.3?f",
            "csf_is_fun",
            "123xabc.4",
            "7.0?4",
            "0x1f",
            "+1",
            " 1",
            "1 ",
            "1-",
        ] {
            assert!(!hex_is_valid(token), "{token:?} should be invalid");
        }
    }

    #[test]
    fn test_non_ascii_is_rejected() {
        assert!(!hex_is_valid("１"));
        assert!(!hex_is_valid("a.é"));
    }

    #[test]
    fn prop_more_than_one_dot_is_invalid() {
        fn prop(left: String, right: String) -> bool {
            !hex_is_valid(&format!("{left}.{right}.")) && !hex_is_valid(&format!(".{left}.{right}"))
        }
        quickcheck(prop as fn(String, String) -> bool);
    }

    #[test]
    fn prop_hex_digits_only_is_valid() {
        fn prop(digits: Vec<u8>, negative: bool) -> TestResult {
            if digits.is_empty() {
                return TestResult::discard();
            }
            let body: String = digits
                .iter()
                .map(|d| char::from_digit(u32::from(d % 16), 16).unwrap_or('0'))
                .collect();
            let token = if negative { format!("-{body}") } else { body };
            TestResult::from_bool(hex_is_valid(&token))
        }
        quickcheck(prop as fn(Vec<u8>, bool) -> TestResult);
    }
}
