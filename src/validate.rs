// Input validation: pure syntax checks for usernames and account
// identifiers. No I/O here, so everything is trivially unit-testable.

/// True iff `name` is a plausible in-game username: 3 to 16 characters,
/// ASCII letters, digits or underscores only.
///
/// The check is advisory: the UI warns on an invalid name but still
/// accepts it, since some servers tolerate odd names.
pub fn is_valid_display_name(name: &str) -> bool {
    (3..=16).contains(&name.len())
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// True iff `id` matches the canonical hyphenated identifier format,
/// `XXXXXXXX-XXXX-XXXX-XXXX-XXXXXXXXXXXX` with hex digits in either case.
///
/// Deliberately strict about hyphen positions: the launcher file keys
/// records by this exact shape, so braced or un-hyphenated variants are
/// rejected.
pub fn is_valid_identifier(id: &str) -> bool {
    const GROUPS: [usize; 5] = [8, 4, 4, 4, 12];

    let bytes = id.as_bytes();
    if bytes.len() != 36 {
        return false;
    }

    let mut pos = 0;
    for (i, len) in GROUPS.iter().enumerate() {
        if i > 0 {
            if bytes[pos] != b'-' {
                return false;
            }
            pos += 1;
        }
        if !bytes[pos..pos + len].iter().all(u8::is_ascii_hexdigit) {
            return false;
        }
        pos += len;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_typical_display_names() {
        assert!(is_valid_display_name("Steve"));
        assert!(is_valid_display_name("Ab_12"));
        assert!(is_valid_display_name("abc"));
        assert!(is_valid_display_name("Sixteen_chars_AB"));
    }

    #[test]
    fn rejects_display_names_outside_length_bounds() {
        assert!(!is_valid_display_name("ab"));
        assert!(!is_valid_display_name(""));
        assert!(!is_valid_display_name("seventeen_chars_x"));
    }

    #[test]
    fn rejects_display_names_with_bad_characters() {
        assert!(!is_valid_display_name("name!"));
        assert!(!is_valid_display_name("has space"));
        assert!(!is_valid_display_name("über"));
    }

    #[test]
    fn accepts_canonical_identifiers() {
        assert!(is_valid_identifier("550e8400-e29b-41d4-a716-446655440000"));
        assert!(is_valid_identifier("550E8400-E29B-41D4-A716-446655440000"));
        assert!(is_valid_identifier("00000000-0000-0000-0000-000000000000"));
    }

    #[test]
    fn rejects_malformed_identifiers() {
        // missing hyphens
        assert!(!is_valid_identifier("550e8400e29b41d4a716446655440000"));
        // hyphen in the wrong position
        assert!(!is_valid_identifier("550e840-0e29b-41d4-a716-446655440000"));
        // wrong length
        assert!(!is_valid_identifier("550e8400-e29b-41d4-a716-44665544000"));
        assert!(!is_valid_identifier("550e8400-e29b-41d4-a716-4466554400000"));
        // non-hex character
        assert!(!is_valid_identifier("550e8400-e29b-41d4-a716-44665544000g"));
        // braced form is not accepted
        assert!(!is_valid_identifier("{550e8400-e29b-41d4-a716-446655440000}"));
        assert!(!is_valid_identifier(""));
    }
}
