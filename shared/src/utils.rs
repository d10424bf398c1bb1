use ulid::Ulid;

pub fn generate_ulid() -> String {
    Ulid::new().to_string()
}

/// Treats a missing, empty or whitespace-only query value as "not supplied".
///
/// Surrounding whitespace is trimmed from values that are kept.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_ulid_is_unique() {
        assert_ne!(generate_ulid(), generate_ulid());
    }

    #[test]
    fn test_non_blank_keeps_trimmed_value() {
        assert_eq!(
            non_blank(Some("  Engineering ".to_string())),
            Some("Engineering".to_string())
        );
    }

    #[test]
    fn test_non_blank_drops_empty_and_whitespace() {
        assert_eq!(non_blank(Some(String::new())), None);
        assert_eq!(non_blank(Some("   ".to_string())), None);
        assert_eq!(non_blank(None), None);
    }
}
