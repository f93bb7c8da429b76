use crate::error::{Error, Result};

/// Require a non-empty field value, returning it owned.
pub fn require(value: &str, field: &'static str) -> Result<String> {
    if value.is_empty() {
        return Err(Error::validation(format!("{field} is required")));
    }
    Ok(value.to_string())
}

/// Treat an empty optional field as absent.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_rejects_empty() {
        assert!(matches!(require("", "title"), Err(Error::Validation(_))));
        assert_eq!(require("hello", "title").unwrap(), "hello");
    }

    #[test]
    fn non_empty_filters_blank_strings() {
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(Some("x".into())), Some("x".into()));
        assert_eq!(non_empty(None), None);
    }
}
