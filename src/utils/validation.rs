use crate::utils::error::{MergeError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(MergeError::ConfigError {
            message: format!("{}: path cannot be empty", field_name),
        });
    }

    if path.contains('\0') {
        return Err(MergeError::ConfigError {
            message: format!("{}: path contains null bytes: {:?}", field_name, path),
        });
    }

    Ok(())
}

/// Fails with `message` unless at least `min_count` items were given.
pub fn validate_min_count(count: usize, min_count: usize, message: &str) -> Result<()> {
    if count < min_count {
        return Err(MergeError::ConfigError {
            message: message.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("files", "dict.csv").is_ok());
        assert!(validate_path("files", "").is_err());
        assert!(validate_path("files", "dict\0.csv").is_err());
    }

    #[test]
    fn test_validate_min_count() {
        assert!(validate_min_count(2, 2, "too few").is_ok());
        assert!(validate_min_count(5, 2, "too few").is_ok());

        let err = validate_min_count(1, 2, "Need at least 2 files to merge").unwrap_err();
        assert_eq!(err.user_friendly_message(), "Need at least 2 files to merge");
    }
}
