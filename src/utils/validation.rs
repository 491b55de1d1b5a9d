use crate::utils::error::{DecodeError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_input(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DecodeError::InvalidInputValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Input cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_shift_range(field_name: &str, shift: i32) -> Result<()> {
    if !(-25..=25).contains(&shift) {
        return Err(DecodeError::InvalidInputValue {
            field: field_name.to_string(),
            value: shift.to_string(),
            reason: "Shift must be between -25 and 25".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_input() {
        assert!(validate_non_empty_input("text", ".- -...").is_ok());
        assert!(validate_non_empty_input("text", "").is_err());
        assert!(validate_non_empty_input("text", "   \t ").is_err());
    }

    #[test]
    fn test_validate_shift_range() {
        assert!(validate_shift_range("shift", 0).is_ok());
        assert!(validate_shift_range("shift", -25).is_ok());
        assert!(validate_shift_range("shift", 25).is_ok());
        assert!(validate_shift_range("shift", 26).is_err());
        assert!(validate_shift_range("shift", -26).is_err());
    }
}
