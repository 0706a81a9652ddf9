//! Quantities typed by hand.

use crate::error::CommerceError;

/// Parse a typed quantity.
///
/// Accepts a non-negative whole number (0 means "remove"). Negative,
/// fractional and non-numeric input is rejected rather than clamped.
pub fn parse_quantity(input: &str) -> Result<u32, CommerceError> {
    let trimmed = input.trim();
    if trimmed.starts_with('+') {
        return Err(CommerceError::InvalidQuantity(input.to_string()));
    }
    trimmed
        .parse::<u32>()
        .map_err(|_| CommerceError::InvalidQuantity(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_whole_numbers() {
        assert_eq!(parse_quantity("4"), Ok(4));
        assert_eq!(parse_quantity(" 0 "), Ok(0));
    }

    #[test]
    fn test_rejects_negative_and_fractional() {
        for input in ["-1", "1.5", "", "two", "+3"] {
            assert_eq!(
                parse_quantity(input),
                Err(CommerceError::InvalidQuantity(input.to_string())),
                "input {:?}",
                input
            );
        }
    }
}
