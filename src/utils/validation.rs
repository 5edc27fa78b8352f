use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("A value is required")]
    Empty,

    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("'{0}' is not a whole number")]
    NotAWholeNumber(String),

    #[error("Value must not be negative")]
    Negative,
}

/// Returns the trimmed name, rejecting blank input.
pub fn validate_name(input: &str) -> Result<&str, InputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }
    Ok(trimmed)
}

pub fn parse_price(input: &str) -> Result<f64, InputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;

    if !value.is_finite() {
        return Err(InputError::NotANumber(trimmed.to_string()));
    }
    if value < 0.0 {
        return Err(InputError::Negative);
    }

    // -0.0 would otherwise print as "$-0"
    Ok(value.abs())
}

pub fn parse_quantity(input: &str) -> Result<u32, InputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }

    match trimmed.parse::<u32>() {
        Ok(value) => Ok(value),
        Err(_) => match trimmed.parse::<i64>() {
            Ok(value) if value < 0 => Err(InputError::Negative),
            _ => Err(InputError::NotAWholeNumber(trimmed.to_string())),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert_eq!(validate_name("  Pen "), Ok("Pen"));
        assert_eq!(validate_name("   "), Err(InputError::Empty));
        assert_eq!(validate_name(""), Err(InputError::Empty));
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("10"), Ok(10.0));
        assert_eq!(parse_price(" 0.75 "), Ok(0.75));
        assert_eq!(parse_price("0"), Ok(0.0));
        assert_eq!(parse_price("-1"), Err(InputError::Negative));
        assert_eq!(parse_price("abc"), Err(InputError::NotANumber("abc".to_string())));
        assert!(parse_price("inf").is_err());
        assert!(parse_price("NaN").is_err());
        assert_eq!(parse_price(""), Err(InputError::Empty));
    }

    #[test]
    fn test_negative_zero_price_is_zero() {
        let price = parse_price("-0").unwrap();
        assert!(price.is_sign_positive());
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("5"), Ok(5));
        assert_eq!(parse_quantity("0"), Ok(0));
        assert_eq!(parse_quantity("-2"), Err(InputError::Negative));
        assert_eq!(parse_quantity("2.5"), Err(InputError::NotAWholeNumber("2.5".to_string())));
        assert_eq!(parse_quantity("lots"), Err(InputError::NotAWholeNumber("lots".to_string())));
    }
}
