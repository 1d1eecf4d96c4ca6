use crate::domain::model::Number;
use crate::utils::error::{AreaError, Result};

pub const MIN_DIMENSIONS: usize = 1;
pub const MAX_DIMENSIONS: usize = 2;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// One argument is a square side, two are height and width.
pub fn validate_argument_count(program: &str, dimensions: &[String]) -> Result<()> {
    let count = dimensions.len();
    if !(MIN_DIMENSIONS..=MAX_DIMENSIONS).contains(&count) {
        return Err(AreaError::InvalidArgumentCount {
            program: program.to_string(),
            count,
        });
    }
    Ok(())
}

/// Parses a side length. Integers stay integers; anything else must be a
/// finite decimal. Zero and negative values are rejected.
pub fn parse_dimension(field_name: &str, raw: &str) -> Result<Number> {
    let trimmed = raw.trim();

    let number = if let Ok(i) = trimmed.parse::<i64>() {
        Number::Integer(i)
    } else {
        match trimmed.parse::<f64>() {
            Ok(f) if f.is_finite() => Number::Float(f),
            _ => {
                return Err(AreaError::InvalidNumericInput {
                    field: field_name.to_string(),
                    value: raw.to_string(),
                })
            }
        }
    };

    validate_positive(field_name, number)?;
    Ok(number)
}

pub fn validate_positive(field_name: &str, value: Number) -> Result<()> {
    if !value.is_positive() {
        return Err(AreaError::NonPositiveDimension {
            field: field_name.to_string(),
            value: value.to_string(),
        });
    }
    Ok(())
}

/// The product of two valid sides can still overflow to infinity or
/// underflow to zero.
pub fn validate_area(area: Number) -> Result<()> {
    if !area.is_positive() || !area.as_f64().is_finite() {
        return Err(AreaError::AreaOutOfRange {
            area: area.to_string(),
        });
    }
    Ok(())
}
