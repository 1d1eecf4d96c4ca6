use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Mul;

/// 命令列輸入的數值：整數或浮點數
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Integer(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    pub fn is_positive(self) -> bool {
        match self {
            Number::Integer(i) => i > 0,
            Number::Float(f) => f > 0.0,
        }
    }
}

impl Mul for Number {
    type Output = Number;

    fn mul(self, rhs: Number) -> Number {
        match (self, rhs) {
            (Number::Integer(a), Number::Integer(b)) => match a.checked_mul(b) {
                Some(product) => Number::Integer(product),
                // 溢位時改用浮點數
                None => Number::Float(a as f64 * b as f64),
            },
            (a, b) => Number::Float(a.as_f64() * b.as_f64()),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            // 極大或極小的值改用科學記號
            Number::Float(x) if *x != 0.0 && !(1e-4..1e16).contains(&x.abs()) => {
                write!(f, "{:e}", x)
            }
            Number::Float(x) if x.fract() == 0.0 => write!(f, "{:.1}", x),
            Number::Float(x) => write!(f, "{}", x),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub height: Number,
    pub width: Number,
}

impl Rectangle {
    pub fn new(height: Number, width: Number) -> Self {
        Self { height, width }
    }

    pub fn square(side: Number) -> Self {
        Self::new(side, side)
    }
}

/// One invocation's result, as printed to the user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaReport {
    pub height: Number,
    pub width: Number,
    pub area: Number,
}

impl AreaReport {
    pub fn sentence(&self) -> String {
        format!(
            "The area of a {} X {} rectangle is {}",
            self.height, self.width, self.area
        )
    }
}

/// 輸出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_multiplication_stays_integer() {
        assert_eq!(Number::Integer(7) * Number::Integer(2), Number::Integer(14));
    }

    #[test]
    fn test_integer_overflow_promotes_to_float() {
        let product = Number::Integer(i64::MAX) * Number::Integer(2);
        assert!(matches!(product, Number::Float(_)));
        assert!(product.as_f64() > i64::MAX as f64);
    }

    #[test]
    fn test_mixed_multiplication_is_float() {
        assert_eq!(Number::Float(2.5) * Number::Integer(4), Number::Float(10.0));
    }

    #[test]
    fn test_display_keeps_float_marker() {
        assert_eq!(Number::Integer(49).to_string(), "49");
        assert_eq!(Number::Float(10.0).to_string(), "10.0");
        assert_eq!(Number::Float(7.5).to_string(), "7.5");
    }

    #[test]
    fn test_display_extreme_floats_in_scientific_notation() {
        assert_eq!(Number::Float(1e200).to_string(), "1e200");
        assert_eq!(Number::Float(2.5e-7).to_string(), "2.5e-7");
        assert_eq!(Number::Float(-3e20).to_string(), "-3e20");
        assert_eq!(Number::Float(0.0).to_string(), "0.0");
        assert_eq!(Number::Float(123456.0).to_string(), "123456.0");
    }

    #[test]
    fn test_report_sentence() {
        let report = AreaReport {
            height: Number::Integer(7),
            width: Number::Integer(7),
            area: Number::Integer(49),
        };
        assert_eq!(report.sentence(), "The area of a 7 X 7 rectangle is 49");
    }

    #[test]
    fn test_report_serializes_plain_numbers() {
        let report = AreaReport {
            height: Number::Integer(7),
            width: Number::Float(2.5),
            area: Number::Float(17.5),
        };
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(json, r#"{"height":7,"width":2.5,"area":17.5}"#);
    }
}
