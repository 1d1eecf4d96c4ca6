use thiserror::Error;

#[derive(Error, Debug)]
pub enum AreaError {
    #[error("{program}: Expecting one or two command-line arguments, got {count}")]
    InvalidArgumentCount { program: String, count: usize },

    #[error("Invalid numeric input for {field}: '{value}'")]
    InvalidNumericInput { field: String, value: String },

    #[error("{field} must be greater than zero, got {value}")]
    NonPositiveDimension { field: String, value: String },

    #[error("Area {area} is not a positive finite number")]
    AreaOutOfRange { area: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Usage,
    Input,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AreaError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AreaError::InvalidArgumentCount { .. } => ErrorCategory::Usage,
            AreaError::InvalidNumericInput { .. }
            | AreaError::NonPositiveDimension { .. }
            | AreaError::AreaOutOfRange { .. } => ErrorCategory::Input,
            AreaError::IoError(_) | AreaError::SerializationError(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Usage => ErrorSeverity::Medium,
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Input => 1,
            ErrorCategory::Usage => 2,
            ErrorCategory::Output => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            AreaError::InvalidArgumentCount { program, .. } => format!(
                "Run `{} <height>` for a square or `{} <height> <width>` for a rectangle",
                program, program
            ),
            AreaError::InvalidNumericInput { .. } => {
                "Use a plain integer or decimal number such as 7 or 2.5".to_string()
            }
            AreaError::NonPositiveDimension { .. } => {
                "Side lengths must be positive numbers".to_string()
            }
            AreaError::AreaOutOfRange { .. } => {
                "Use side lengths whose product fits in a double-precision float".to_string()
            }
            AreaError::IoError(_) => "Check that standard output is writable".to_string(),
            AreaError::SerializationError(_) => "Retry with `--format text`".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            // 與原始用法訊息相同的格式
            AreaError::InvalidArgumentCount { program, .. } => format!(
                "{}: Expecting one or two command-line arguments:\n\tthe height of a square or the height and width of a rectangle",
                program
            ),
            AreaError::InvalidNumericInput { field, value } => {
                format!("The {} '{}' is not a number", field, value)
            }
            AreaError::NonPositiveDimension { field, value } => {
                format!("The {} must be greater than zero (got {})", field, value)
            }
            AreaError::AreaOutOfRange { area } => {
                format!("The area is out of range (computed {})", area)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AreaError>;
