use thiserror::Error;

/// Errors raised while loading inputs for the calculator.
///
/// The calculation itself never fails; only reading rate tables,
/// preferences and configuration can.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_errors_convert_with_question_mark() {
        fn parse(text: &str) -> Result<serde_json::Value, AppError> {
            Ok(serde_json::from_str(text)?)
        }

        let err = parse("{not json").unwrap_err();
        assert!(matches!(err, AppError::Json(_)));
        assert!(err.to_string().starts_with("JSON error:"));
    }

    #[test]
    fn config_error_message_includes_detail() {
        let err = AppError::Config("unknown multiplier mode 'x'".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: unknown multiplier mode 'x'"
        );
    }
}
