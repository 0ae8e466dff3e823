use crate::law::LawError;

/// Exit code for usage, configuration, and I/O failures.
pub const EXIT_CONFIG: u8 = 2;

/// Exit code for failures while evaluating the law.
pub const EXIT_EVAL: u8 = 4;

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<LawError> for AppError {
    fn from(err: LawError) -> Self {
        AppError::new(EXIT_EVAL, err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn law_errors_map_to_eval_exit_code() {
        let err: AppError = LawError::InvalidWavelength { value: -1.0 }.into();
        assert_eq!(err.exit_code(), EXIT_EVAL);
        assert_eq!(err.to_string(), "wavelength must be finite and positive, got -1 um");
    }
}
