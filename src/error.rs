use thiserror::Error;

/// Ошибки конфигурации зала. Всё остальное (клик вне сетки, пустой confirm)
/// ошибкой не считается и обрабатывается как no-op.
#[derive(Debug, Error)]
pub enum BookingError {
    #[error("invalid hall configuration: {0}")]
    Configuration(String),

    #[error("hall configuration failed validation: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("failed to load hall configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid environment setting: {0}")]
    Environment(String),

    #[error("invalid seat event: {0}")]
    InvalidEvent(String),
}

impl BookingError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}

pub type BookingResult<T> = Result<T, BookingError>;
