use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{BookingError, BookingResult};

pub mod hall;

pub use hall::{HallConfig, Layout, SeatTypeRule};

// Главная структура конфигурации процесса (то, что приходит из окружения)
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub hall: HallSource,
}

// Настройки приложения
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub environment: String,
    pub rust_log: String,
    pub log_format: LogFormat,
}

// Откуда брать конфигурацию зала
#[derive(Debug, Clone, Deserialize)]
pub struct HallSource {
    pub config_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "pretty" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(BookingError::Environment(format!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                other
            ))),
        }
    }
}

impl Config {
    pub fn from_env() -> BookingResult<Self> {
        Ok(Config {
            app: AppConfig {
                environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
                rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "seat_booking=debug".to_string()),
                log_format: env::var("LOG_FORMAT")
                    .unwrap_or_else(|_| "text".to_string())
                    .parse()?,
            },
            hall: HallSource {
                config_path: env::var("HALL_CONFIG")
                    .ok()
                    .filter(|p| !p.trim().is_empty())
                    .map(PathBuf::from),
            },
        })
    }

    /// Загружает зал из файла, а если путь не задан - берёт зал по умолчанию.
    /// Проверка конфигурации - в `HallState::new`.
    pub fn load_hall(&self) -> BookingResult<HallConfig> {
        match &self.hall.config_path {
            Some(path) => HallConfig::load(path),
            None => Ok(HallConfig::default_hall()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parsing() {
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!(" TEXT ".parse::<LogFormat>().unwrap(), LogFormat::Text);
        let err = "xml".parse::<LogFormat>().unwrap_err();
        assert!(matches!(err, BookingError::Environment(_)));
        assert!(err.to_string().starts_with("invalid environment setting"));
    }

    #[test]
    fn test_default_hall_when_no_path() {
        let config = Config {
            app: AppConfig {
                environment: "test".to_string(),
                rust_log: "seat_booking=debug".to_string(),
                log_format: LogFormat::Text,
            },
            hall: HallSource { config_path: None },
        };

        let hall = config.load_hall().unwrap();
        assert_eq!(hall, HallConfig::default_hall());
    }
}
