//! hall.rs
//!
//! Конфигурация кинозала: геометрия (`Layout`), упорядоченный список
//! категорий мест (`SeatTypeRule`) и список уже занятых мест.
//!
//! Загрузчики (`load`, `from_json`) только разбирают данные. Проверка
//! выполняется один раз, в `HallConfig::ensure_valid`, который вызывает
//! построение сетки (`SeatGrid::new` / `HallState::new`). Всё, что
//! делает конфигурацию непригодной, возвращается как ошибка; мелкие
//! несостыковки (ряд без категории, пересечения, лишние занятые места)
//! только логируются.

use config::{Config as RawConfig, Environment, File, Map};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::env;
use std::path::Path;
use tracing::{info, warn};
use validator::{Validate, ValidationError};

use crate::error::{BookingError, BookingResult};
use crate::models::seat::parse_seat_id;

/// Геометрия зала. Проход (`aisle_position`) влияет только на отрисовку.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_aisle"))]
pub struct Layout {
    #[validate(range(min = 1))]
    pub rows: usize,
    #[validate(range(min = 1))]
    pub seats_per_row: usize,
    pub aisle_position: usize,
}

fn validate_aisle(layout: &Layout) -> Result<(), ValidationError> {
    if layout.aisle_position > layout.seats_per_row {
        let mut err = ValidationError::new("aisle_out_of_range");
        err.message = Some("aisle_position must be within [0, seats_per_row]".into());
        return Err(err);
    }
    Ok(())
}

/// Одна категория мест: имя, цена и ряды (с нуля), которые ей принадлежат.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct SeatTypeRule {
    #[validate(length(min = 1))]
    pub key: String,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[serde(default)]
    pub rows: BTreeSet<usize>,
}

impl SeatTypeRule {
    pub fn new(key: &str, name: &str, price: f64, rows: impl IntoIterator<Item = usize>) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
            price,
            rows: rows.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct HallConfig {
    #[validate(nested)]
    pub layout: Layout,
    /// Порядок важен: он задаёт цвет категории и запасную категорию.
    #[validate(nested)]
    pub seat_types: Vec<SeatTypeRule>,
    #[serde(default)]
    pub booked_seats: BTreeSet<String>,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_subtitle")]
    pub subtitle: String,
}

// HALL_CONFIG - путь к самому файлу, а не поле зала
const HALL_CONFIG_VAR: &str = "HALL_CONFIG";

fn hall_overrides<I>(vars: I) -> Map<String, String>
where
    I: IntoIterator<Item = (String, String)>,
{
    vars.into_iter()
        .filter(|(key, _)| !key.eq_ignore_ascii_case(HALL_CONFIG_VAR))
        .collect()
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_title() -> String {
    "Cinema Hall Booking".to_string()
}

fn default_subtitle() -> String {
    "Select your preferred seats".to_string()
}

impl HallConfig {
    pub fn new(layout: Layout, seat_types: Vec<SeatTypeRule>) -> Self {
        Self {
            layout,
            seat_types,
            booked_seats: BTreeSet::new(),
            currency: default_currency(),
            title: default_title(),
            subtitle: default_subtitle(),
        }
    }

    /// Зал по умолчанию: 8 рядов по 12 мест, три категории.
    /// Используется только если вызывающий явно его попросил.
    pub fn default_hall() -> Self {
        Self::new(
            Layout {
                rows: 8,
                seats_per_row: 12,
                aisle_position: 5,
            },
            vec![
                SeatTypeRule::new("regular", "Regular", 150.0, [0, 1, 2]),
                SeatTypeRule::new("premium", "Premium", 250.0, [3, 4, 5]),
                SeatTypeRule::new("vip", "VIP", 350.0, [6, 7]),
            ],
        )
    }

    pub fn with_booked_seats<I, S>(mut self, seats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.booked_seats = seats.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Читает зал из файла (json/toml/yaml по расширению) и накладывает
    /// переопределения из окружения вида `HALL_CURRENCY`, `HALL_LAYOUT__ROWS`.
    pub fn load(path: impl AsRef<Path>) -> BookingResult<Self> {
        Self::load_with_overrides(path, env::vars())
    }

    /// То же, что `load`, но переменные окружения передаются явно.
    pub fn load_with_overrides<I>(path: impl AsRef<Path>, vars: I) -> BookingResult<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let path = path.as_ref();
        let raw = RawConfig::builder()
            .add_source(File::from(path))
            .add_source(
                Environment::with_prefix("HALL")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(Some(hall_overrides(vars))),
            )
            .build()?;

        let hall: HallConfig = raw.try_deserialize()?;
        info!("Loaded hall configuration from {}", path.display());
        Ok(hall)
    }

    pub fn from_json(json: &str) -> BookingResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| BookingError::configuration(format!("malformed hall json: {}", e)))
    }

    /// Единственная точка проверки конфигурации.
    pub fn ensure_valid(&self) -> BookingResult<()> {
        if self.seat_types.is_empty() {
            return Err(BookingError::configuration("seat_types must not be empty"));
        }

        Validate::validate(self)?;

        let mut keys = HashSet::new();
        for rule in &self.seat_types {
            if !rule.price.is_finite() {
                return Err(BookingError::configuration(format!(
                    "price of seat type '{}' must be a finite number",
                    rule.key
                )));
            }
            if !keys.insert(rule.key.as_str()) {
                return Err(BookingError::configuration(format!(
                    "duplicate seat type '{}'",
                    rule.key
                )));
            }
        }

        self.warn_on_anomalies();
        Ok(())
    }

    fn warn_on_anomalies(&self) {
        let rows = self.layout.rows;

        for row in 0..rows {
            let owners: Vec<&str> = self
                .seat_types
                .iter()
                .filter(|rule| rule.rows.contains(&row))
                .map(|rule| rule.key.as_str())
                .collect();

            match owners.as_slice() {
                [] => warn!(
                    "Row {} is not covered by any seat type, falling back to '{}'",
                    row, self.seat_types[0].key
                ),
                [_] => {}
                [first, ..] => warn!(
                    "Row {} is claimed by several seat types {:?}, using '{}'",
                    row, owners, first
                ),
            }
        }

        for rule in &self.seat_types {
            let outside: Vec<usize> = rule.rows.range(rows..).copied().collect();
            if !outside.is_empty() {
                warn!(
                    "Seat type '{}' lists rows {:?} outside of the {}-row hall",
                    rule.key, outside, rows
                );
            }
        }

        for id in &self.booked_seats {
            let addressable = parse_seat_id(id)
                .map(|(row, column)| row < rows && column < self.layout.seats_per_row)
                .unwrap_or(false);
            if !addressable {
                warn!("Booked seat '{}' does not exist in this hall, ignoring", id);
            }
        }
    }
}
