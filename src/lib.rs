pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod controllers;

use crate::config::HallConfig;
use crate::error::BookingResult;
use crate::services::SeatGrid;

// Состояние одного экземпляра виджета: проверенная конфигурация и живая сетка
#[derive(Debug, Clone)]
pub struct HallState {
    pub config: HallConfig,
    pub grid: SeatGrid,
}

impl HallState {
    pub fn new(config: HallConfig) -> BookingResult<Self> {
        let grid = SeatGrid::new(&config)?;
        Ok(Self { config, grid })
    }
}
