//! grid.rs
//!
//! Модель сетки мест. Сетка строится один раз из конфигурации зала и больше
//! не меняет размер; после построения меняется только флаг `selected`, и
//! только через `toggle`. Любая смена конфигурации - это новая сетка.

use serde::Serialize;
use std::collections::BTreeSet;
use tracing::{debug, info};

use crate::config::{HallConfig, Layout, SeatTypeRule};
use crate::error::{BookingError, BookingResult};
use crate::models::seat::{parse_seat_id, seat_id};
use crate::models::{ColorTag, Seat, SeatStatus, SelectedSeat};
use crate::services::classifier::classify;

/// Строка легенды: одна на категорию, в порядке объявления.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub category: String,
    pub name: String,
    pub price: f64,
    pub color: ColorTag,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeatGrid {
    layout: Layout,
    legend: Vec<LegendEntry>,
    seats: Vec<Vec<Seat>>,
}

impl SeatGrid {
    /// Проверяет конфигурацию и строит новую сетку без выбранных мест.
    pub fn new(hall: &HallConfig) -> BookingResult<Self> {
        hall.ensure_valid()?;
        let seats = init_grid(&hall.layout, &hall.seat_types, &hall.booked_seats)?;

        let legend = hall
            .seat_types
            .iter()
            .enumerate()
            .map(|(index, rule)| LegendEntry {
                category: rule.key.clone(),
                name: rule.name.clone(),
                price: rule.price,
                color: ColorTag::for_rule(index),
            })
            .collect();

        let grid = Self {
            layout: hall.layout.clone(),
            legend,
            seats,
        };

        info!(
            "Seat grid built: {} rows x {} seats, {} booked",
            grid.layout.rows,
            grid.layout.seats_per_row,
            grid.iter().filter(|s| s.is_booked()).count()
        );
        Ok(grid)
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn legend(&self) -> &[LegendEntry] {
        &self.legend
    }

    pub fn rows(&self) -> &[Vec<Seat>] {
        &self.seats
    }

    pub fn len(&self) -> usize {
        self.layout.rows * self.layout.seats_per_row
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Все места построчно, слева направо.
    pub fn iter(&self) -> impl Iterator<Item = &Seat> {
        self.seats.iter().flatten()
    }

    pub fn seat(&self, row: usize, column: usize) -> Option<&Seat> {
        self.seats.get(row)?.get(column)
    }

    pub fn seat_by_id(&self, id: &str) -> Option<&Seat> {
        let (row, column) = parse_seat_id(id)?;
        self.seat(row, column)
    }

    /// Левый и правый блоки ряда относительно прохода.
    pub fn row_blocks(&self, row: usize) -> Option<(&[Seat], &[Seat])> {
        let seats = self.seats.get(row)?;
        Some(seats.split_at(self.layout.aisle_position.min(seats.len())))
    }

    /// Переключает выбор места. Занятые места и координаты вне сетки
    /// молча игнорируются. Возвращает `true`, если сетка изменилась.
    pub fn toggle(&mut self, row: usize, column: usize) -> bool {
        let Some(seat) = self.seats.get_mut(row).and_then(|r| r.get_mut(column)) else {
            debug!("Ignoring click outside of the grid at ({}, {})", row, column);
            return false;
        };

        if seat.status != SeatStatus::Available {
            debug!("Ignoring click on booked seat {}", seat.id);
            return false;
        }

        seat.selected = !seat.selected;
        debug!("Seat {} selected={}", seat.id, seat.selected);
        true
    }

    pub fn toggle_id(&mut self, id: &str) -> bool {
        match parse_seat_id(id) {
            Some((row, column)) => self.toggle(row, column),
            None => {
                debug!("Ignoring click on malformed seat id '{}'", id);
                false
            }
        }
    }

    /// Выбранные места в порядке обхода сетки (ряд за рядом, слева направо),
    /// независимо от порядка кликов.
    pub fn selected_seats(&self) -> Vec<SelectedSeat> {
        self.iter()
            .filter(|seat| seat.selected)
            .map(|seat| SelectedSeat {
                id: seat.id.clone(),
                price: seat.price,
            })
            .collect()
    }

    pub fn has_selection(&self) -> bool {
        self.iter().any(|seat| seat.selected)
    }

    pub fn selected_total(&self) -> f64 {
        total_price(&self.selected_seats())
    }
}

/// Сумма цен; для пустого выбора - 0.
pub fn total_price(selected: &[SelectedSeat]) -> f64 {
    selected.iter().map(|seat| seat.price).sum()
}

/// Строит сетку `rows x seats_per_row`. Категория считается один раз на ряд.
pub fn init_grid(
    layout: &Layout,
    rules: &[SeatTypeRule],
    booked: &BTreeSet<String>,
) -> BookingResult<Vec<Vec<Seat>>> {
    let mut seats = Vec::with_capacity(layout.rows);

    for row in 0..layout.rows {
        let class = classify(row, rules)
            .ok_or_else(|| BookingError::configuration("seat_types must not be empty"))?;

        let seat_row = (0..layout.seats_per_row)
            .map(|column| {
                let id = seat_id(row, column);
                let status = if booked.contains(&id) {
                    SeatStatus::Booked
                } else {
                    SeatStatus::Available
                };

                Seat {
                    id,
                    row,
                    column,
                    category: class.category.clone(),
                    name: class.name.clone(),
                    price: class.price,
                    color: class.color,
                    status,
                    selected: false,
                }
            })
            .collect();

        seats.push(seat_row);
    }

    Ok(seats)
}
