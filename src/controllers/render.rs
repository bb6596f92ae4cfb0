//! render.rs
//!
//! Текстовая отрисовка зала поверх модели. Никакой логики выбора здесь нет:
//! только чтение `HallState`.

use std::fmt;

use crate::models::seat::row_label;
use crate::models::Seat;
use crate::services::SeatGrid;
use crate::HallState;

const AISLE_GAP: &str = "    ";

/// Подсказка к месту: "A1 - Regular - ₹150".
pub fn seat_title(seat: &Seat, currency: &str) -> String {
    format!("{} - {} - {}{}", seat.id, seat.name, currency, seat.price)
}

fn seat_cell(seat: &Seat, width: usize) -> String {
    let marker = if seat.is_booked() {
        'x'
    } else if seat.selected {
        '*'
    } else {
        ' '
    };
    format!("[{}{:>width$}]", marker, seat.number(), width = width)
}

fn render_block(seats: &[Seat], width: usize) -> String {
    seats.iter().map(|seat| seat_cell(seat, width)).collect()
}

fn write_rows(f: &mut fmt::Formatter<'_>, grid: &SeatGrid) -> fmt::Result {
    let number_width = grid.layout().seats_per_row.to_string().len();
    let label_width = row_label(grid.layout().rows.saturating_sub(1)).len();

    for index in 0..grid.rows().len() {
        let Some((left, right)) = grid.row_blocks(index) else {
            continue;
        };

        writeln!(
            f,
            "{:<label_width$}  {}{}{}",
            row_label(index),
            render_block(left, number_width),
            AISLE_GAP,
            render_block(right, number_width),
            label_width = label_width
        )?;
    }
    Ok(())
}

fn write_legend(f: &mut fmt::Formatter<'_>, grid: &SeatGrid, currency: &str) -> fmt::Result {
    let mut entries: Vec<String> = grid
        .legend()
        .iter()
        .map(|entry| format!("[{}] {} ({}{})", entry.color, entry.name, currency, entry.price))
        .collect();
    entries.push("[*] Selected".to_string());
    entries.push("[x] Booked".to_string());

    writeln!(f, "{}", entries.join("  "))
}

fn write_summary(f: &mut fmt::Formatter<'_>, grid: &SeatGrid, currency: &str) -> fmt::Result {
    let selected = grid.selected_seats();
    if selected.is_empty() {
        return Ok(());
    }

    let ids: Vec<&str> = selected.iter().map(|seat| seat.id.as_str()).collect();
    writeln!(f)?;
    writeln!(f, "Booking Summary")?;
    writeln!(f, "Selected Seats: {}", ids.join(", "))?;
    for seat in &selected {
        writeln!(f, "  Seat {}: {}{}", seat.id, currency, seat.price)?;
    }
    writeln!(f, "Total: {}{}", currency, grid.selected_total())
}

/// Текстовый вид зала: заголовок, экран, ряды с проходом, легенда и,
/// если что-то выбрано, сводка брони.
pub struct HallView<'a>(pub &'a HallState);

impl fmt::Display for HallView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = &self.0.config;
        let grid = &self.0.grid;

        writeln!(f, "{}", config.title)?;
        writeln!(f, "{}", config.subtitle)?;
        writeln!(f)?;
        writeln!(f, "SCREEN")?;
        writeln!(f)?;

        write_rows(f, grid)?;
        writeln!(f)?;
        write_legend(f, grid, &config.currency)?;
        write_summary(f, grid, &config.currency)
    }
}

pub fn render_hall(state: &HallState) -> String {
    HallView(state).to_string()
}
