//! booking.rs
//!
//! Граница подтверждения брони. Модель только сообщает выбранные места
//! внешнему обработчику и ничего не меняет у себя: места не становятся
//! `Booked`. Обновлённый список занятых мест вызывающая сторона должна
//! передать заново через новую конфигурацию зала.

use tracing::{debug, info};

use crate::models::Confirmation;
use crate::services::grid::{total_price, SeatGrid};

/// Внешний обработчик завершения брони.
pub trait BookingCompletion {
    fn on_booking_complete(&mut self, seat_ids: &[String]);
}

impl<F> BookingCompletion for F
where
    F: FnMut(&[String]),
{
    fn on_booking_complete(&mut self, seat_ids: &[String]) {
        self(seat_ids)
    }
}

/// Собирает текущий выбор и передаёт его обработчику.
/// При пустом выборе обработчик не вызывается, возвращается пустой результат.
pub fn confirm<C>(grid: &SeatGrid, collaborator: &mut C) -> Confirmation
where
    C: BookingCompletion + ?Sized,
{
    let selected = grid.selected_seats();
    if selected.is_empty() {
        debug!("Confirm requested with no seats selected, nothing to do");
        return Confirmation::default();
    }

    let confirmation = Confirmation {
        total: total_price(&selected),
        seat_ids: selected.into_iter().map(|seat| seat.id).collect(),
    };

    info!(
        "Confirming booking of {} seat(s), total {}",
        confirmation.seat_ids.len(),
        confirmation.total
    );
    collaborator.on_booking_complete(&confirmation.seat_ids);
    confirmation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{HallConfig, Layout, SeatTypeRule};

    fn grid() -> SeatGrid {
        let hall = HallConfig::new(
            Layout {
                rows: 2,
                seats_per_row: 2,
                aisle_position: 1,
            },
            vec![
                SeatTypeRule::new("reg", "Regular", 100.0, [0]),
                SeatTypeRule::new("vip", "VIP", 200.0, [1]),
            ],
        )
        .with_booked_seats(["A1"]);
        SeatGrid::new(&hall).unwrap()
    }

    #[test]
    fn test_confirm_reports_selection() {
        let mut grid = grid();
        grid.toggle_id("B1");

        let mut received: Vec<Vec<String>> = Vec::new();
        let confirmation = confirm(&grid, &mut |ids: &[String]| received.push(ids.to_vec()));

        assert_eq!(confirmation.seat_ids, vec!["B1"]);
        assert_eq!(confirmation.total, 200.0);
        assert_eq!(received, vec![vec!["B1".to_string()]]);
    }

    #[test]
    fn test_confirm_does_not_book_locally() {
        let mut grid = grid();
        grid.toggle_id("B2");
        let before = grid.clone();

        confirm(&grid, &mut |_: &[String]| {});
        assert_eq!(grid, before);
        assert!(grid.seat_by_id("B2").unwrap().is_available());
    }

    #[test]
    fn test_empty_confirm_is_noop() {
        let grid = grid();
        let mut calls = 0;
        let confirmation = confirm(&grid, &mut |_: &[String]| calls += 1);

        assert!(confirmation.is_empty());
        assert_eq!(confirmation.total, 0.0);
        assert_eq!(calls, 0);
    }
}
