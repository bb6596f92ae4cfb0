//! Слой представления: принимает события пользователя (клик по месту,
//! подтверждение), передаёт их модели и отдаёт отрисовку зала.

pub mod render;

use std::str::FromStr;
use tracing::info;

use crate::config::HallConfig;
use crate::error::{BookingError, BookingResult};
use crate::models::Confirmation;
use crate::services::{self, BookingCompletion};
use crate::HallState;

pub use render::{render_hall, seat_title, HallView};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeatEvent {
    Click { row: usize, column: usize },
    ClickId(String),
    Confirm,
}

impl FromStr for SeatEvent {
    type Err = BookingError;

    // "confirm" или идентификатор места вроде "B4"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("confirm") {
            return Ok(SeatEvent::Confirm);
        }
        if s.is_empty() {
            return Err(BookingError::InvalidEvent("empty seat event".to_string()));
        }
        Ok(SeatEvent::ClickId(s.to_ascii_uppercase()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EventOutcome {
    Unchanged,
    SelectionChanged,
    Confirmed(Confirmation),
}

pub struct SeatMapController<C> {
    state: HallState,
    on_booking_complete: C,
}

impl<C: BookingCompletion> SeatMapController<C> {
    pub fn new(config: HallConfig, on_booking_complete: C) -> BookingResult<Self> {
        Ok(Self {
            state: HallState::new(config)?,
            on_booking_complete,
        })
    }

    pub fn state(&self) -> &HallState {
        &self.state
    }

    /// Полная пересборка сетки; текущий выбор теряется.
    /// При ошибке остаётся прежняя сетка.
    pub fn reconfigure(&mut self, config: HallConfig) -> BookingResult<()> {
        self.state = HallState::new(config)?;
        info!("Hall reconfigured, selection reset");
        Ok(())
    }

    pub fn handle(&mut self, event: SeatEvent) -> EventOutcome {
        let changed = match event {
            SeatEvent::Click { row, column } => self.state.grid.toggle(row, column),
            SeatEvent::ClickId(id) => self.state.grid.toggle_id(&id),
            SeatEvent::Confirm => return self.confirm(),
        };

        if changed {
            EventOutcome::SelectionChanged
        } else {
            EventOutcome::Unchanged
        }
    }

    // кнопка подтверждения доступна только при непустом выборе
    fn confirm(&mut self) -> EventOutcome {
        if !self.state.grid.has_selection() {
            return EventOutcome::Unchanged;
        }

        let confirmation = services::confirm(&self.state.grid, &mut self.on_booking_complete);
        info!("{}", confirmation.message(&self.state.config.currency));
        EventOutcome::Confirmed(confirmation)
    }

    pub fn render(&self) -> String {
        render_hall(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_events() {
        assert_eq!("confirm".parse::<SeatEvent>().unwrap(), SeatEvent::Confirm);
        assert_eq!(" CONFIRM ".parse::<SeatEvent>().unwrap(), SeatEvent::Confirm);
        assert_eq!("b4".parse::<SeatEvent>().unwrap(), SeatEvent::ClickId("B4".to_string()));
        assert!(matches!(
            "  ".parse::<SeatEvent>(),
            Err(BookingError::InvalidEvent(_))
        ));
    }

    #[test]
    fn test_click_and_confirm() {
        let mut booked: Vec<String> = Vec::new();
        {
            let mut controller = SeatMapController::new(
                HallConfig::default_hall().with_booked_seats(["A3"]),
                |ids: &[String]| booked.extend_from_slice(ids),
            )
            .unwrap();

            assert_eq!(controller.handle(SeatEvent::Confirm), EventOutcome::Unchanged);
            assert_eq!(
                controller.handle(SeatEvent::ClickId("A3".into())),
                EventOutcome::Unchanged
            );
            assert_eq!(
                controller.handle(SeatEvent::Click { row: 6, column: 0 }),
                EventOutcome::SelectionChanged
            );
            assert_eq!(
                controller.handle(SeatEvent::ClickId("A1".into())),
                EventOutcome::SelectionChanged
            );

            let outcome = controller.handle(SeatEvent::Confirm);
            assert_eq!(
                outcome,
                EventOutcome::Confirmed(Confirmation {
                    seat_ids: vec!["A1".to_string(), "G1".to_string()],
                    total: 500.0,
                })
            );
        }
        assert_eq!(booked, vec!["A1", "G1"]);
    }

    #[test]
    fn test_reconfigure_resets_selection() {
        let mut controller =
            SeatMapController::new(HallConfig::default_hall(), |_: &[String]| {}).unwrap();
        controller.handle(SeatEvent::ClickId("B2".into()));
        assert!(controller.state().grid.has_selection());

        controller
            .reconfigure(HallConfig::default_hall().with_booked_seats(["B2"]))
            .unwrap();
        assert!(!controller.state().grid.has_selection());
        assert!(controller.state().grid.seat_by_id("B2").unwrap().is_booked());
    }

    #[test]
    fn test_failed_reconfigure_keeps_grid() {
        let mut controller =
            SeatMapController::new(HallConfig::default_hall(), |_: &[String]| {}).unwrap();
        controller.handle(SeatEvent::ClickId("B2".into()));

        let mut broken = HallConfig::default_hall();
        broken.seat_types.clear();
        assert!(controller.reconfigure(broken).is_err());
        assert!(controller.state().grid.has_selection());
    }
}
