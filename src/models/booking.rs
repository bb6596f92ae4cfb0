use serde::{Deserialize, Serialize};

/// Строка в сводке бронирования.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedSeat {
    pub id: String,
    pub price: f64,
}

/// То, что уходит внешнему обработчику при подтверждении.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Confirmation {
    pub seat_ids: Vec<String>,
    pub total: f64,
}

impl Confirmation {
    pub fn is_empty(&self) -> bool {
        self.seat_ids.is_empty()
    }

    pub fn message(&self, currency: &str) -> String {
        format!(
            "Booking confirmed for {} seat(s)! Total: {}{}",
            self.seat_ids.len(),
            currency,
            self.total
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirmation_message() {
        let confirmation = Confirmation {
            seat_ids: vec!["B1".to_string(), "B2".to_string()],
            total: 400.0,
        };
        assert_eq!(
            confirmation.message("₹"),
            "Booking confirmed for 2 seat(s)! Total: ₹400"
        );
    }

    #[test]
    fn test_default_confirmation_is_empty() {
        let confirmation = Confirmation::default();
        assert!(confirmation.is_empty());
        assert_eq!(confirmation.total, 0.0);
    }
}
