pub mod seat;
pub mod booking;

pub use seat::{ColorTag, Seat, SeatClass, SeatStatus, PALETTE};
pub use booking::{Confirmation, SelectedSeat};
