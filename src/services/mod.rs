pub mod booking;
pub mod classifier;
pub mod grid;

pub use booking::{confirm, BookingCompletion};
pub use classifier::{classify, fallback_category};
pub use grid::{init_grid, total_price, LegendEntry, SeatGrid};
