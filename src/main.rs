use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use seat_booking::{
    config::{Config, LogFormat},
    controllers::{EventOutcome, SeatEvent, SeatMapController},
};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env().context("Failed to read environment")?;

    let registry = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.app.rust_log));
    match config.app.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
    }

    info!("Starting seat booking ({})", config.app.environment);

    let hall = config.load_hall().context("Failed to load hall configuration")?;

    // Внешний обработчик брони: здесь просто пишем в лог
    let mut controller = SeatMapController::new(hall, |seat_ids: &[String]| {
        info!("Booking handed off for seats {:?}", seat_ids);
    })?;

    // Каждый аргумент - клик по месту ("B4") или "confirm"
    for arg in std::env::args().skip(1) {
        let event: SeatEvent = arg.parse()?;
        if let EventOutcome::Confirmed(confirmation) = controller.handle(event) {
            println!("{}", confirmation.message(&controller.state().config.currency));
        }
    }

    print!("{}", controller.render());
    Ok(())
}
