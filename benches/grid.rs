use criterion::{black_box, criterion_group, criterion_main, Criterion};

use seat_booking::config::{HallConfig, Layout, SeatTypeRule};
use seat_booking::services::SeatGrid;

fn large_hall() -> HallConfig {
    HallConfig::new(
        Layout {
            rows: 40,
            seats_per_row: 60,
            aisle_position: 30,
        },
        vec![
            SeatTypeRule::new("regular", "Regular", 150.0, 0..20),
            SeatTypeRule::new("premium", "Premium", 250.0, 20..35),
            SeatTypeRule::new("vip", "VIP", 350.0, 35..40),
        ],
    )
    .with_booked_seats(["A1", "B5", "AN60"])
}

fn bench_build(c: &mut Criterion) {
    let hall = large_hall();
    c.bench_function("grid_build_40x60", |b| {
        b.iter(|| SeatGrid::new(black_box(&hall)).unwrap())
    });
}

fn bench_selection(c: &mut Criterion) {
    let mut grid = SeatGrid::new(&large_hall()).unwrap();
    for row in (0..40).step_by(3) {
        for column in (0..60).step_by(7) {
            grid.toggle(row, column);
        }
    }

    c.bench_function("selected_seats_and_total", |b| {
        b.iter(|| black_box(&grid).selected_total())
    });
}

criterion_group!(benches, bench_build, bench_selection);
criterion_main!(benches);
