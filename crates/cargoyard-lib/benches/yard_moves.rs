use cargoyard_lib::{ContainerKind, ContainerSpec, RecordingHazardNotifier, ShipSpec, Yard};
use criterion::{criterion_group, criterion_main, Criterion};
use once_cell::sync::Lazy;
use std::hint::black_box;

const CONTAINERS: usize = 200;

static SPECS: Lazy<Vec<ContainerSpec>> = Lazy::new(|| {
    (0..CONTAINERS)
        .map(|i| {
            let kind = match i % 3 {
                0 => ContainerKind::Liquid {
                    hazardous: i % 2 == 0,
                },
                1 => ContainerKind::Gas { pressure_atm: 2.0 },
                _ => ContainerKind::Refrigerated {
                    product_type: "Fish".to_string(),
                    temperature_c: 2.0,
                },
            };
            ContainerSpec::new(10_000.0, 2_000.0, 259.0, 606.0, kind)
        })
        .collect()
});

fn seeded_yard() -> Yard<RecordingHazardNotifier> {
    let mut yard = Yard::with_notifier(RecordingHazardNotifier::new());
    yard.create_ship(ShipSpec::new("Alpha", CONTAINERS, 10_000.0, 20.0))
        .expect("valid ship");
    yard.create_ship(ShipSpec::new("Bravo", CONTAINERS, 10_000.0, 20.0))
        .expect("valid ship");
    for spec in SPECS.iter() {
        yard.create_container(spec.clone()).expect("valid container");
    }
    yard
}

fn benchmark_yard_moves(c: &mut Criterion) {
    c.bench_function("load_all_onto_ship", |b| {
        b.iter_batched(
            seeded_yard,
            |mut yard| {
                let serials: Vec<String> = yard
                    .unassigned()
                    .iter()
                    .map(|c| c.serial().to_string())
                    .collect();
                for serial in &serials {
                    yard.load_onto_ship(serial, "Alpha").expect("room available");
                }
                black_box(yard.ship("Alpha").map(|s| s.total_weight_kg()))
            },
            criterion::BatchSize::SmallInput,
        );
    });

    c.bench_function("transfer_all_between_ships", |b| {
        b.iter_batched(
            || {
                let mut yard = seeded_yard();
                let serials: Vec<String> = yard
                    .unassigned()
                    .iter()
                    .map(|c| c.serial().to_string())
                    .collect();
                for serial in &serials {
                    yard.load_onto_ship(serial, "Alpha").expect("room available");
                }
                (yard, serials)
            },
            |(mut yard, serials)| {
                for serial in &serials {
                    yard.transfer("Alpha", "Bravo", serial)
                        .expect("room available");
                }
                black_box(yard.ship("Bravo").map(|s| s.container_count()))
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, benchmark_yard_moves);
criterion_main!(benches);
