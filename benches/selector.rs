use std::path::Path;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use switchboard_bom::bom::Role;
use switchboard_bom::catalog::Catalog;
use switchboard_bom::{BomSession, SelectionCriteria, SelectorService, Voltage};

fn sample_catalog() -> Catalog {
    Catalog::load_dir(Path::new(env!("CARGO_MANIFEST_DIR")).join("data")).expect("load catalog")
}

fn bench_select_sweep(c: &mut Criterion) {
    let catalog = sample_catalog();
    c.bench_function("select_15_to_4000", |b| {
        b.iter(|| {
            for amps in (15..=4000).step_by(5) {
                let criteria = SelectionCriteria {
                    amp_rating: amps,
                    voltage: Some(Voltage::V480),
                    ..SelectionCriteria::default()
                };
                let _ = black_box(SelectorService::select(&catalog, &criteria));
            }
        })
    });
}

fn bench_board_summary(c: &mut Criterion) {
    let mut session = BomSession::new(sample_catalog());
    let items: Vec<String> = session
        .catalog()
        .breakers()
        .iter()
        .filter(|breaker| breaker.frame_rating <= 1200)
        .map(|breaker| breaker.item.clone())
        .collect();
    for item in &items {
        session
            .add_breaker(item, 3, Some(Role::Branch))
            .expect("commit breaker");
    }

    c.bench_function("board_summary_full_ledger", |b| {
        b.iter(|| black_box(session.board_summary().expect("summary")))
    });
}

fn bench_catalog_load(c: &mut Criterion) {
    c.bench_function("catalog_load_sample", |b| b.iter(|| black_box(sample_catalog())));
}

criterion_group!(
    benches,
    bench_select_sweep,
    bench_board_summary,
    bench_catalog_load
);
criterion_main!(benches);
