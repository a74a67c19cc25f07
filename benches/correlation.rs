use criterion::{criterion_group, criterion_main, Criterion};
use profloc::{masked_pearson, GridSampler, ReferenceLocator, Volume4, VolumeView};
use std::hint::black_box;

fn make_store(zones: usize, shape: [usize; 3]) -> (Volume4<f64>, Volume4<bool>) {
    let [d, h, w] = shape;
    let len = zones * d * h * w;
    let mut data = Vec::with_capacity(len);
    let mut valid = Vec::with_capacity(len);
    for i in 0..len {
        let value = (((i * 13) ^ (i / 7)) % 251) as f64;
        data.push(value);
        valid.push(i % 17 != 0);
    }
    (
        Volume4::from_vec(data, [zones, d, h, w]).unwrap(),
        Volume4::from_vec(valid, [zones, d, h, w]).unwrap(),
    )
}

fn bench_masked_pearson(c: &mut Criterion) {
    let shape = [9, 9, 9];
    let (profiles, masks) = make_store(2, shape);
    let a = profiles.zone(0).unwrap();
    let a_mask = masks.zone(0).unwrap();
    let b = profiles.zone(1).unwrap();
    let b_mask = masks.zone(1).unwrap();

    c.bench_function("masked_pearson_9x9x9", |bench| {
        bench.iter(|| {
            masked_pearson(
                black_box(a),
                black_box(a_mask),
                black_box(b),
                black_box(b_mask),
            )
        })
    });
}

fn bench_locator_query(c: &mut Criterion) {
    let shape = [9, 9, 9];
    let sampler = GridSampler::new([2463.0, 2527.0], [0.0, 90.0], [5, 5, 4]).unwrap();
    let (profiles, masks) = make_store(100, shape);
    let locator = ReferenceLocator::new(profiles, masks, sampler).unwrap();

    let obs: Vec<f64> = (0..729).map(|i| ((i * 31) % 113) as f64).collect();
    let obs_mask = vec![true; 729];
    let obs_view = VolumeView::from_slice(&obs, shape).unwrap();
    let obs_mask_view = VolumeView::from_slice(&obs_mask, shape).unwrap();

    c.bench_function("locator_correlation_at", |bench| {
        bench.iter(|| {
            locator.correlation_at(
                black_box(obs_view),
                black_box(obs_mask_view),
                black_box([1200.0, 600.0, 45.0]),
            )
        })
    });
}

criterion_group!(benches, bench_masked_pearson, bench_locator_query);
criterion_main!(benches);
