use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use lodestone_core::{Matrix, Vector};
use lodestone_models::logistic_regression::{LogisticRegression, Penalty};
use std::hint::black_box;

fn make_classification_data(rows: usize, cols: usize) -> (Matrix, Vector) {
    let x = Matrix::from_fn(rows, cols, |i, j| {
        let base = ((i + 3 * j) % 101) as f32 * 0.01;
        let class_offset = (i % 2) as f32 * 2.0;
        base + class_offset
    });
    let y = Vector::from_iterator(rows, (0..rows).map(|i| (i % 2) as f32));
    (x, y)
}

fn bench_logistic_regression(c: &mut Criterion) {
    let (x, y) = make_classification_data(512, 8);

    let mut group = c.benchmark_group("logistic_regression");
    group.bench_function("fit_512x8", |b| {
        b.iter_batched(
            || (x.clone(), y.clone()),
            |(x_local, y_local)| {
                let fitted = LogisticRegression::new()
                    .max_iter(50)
                    .fit(black_box(&x_local), black_box(&y_local))
                    .unwrap();
                black_box(fitted);
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("fit_l2_512x8", |b| {
        b.iter_batched(
            || (x.clone(), y.clone()),
            |(x_local, y_local)| {
                let fitted = LogisticRegression::new()
                    .penalty(Penalty::L2(1.0))
                    .max_iter(50)
                    .fit(black_box(&x_local), black_box(&y_local))
                    .unwrap();
                black_box(fitted);
            },
            BatchSize::SmallInput,
        )
    });

    let fitted = LogisticRegression::new().max_iter(50).fit(&x, &y).unwrap();
    group.bench_function("predict_512x8", |b| {
        b.iter(|| {
            let preds = fitted.predict(black_box(&x)).unwrap();
            black_box(preds);
        })
    });
    group.finish();
}

criterion_group!(benches, bench_logistic_regression);
criterion_main!(benches);
