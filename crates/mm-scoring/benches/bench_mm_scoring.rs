use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mm_scoring::{encode, score, LinearModel, ModelKind};

fn bench_encode_and_score(c: &mut Criterion) {
    let model = LinearModel {
        kind: ModelKind::Logistic,
        classes: vec!["free".into(), "premium".into()],
        coefficients: vec![0.4, 0.1, 0.8, 1.2, 0.2],
        intercept: -1.0,
    };

    c.bench_function("encode_1000", |b| {
        b.iter(|| {
            for _ in 0..1000 {
                black_box(encode("Energetic", "Early Morning", "Pop, K-pop", "Daily", "Female"));
            }
        })
    });

    c.bench_function("encode_and_score_1000", |b| {
        b.iter(|| {
            for _ in 0..1000 {
                let v = encode("Calm", "Evening", "Jazz", "Weekly", "Male");
                black_box(score(&model, &v));
            }
        })
    });
}

criterion_group!(benches, bench_encode_and_score);
criterion_main!(benches);
