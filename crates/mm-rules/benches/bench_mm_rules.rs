use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mm_rules::config::default_rule_table;
use rand::seq::SliceRandom;

fn bench_recommend(c: &mut Criterion) {
    let table = default_rule_table();
    let slots = ["Morning", "Early Morning", "Afternoon", "Evening", "Night"];
    let moods = ["Upbeat", "Energetic", "Relaxed", "Calm", "Sadness or melancholy", "Reflective", "Excited", "Any"];
    let genres = ["Pop, EDM", "jazz", "Acoustic, Folk", "podcast", "lo-fi beats", "", "Hip Hop, Rap", "classical"];

    let mut rng = rand::thread_rng();
    let queries: Vec<(&str, &str, &str)> = (0..1000)
        .map(|_| {
            (
                *slots.choose(&mut rng).unwrap(),
                *moods.choose(&mut rng).unwrap(),
                *genres.choose(&mut rng).unwrap(),
            )
        })
        .collect();

    c.bench_function("recommend_1000_random", |b| {
        b.iter(|| {
            for (slot, mood, genre) in &queries {
                black_box(table.recommend(slot, mood, genre));
            }
        })
    });

    c.bench_function("recommend_1000_default_fallthrough", |b| {
        b.iter(|| {
            for _ in 0..1000 {
                black_box(table.recommend("Afternoon", "Any", "jazz"));
            }
        })
    });
}

criterion_group!(benches, bench_recommend);
criterion_main!(benches);
