use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mm_cluster::{map_cluster, ClusterFeatures, ClusterTable};
use rand::Rng;

const VOCAB: &[&str] = &[
    "Morning", "Afternoon", "Evening", "Night", "Pop", "Rap", "Jazz", "EDM", "Folk",
    "Energetic", "Calm", "Relaxed", "Excited", "Podcast", "Lo-fi", "Indie", "Classical",
];

fn random_table(clusters: usize, features: usize) -> ClusterTable {
    let mut rng = rand::thread_rng();
    ClusterTable::from_entries((0..clusters).map(|i| {
        let names = (0..features)
            .map(|_| VOCAB[rng.gen_range(0..VOCAB.len())].to_string())
            .collect();
        (i, ClusterFeatures::List(names))
    }))
}

fn bench_map_cluster(c: &mut Criterion) {
    let small = random_table(8, 10);
    let large = random_table(256, 20);

    c.bench_function("map_cluster_8x10", |b| {
        b.iter(|| black_box(map_cluster("Morning", "Energetic", "Pop, EDM, Dance", &small)))
    });

    c.bench_function("map_cluster_256x20", |b| {
        b.iter(|| black_box(map_cluster("Night", "Excited", "Rap, Hip Hop", &large)))
    });
}

criterion_group!(benches, bench_map_cluster);
criterion_main!(benches);
