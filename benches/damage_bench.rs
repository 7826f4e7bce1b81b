use criterion::{black_box, criterion_group, criterion_main, Criterion};

use csx_armory::catalog::Catalog;
use csx_armory::damage::{compare_engagement, TargetProfile, Weapon};
use csx_armory::report::{rank_weapons, RankKey};

fn bench_engagement(c: &mut Criterion) {
    let weapon = Weapon::ak74();
    let target = TargetProfile::new(100, 40.0).unwrap();

    c.bench_function("compare_engagement", |b| {
        b.iter(|| compare_engagement(black_box(&weapon), black_box(&target), black_box(250.0)))
    });
}

fn bench_ranking(c: &mut Criterion) {
    let catalog = Catalog::standard();
    let target = TargetProfile::default();

    c.bench_function("rank_weapons", |b| {
        b.iter(|| rank_weapons(&catalog, &target, black_box(50.0), RankKey::BodyTimeToKill))
    });
}

criterion_group!(benches, bench_engagement, bench_ranking);
criterion_main!(benches);
