use criterion::{criterion_group, criterion_main, Criterion};

use rota::perm::{arrange, max_randomizer, permute, rank, PermutationOrder, Permutator};

fn criterion_benchmark(c: &mut Criterion) {
    // sanity check
    let last = Permutator::new(6, PermutationOrder::NaturalOrder)
        .unwrap()
        .into_iter()
        .last()
        .unwrap();
    assert_eq!(vec![5, 4, 3, 2, 1, 0], last);

    fn bench_arrange(c: &mut Criterion, len: usize) {
        let max = max_randomizer(len).unwrap();
        let mut indices = vec![0; len];
        c.bench_function(&format!("cri_perm_arrange_{len}"), |b| {
            b.iter(|| {
                for seed in [0, max / 3, max / 2, max] {
                    arrange(seed, PermutationOrder::NaturalOrder, &mut indices).unwrap();
                }
            });
        });
    }
    bench_arrange(c, 8);
    bench_arrange(c, 20);

    let items: Vec<_> = (0..20).map(|item| format!("item-{item}")).collect();
    let max = max_randomizer(items.len()).unwrap();
    c.bench_function("cri_perm_permute_20", |b| {
        b.iter(|| permute(max / 2, &items, PermutationOrder::LeastSignificantFirst).unwrap());
    });

    let mut indices = vec![0; 20];
    arrange(max / 2, PermutationOrder::NaturalOrder, &mut indices).unwrap();
    c.bench_function("cri_perm_rank_20", |b| {
        b.iter(|| rank(&indices, PermutationOrder::NaturalOrder).unwrap());
    });

    c.bench_function("cri_perm_enumerate_8", |b| {
        b.iter(|| {
            Permutator::new(8, PermutationOrder::NaturalOrder)
                .unwrap()
                .into_iter()
                .count()
        });
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
