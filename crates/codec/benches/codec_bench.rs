use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use parasim_codec::{GenotypeId, MixedRadix};
use std::hint::black_box;

fn bench_codec(c: &mut Criterion) {
    // (name, radices): a small panel, a realistic resistance panel, a wide one
    let layouts: Vec<(&str, Vec<usize>)> = vec![
        ("Small", vec![2, 2, 2]),
        ("Panel", vec![2, 2, 4, 2, 2, 2, 2]),
        ("Wide", vec![3; 12]),
    ];

    for (name, radices) in layouts {
        let codec = MixedRadix::new(radices).unwrap();
        let ids: Vec<GenotypeId> = codec.ids().step_by((codec.total() / 4096).max(1)).collect();
        let decoded = codec.decode_many(&ids).unwrap();

        let mut group = c.benchmark_group(format!("Codec_{name}"));
        group.throughput(Throughput::Elements(ids.len() as u64));

        group.bench_with_input(BenchmarkId::new("decode", codec.total()), &ids, |b, ids| {
            b.iter(|| {
                for &id in ids {
                    black_box(codec.decode(black_box(id)).unwrap());
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("encode", codec.total()), &decoded, |b, v| {
            b.iter(|| {
                for alleles in v {
                    black_box(codec.encode(black_box(alleles)).unwrap());
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("decode_many", codec.total()), &ids, |b, ids| {
            b.iter(|| black_box(codec.decode_many(black_box(ids)).unwrap()))
        });

        group.bench_with_input(BenchmarkId::new("substitute", codec.total()), &ids, |b, ids| {
            b.iter(|| {
                for &id in ids {
                    black_box(codec.substitute(black_box(id), 0, 1).unwrap());
                }
            })
        });

        group.finish();
    }
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);
