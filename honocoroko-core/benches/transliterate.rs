use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use honocoroko_core::{from_honocoroko_with, to_honocoroko_with, NullSink, TransliterationOptions};

const SHORT_TEXT: &str = "hanacaraka datasawala padhajayanya magabathanga";

fn bench_transliterate(c: &mut Criterion) {
    let mut group = c.benchmark_group("transliterate");
    let options = TransliterationOptions::default();

    for &repeat in &[1usize, 10, 100] {
        let latin = SHORT_TEXT.repeat(repeat);
        let javanese = to_honocoroko_with(&latin, &options, &NullSink);
        group.throughput(Throughput::Bytes(latin.len() as u64));

        group.bench_with_input(
            BenchmarkId::new("to_honocoroko", latin.len()),
            &latin,
            |b, text| {
                b.iter(|| {
                    let res = to_honocoroko_with(text, &options, &NullSink);
                    criterion::black_box(res);
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("from_honocoroko", latin.len()),
            &javanese,
            |b, text| {
                b.iter(|| {
                    let res = from_honocoroko_with(text, &options, &NullSink);
                    criterion::black_box(res);
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_transliterate);
criterion_main!(benches);
