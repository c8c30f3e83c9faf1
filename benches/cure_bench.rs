// Criterion benchmarks for curing and matching.
//
// Run with `cargo bench --bench cure`.

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};

use sanitext::{Options, cure};

// A varied pool so the hot paths (ASCII passthrough, table lookups, NFD,
// bidi) all get exercised instead of one branch dominating.
const POOL: &[&str] = &[
    "plain ascii text, nothing to cure here at all",
    "vＥⓡ𝔂 𝔽𝕌Ňℕｙ ţ乇𝕏𝓣 and some more obfuscation",
    "déjà vu café naïve — accents everywhere",
    "ｆｕｌｌｗｉｄｔｈ ｔｅｘｔ ｗｉｔｈ ①②③ ⓝⓤⓜⓑⓔⓡⓢ",
    "зеркальные буквы и кириллица вперемешку",
    "h̸̡̪̯ẻ̶l̷l̶o̵ z̴a̸l̵g̶o̷ decoration",
    "עברית עם טקסט דו-כיווני abc בתוך שורה",
    "🇫🇺🇳🇳🇾 emoji spelling with 🆒 🆔 🔟",
];

fn corpus(size: usize) -> String {
    let mut out = String::with_capacity(size + 64);
    let mut i = 0;
    while out.len() < size {
        out.push_str(POOL[i % POOL.len()]);
        out.push(' ');
        i += 1;
    }
    out
}

fn bench_cure(c: &mut Criterion) {
    let mut group = c.benchmark_group("cure");

    for size in [1 << 10, 16 << 10] {
        let input = corpus(size);
        group.throughput(Throughput::Bytes(input.len() as u64));

        group.bench_function(format!("default/{}kb", size >> 10), |b| {
            b.iter(|| cure(black_box(&input), Options::default()).unwrap());
        });
        group.bench_function(format!("pure_homoglyph/{}kb", size >> 10), |b| {
            b.iter(|| cure(black_box(&input), Options::PURE_HOMOGLYPH).unwrap());
        });
        group.bench_function(format!("no_bidi/{}kb", size >> 10), |b| {
            b.iter(|| {
                cure(black_box(&input), Options::default().disable_bidi()).unwrap()
            });
        });
    }

    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("queries");

    let input = corpus(16 << 10);
    let cured = cure(&input, Options::default()).unwrap();

    group.bench_function("find", |b| {
        b.iter(|| cured.find(black_box("funny")));
    });
    group.bench_function("contains", |b| {
        b.iter(|| cured.contains(black_box("obfuscation")));
    });
    group.bench_function("find_multiple", |b| {
        b.iter(|| cured.find_multiple(black_box(&["funny", "cool", "hello"])));
    });

    group.finish();
}

fn bench_mutations(c: &mut Criterion) {
    let mut group = c.benchmark_group("mutations");

    let input = corpus(4 << 10);
    let cured = cure(&input, Options::default()).unwrap();

    group.bench_function("censor", |b| {
        b.iter_batched(
            || cured.clone(),
            |mut text| text.censor(black_box("funny"), '*').unwrap(),
            criterion::BatchSize::SmallInput,
        );
    });
    group.bench_function("replace", |b| {
        b.iter_batched(
            || cured.clone(),
            |mut text| text.replace(black_box("funny"), "serious").unwrap(),
            criterion::BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_cure, bench_queries, bench_mutations);
criterion_main!(benches);
