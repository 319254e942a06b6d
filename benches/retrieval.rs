//! Benchmarks for the retrieval path: embedding, table build, and
//! nearest-chunk lookup over corpora of increasing size.

use std::hint::black_box;

use criterion::criterion_group;
use criterion::criterion_main;
use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::Throughput;
use docchat::domain::models::Chunk;
use docchat::domain::ports::EmbeddingService;
use docchat::infrastructure::corpus::split_paragraphs;
use docchat::infrastructure::vector::{CharHistogramEmbedder, EmbeddingTable};

const WORDS: &[&str] = &[
    "apple", "banana", "bread", "coffee", "espresso", "flour", "starter", "oven", "crust",
    "cinnamon", "sugar", "butter", "yeast", "water", "salt", "dough",
];

/// Generate `count` paragraphs of pseudo-text
fn generate_corpus(count: usize) -> String {
    (0..count)
        .map(|i| {
            (0..40)
                .map(|j| WORDS[(i * 7 + j * 3) % WORDS.len()])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn generate_chunks(count: usize) -> Vec<Chunk> {
    split_paragraphs(&generate_corpus(count))
}

fn bench_embed(c: &mut Criterion) {
    let mut group = c.benchmark_group("embed");
    let text = generate_corpus(1);

    for dimensions in [128usize, 256, 4096] {
        let embedder = CharHistogramEmbedder::new(dimensions).unwrap();
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(dimensions), &text, |b, text| {
            b.iter(|| embedder.embed(black_box(text)).unwrap());
        });
    }

    group.finish();
}

fn bench_split(c: &mut Criterion) {
    let mut group = c.benchmark_group("split_paragraphs");

    for count in [10usize, 100, 1000] {
        let corpus = generate_corpus(count);
        group.throughput(Throughput::Bytes(corpus.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &corpus, |b, corpus| {
            b.iter(|| split_paragraphs(black_box(corpus)));
        });
    }

    group.finish();
}

fn bench_table_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_build");
    let embedder = CharHistogramEmbedder::default();

    for count in [10usize, 100, 1000] {
        let chunks = generate_chunks(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &chunks, |b, chunks| {
            b.iter(|| EmbeddingTable::build(&embedder, black_box(chunks)).unwrap());
        });
    }

    group.finish();
}

fn bench_nearest(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest");
    let embedder = CharHistogramEmbedder::default();
    let query = embedder.embed("what goes into sourdough bread?").unwrap();

    for count in [10usize, 100, 1000, 10_000] {
        let table = EmbeddingTable::build(&embedder, &generate_chunks(count)).unwrap();
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &table, |b, table| {
            b.iter(|| table.nearest(black_box(&query)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_embed,
    bench_split,
    bench_table_build,
    bench_nearest
);
criterion_main!(benches);
