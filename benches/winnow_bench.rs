use criterion::{black_box, criterion_group, criterion_main, Criterion};

use submission::{FileId, Token, TokenType};
use winnow::{fingerprint_tokens, WinnowConfig};

fn identifier_tokens(n: usize) -> Vec<Token> {
    (0..n)
        .map(|i| {
            let value = format!("ident_{}", i % 37);
            let start = i * 8;
            Token::new(start, start + value.len(), TokenType::Name, value)
        })
        .collect()
}

fn fingerprint_small_bench(c: &mut Criterion) {
    let tokens = identifier_tokens(200);
    let cfg = WinnowConfig::new().with_k(15).with_t(20);

    c.bench_function("fingerprint_tokens_200", |b| {
        b.iter(|| {
            let fps = fingerprint_tokens(FileId(0), black_box(&tokens), &cfg);
            black_box(fps);
        });
    });
}

fn fingerprint_large_bench(c: &mut Criterion) {
    let tokens = identifier_tokens(5_000);
    let cfg = WinnowConfig::new().with_k(25).with_t(35);

    c.bench_function("fingerprint_tokens_5000", |b| {
        b.iter(|| {
            let fps = fingerprint_tokens(FileId(0), black_box(&tokens), &cfg);
            black_box(fps);
        });
    });
}

criterion_group!(benches, fingerprint_small_bench, fingerprint_large_bench);
criterion_main!(benches);
