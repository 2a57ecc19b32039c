// Copyright 2026
// SPDX-License-Identifier: Apache-2.0
//
// Criterion benchmarks for deny filter performance

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use deny_filter::{Automaton, DenyFilter, FilterConfig};
use std::hint::black_box;
use std::time::Duration;

// Synthetic dictionary: deterministic pseudo-words over a small alphabet so
// shared prefixes and suffixes exercise the failure links.
fn create_dictionary(size: usize) -> Vec<String> {
    let alphabet: Vec<char> = "abcdefghijklmnopqrstuvwxyz".chars().collect();
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    (0..size)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let len = 4 + (state % 6) as usize;
            (0..len)
                .map(|i| alphabet[((state >> (i * 5)) % 26) as usize])
                .collect()
        })
        .collect()
}

fn create_clean_messages() -> Vec<&'static str> {
    vec![
        "I can help you design a scalable microservices architecture. Let's start by discussing your requirements for service discovery and load balancing.",
        "Container orchestration with Kubernetes provides automated deployment, scaling, and management of containerized applications across clusters of hosts.",
        "Для мониторинга распределённых систем рекомендую метрики, логи и трассировки.",
    ]
}

fn create_pattern_messages() -> Vec<&'static str> {
    vec![
        "This legacy codebase is crap and needs refactoring. The damn architecture makes it hard to maintain.",
        "The documentation is CRAP and outdated. Damn it, nobody can understand how to use this API.",
        "The AI model training is slow as hell. This damn implementation is crap.",
    ]
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    group.measurement_time(Duration::from_millis(500));
    group.sample_size(20);

    for size in [100, 1_000, 10_000, 50_000] {
        let words = create_dictionary(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &words, |b, words| {
            b.iter(|| Automaton::build(black_box(words)));
        });
    }

    group.finish();
}

fn bench_lookups(c: &mut Criterion) {
    let mut words = create_dictionary(10_000);
    words.extend(["crap", "damn", "hell"].map(String::from));
    let filter = DenyFilter::from_words(FilterConfig::default(), &words);

    let mut group = c.benchmark_group("lookups");
    group.measurement_time(Duration::from_millis(500));
    group.warm_up_time(Duration::from_millis(100));
    group.sample_size(50);

    for (i, message) in create_clean_messages().iter().enumerate() {
        group.throughput(Throughput::Bytes(message.len() as u64));
        group.bench_with_input(BenchmarkId::new("exists_clean", i), message, |b, msg| {
            b.iter(|| filter.exists(black_box(msg)));
        });
        group.bench_with_input(BenchmarkId::new("filter_clean", i), message, |b, msg| {
            b.iter(|| filter.filter(black_box(msg)));
        });
    }

    for (i, message) in create_pattern_messages().iter().enumerate() {
        group.throughput(Throughput::Bytes(message.len() as u64));
        group.bench_with_input(BenchmarkId::new("exists_match", i), message, |b, msg| {
            b.iter(|| filter.exists(black_box(msg)));
        });
        group.bench_with_input(BenchmarkId::new("filter_match", i), message, |b, msg| {
            b.iter(|| filter.filter(black_box(msg)));
        });
    }

    group.finish();
}

fn bench_large_text(c: &mut Criterion) {
    let filter = DenyFilter::from_words(FilterConfig::default(), ["crap", "damn", "hell"]);
    let mut group = c.benchmark_group("large_text");
    group.measurement_time(Duration::from_millis(500));

    for size in [1_000, 10_000, 100_000] {
        let mut text = "word ".repeat(size / 5);
        text.push_str("damn");
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| filter.filter(black_box(text)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build, bench_lookups, bench_large_text);
criterion_main!(benches);
