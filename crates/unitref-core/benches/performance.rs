// Rust guideline compliant 2026-02-06

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use unitref_core::{FilterMode, Resolver};

fn build_identifiers(environments: usize, applications: usize) -> Vec<String> {
    let mut identifiers = Vec::with_capacity(environments * applications + applications);
    for app in 0..applications {
        identifiers.push(format!("application-{}.json", app));
    }
    for env in 0..environments {
        for app in 0..applications {
            identifiers.push(format!("environment-{}/application-{}.json", env, app));
        }
    }
    identifiers
}

fn bench_find_matches(c: &mut Criterion) {
    let identifiers = build_identifiers(20, 100);
    let resolver = Resolver::new();
    c.bench_function("find_matches_2100", |b| {
        b.iter(|| black_box(resolver.find_matches("env7/app42", &identifiers, true)))
    });
}

fn bench_exact_group(c: &mut Criterion) {
    let identifiers = build_identifiers(20, 100);
    let resolver = Resolver::new();
    c.bench_function("exact_group_2100", |b| {
        b.iter(|| {
            black_box(resolver.find_exact_group_matches(
                FilterMode::ByApplication,
                "application-42",
                &identifiers,
            ))
        })
    });
}

fn bench_search_fallback(c: &mut Criterion) {
    let identifiers = build_identifiers(20, 100);
    let resolver = Resolver::new();
    c.bench_function("search_fallback_2100", |b| {
        b.iter(|| black_box(resolver.search_for_applications("app42", &identifiers)))
    });
}

criterion_group!(
    benches,
    bench_find_matches,
    bench_exact_group,
    bench_search_fallback
);
criterion_main!(benches);
