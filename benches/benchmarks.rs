//! Performance benchmarks for repo2md

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use repo2md::{IgnoreRules, TreeWalker, render_contents, render_structure};
use std::fs;
use tempfile::TempDir;

fn create_repo_with_files(file_count: usize) -> TempDir {
    let dir = TempDir::new().unwrap();

    fs::create_dir_all(dir.path().join("src/nested")).unwrap();
    for i in 0..file_count {
        let name = format!("src/nested/file_{}.rs", i);
        fs::write(dir.path().join(&name), format!("fn f{}() {{}}\n", i)).unwrap();
    }
    fs::write(dir.path().join("README.md"), "# bench repo\n").unwrap();
    fs::write(dir.path().join(".gitignore"), "*.log\ntarget/\n").unwrap();

    dir
}

fn bench_rules_compile(c: &mut Criterion) {
    let patterns = [
        "*.log",
        "target/",
        "node_modules",
        "/build",
        "docs/**/*.md",
        "!keep.log",
    ];

    c.bench_function("rules_compile", |b| {
        b.iter(|| IgnoreRules::compile(black_box(patterns)))
    });
}

fn bench_rules_matches(c: &mut Criterion) {
    let rules = IgnoreRules::compile(["*.log", "target/", "docs/**/*.md"]);

    let mut group = c.benchmark_group("rules_matches");

    group.bench_function("matched_file", |b| {
        b.iter(|| rules.matches(black_box("logs/debug.log"), false))
    });

    group.bench_function("unmatched_file", |b| {
        b.iter(|| rules.matches(black_box("src/main.rs"), false))
    });

    group.bench_function("matched_directory", |b| {
        b.iter(|| rules.matches(black_box("target"), true))
    });

    group.finish();
}

fn bench_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("walk");

    let small_repo = create_repo_with_files(10);
    group.bench_function("small_repo_10_files", |b| {
        let walker = TreeWalker::new(IgnoreRules::load(small_repo.path()));
        b.iter(|| walker.walk(black_box(small_repo.path())))
    });

    let medium_repo = create_repo_with_files(100);
    group.bench_function("medium_repo_100_files", |b| {
        let walker = TreeWalker::new(IgnoreRules::load(medium_repo.path()));
        b.iter(|| walker.walk(black_box(medium_repo.path())))
    });

    let large_repo = create_repo_with_files(500);
    group.bench_function("large_repo_500_files", |b| {
        let walker = TreeWalker::new(IgnoreRules::load(large_repo.path()));
        b.iter(|| walker.walk(black_box(large_repo.path())))
    });

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let repo = create_repo_with_files(100);
    let walker = TreeWalker::new(IgnoreRules::load(repo.path()));
    let map = walker.walk(repo.path()).unwrap();

    let mut group = c.benchmark_group("render");

    group.bench_function("structure_100_files", |b| {
        b.iter(|| render_structure(black_box(&map)))
    });

    group.bench_function("contents_100_files", |b| {
        b.iter(|| render_contents(black_box(repo.path()), black_box(&map)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_rules_compile,
    bench_rules_matches,
    bench_walk,
    bench_render,
);
criterion_main!(benches);
