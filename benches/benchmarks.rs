//! Performance benchmarks for wintree

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use std::path::PathBuf;
use wintree::test_utils::TestDir;
use wintree::{FileMatcher, FilterConfig, RenderConfig, TreeRenderer, expand_braces};

/// Build a tree of `dirs` directories, each holding `files_per_dir` files of
/// mixed extensions, nested two levels deep.
fn create_test_tree(dirs: usize, files_per_dir: usize) -> TestDir {
    let dir = TestDir::new();
    let extensions = ["rs", "go", "js", "md", "log"];
    for d in 0..dirs {
        for f in 0..files_per_dir {
            let ext = extensions[f % extensions.len()];
            dir.add_file(&format!("group_{}/dir_{}/file_{}.{}", d % 4, d, f, ext), "");
        }
    }
    dir
}

fn bench_expand_braces(c: &mut Criterion) {
    c.bench_function("expand_braces", |b| {
        b.iter(|| expand_braces(black_box("*.{go,js,py,java,rs,md}")))
    });
}

fn bench_matcher(c: &mut Criterion) {
    let dir = create_test_tree(40, 25);

    c.bench_function("matcher_no_filters", |b| {
        let matcher = FileMatcher::new(FilterConfig::default());
        b.iter(|| matcher.find_matches(black_box(dir.path())).unwrap())
    });

    c.bench_function("matcher_include_exclude", |b| {
        let matcher = FileMatcher::new(FilterConfig::from_patterns(&["*.log"], &["*.{rs,go}"]));
        b.iter(|| matcher.find_matches(black_box(dir.path())).unwrap())
    });

    c.bench_function("matcher_directory_include", |b| {
        let matcher = FileMatcher::new(FilterConfig::from_patterns(&["*.md"], &["group_1"]));
        b.iter(|| matcher.find_matches(black_box(dir.path())).unwrap())
    });
}

fn bench_renderer(c: &mut Criterion) {
    let root = PathBuf::from("/bench/root");
    let paths: Vec<PathBuf> = (0..2000)
        .map(|i| root.join(format!("a_{}/b_{}/c_{}/file_{}.rs", i % 7, i % 13, i % 29, i)))
        .collect();
    let renderer = TreeRenderer::new(RenderConfig::default());

    c.bench_function("render_2000_paths", |b| {
        b.iter(|| renderer.render(black_box(&root), black_box(&paths)))
    });
}

criterion_group!(benches, bench_expand_braces, bench_matcher, bench_renderer);
criterion_main!(benches);
