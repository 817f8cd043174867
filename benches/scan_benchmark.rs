use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

use cc_explorer::{Aggregator, ClaudePaths, CommandScanner, ScanOptions, SubagentScanner};

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// A project with `count` commands spread over a few namespaces, the same
/// number of sub-agents, and some noise files the matcher has to skip.
fn setup_project(count: usize) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    write(&root.join("CLAUDE.md"), "# Project memory\n");
    write(&root.join(".claude/settings.json"), r#"{"permissions": {"allow": []}}"#);

    for i in 0..count {
        let namespace = format!("group{}", i % 5);
        write(
            &root.join(format!(".claude/commands/{namespace}/cmd_{i}.md")),
            &format!("# Command {i}\n\nUsage: /cmd_{i} [target] --dry-run\n"),
        );
        write(
            &root.join(format!(".claude/agents/agent_{i}.md")),
            &format!(
                "---\nname: agent_{i}\ndescription: Benchmark agent {i}\ntools: [Read, Grep, Glob]\n---\n\nYou are agent {i}.\n"
            ),
        );
        write(&root.join(format!("src/module_{i}/lib.rs")), "fn main() {}\n");
        write(&root.join(format!("node_modules/pkg_{i}/CLAUDE.md")), "# vendored\n");
    }

    temp_dir
}

fn bench_command_scanner(c: &mut Criterion) {
    let home = TempDir::new().unwrap();
    let mut group = c.benchmark_group("command_scanner");

    for count in [10, 100, 500] {
        let project = setup_project(count);
        let scanner = CommandScanner::new(ClaudePaths::new(home.path()));

        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| black_box(scanner.scan(Some(project.path()), &ScanOptions::default())))
        });
    }

    group.finish();
}

fn bench_subagent_scanner(c: &mut Criterion) {
    let home = TempDir::new().unwrap();
    let project = setup_project(100);
    let scanner = SubagentScanner::new(ClaudePaths::new(home.path()));

    c.bench_function("subagent_scanner_100", |b| {
        b.iter(|| black_box(scanner.scan(Some(project.path()), &ScanOptions::default())))
    });
}

fn bench_scan_all(c: &mut Criterion) {
    let home = TempDir::new().unwrap();
    let project = setup_project(100);
    let aggregator = Aggregator::new(ClaudePaths::new(home.path()));
    let runtime = tokio::runtime::Runtime::new().unwrap();

    c.bench_function("scan_all_100", |b| {
        b.iter(|| {
            black_box(runtime.block_on(
                aggregator.scan_all(Some(project.path().to_path_buf()), ScanOptions::default()),
            ))
        })
    });
}

criterion_group!(
    benches,
    bench_command_scanner,
    bench_subagent_scanner,
    bench_scan_all
);
criterion_main!(benches);
