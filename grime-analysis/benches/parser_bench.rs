//! Parser and analyzer benchmarks.
//!
//! Run with: cargo bench -p grime-analysis --bench parser_bench

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use grime_analysis::analyzers::{CodeQualityAnalyzer, PatternAnalyzer};
use grime_analysis::parsers::{Language, ParserManager};
use grime_core::types::{FileCategory, FileInfo};

/// Generate sample source code for a given language.
fn sample_source(lang: Language, idx: usize) -> (String, String) {
    match lang {
        Language::TypeScript => (
            format!("file_{idx}.ts"),
            format!(
                r#"export interface Config_{idx} {{ name: string; value: number; }}
export function process_{idx}(config: Config_{idx}): string {{
    const result = config.name + String(config.value);
    return result.toUpperCase();
}}
export async function fetch_{idx}(url: string): Promise<Response> {{
    return await fetch(url);
}}
"#
            ),
        ),
        Language::Tsx => (
            format!("file_{idx}.tsx"),
            format!(
                r#"export function Card_{idx}(props: {{ title: string }}) {{
    return <div className="card">{{props.title}}</div>;
}}
"#
            ),
        ),
        Language::JavaScript => (
            format!("file_{idx}.js"),
            format!(
                r#"function compute_{idx}(first, second) {{
    return first + second * {idx};
}}
module.exports = {{ compute_{idx} }};
"#
            ),
        ),
    }
}

fn parse_per_language(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_per_language");
    group.sample_size(20);

    for lang in [Language::TypeScript, Language::Tsx, Language::JavaScript] {
        // Pre-generate 100 source files
        let sources: Vec<(PathBuf, String)> = (0..100)
            .map(|i| {
                let (name, source) = sample_source(lang, i);
                (PathBuf::from(name), source)
            })
            .collect();

        group.bench_with_input(
            BenchmarkId::new("parse_100", lang.name()),
            &sources,
            |b, sources| {
                let mut manager = ParserManager::with_warning_logs(false);
                b.iter(|| {
                    for (path, source) in sources {
                        let _ = manager.parse_source(source, path);
                    }
                });
            },
        );
    }

    group.finish();
}

const ANALYSIS_SAMPLE: &str = r#"
export function reviewOrder(order: Order, user: User): Decision {
  if (order.total > 0) {
    if (user.verified) {
      if (order.items.length > 0) {
        if (!order.flagged) {
          return approve(order);
        }
      }
    }
  }
  const ok = user.active && user.verified && !user.suspended && order.total > 0;
  // const legacyTotal = order.items.reduce((a, b) => a + b.price, 0);
  // if (legacyTotal !== order.total) {
  //   reconcile(order, legacyTotal);
  // }
  return reject(order, ok);
}
"#;

fn code_quality_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("code_quality");
    group.sample_size(50);

    let mut manager = ParserManager::with_warning_logs(false);
    let tree = manager
        .parse_source(ANALYSIS_SAMPLE, Path::new("bench.ts"))
        .unwrap();
    let analyzer = CodeQualityAnalyzer::new().unwrap();
    let file = FileInfo {
        path: PathBuf::from("/bench/bench.ts"),
        relative_path: "bench.ts".to_string(),
        extension: "ts".to_string(),
        size: ANALYSIS_SAMPLE.len() as u64,
        last_modified: SystemTime::now(),
        category: FileCategory::Service,
    };

    group.bench_function("analyze_single_file", |b| {
        b.iter(|| analyzer.analyze(&file, &tree).unwrap());
    });

    group.finish();
}

criterion_group!(benches, parse_per_language, code_quality_analysis);
criterion_main!(benches);
