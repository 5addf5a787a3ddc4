//! Benchmarks for the table sort engine
//!
//! Run with: cargo bench

use adboard::table::{Row, SortEngine, Table};
use adboard::table::sample::search_terms_headers;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn create_table(rows: usize) -> Table {
    let builder = Table::builder("searchTermsTable").headers(search_terms_headers());
    (0..rows)
        .fold(builder, |builder, i| {
            let impressions = (i * 7919) % 100_000;
            let cells = vec![
                String::new(),
                format!("search term {}", (i * 31) % rows),
                ["Exact", "Phrase", "Broad"][i % 3].to_string(),
                "None".to_string(),
                "Campaign".to_string(),
                "Ad group".to_string(),
                format!("{},{:03}", impressions / 1000, impressions % 1000),
                format!("{}", impressions / 20),
                format!("{:.2}%", (i % 1000) as f64 / 100.0),
                format!("${:.2}", (i % 500) as f64 / 100.0),
                format!("${},{:03}.{:02}", i / 1000, i % 1000, i % 100),
            ];
            builder.row(Row::new(cells))
        })
        .row(Row::summary(vec![String::new(), "Total: Search terms".to_string()]))
        .build()
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");

    for size in [100, 1000, 10000] {
        let table = create_table(size);
        group.throughput(Throughput::Elements(size as u64));

        for column in ["search-term", "impressions", "cost"] {
            group.bench_function(format!("{}_{}", column, size), |b| {
                b.iter_batched(
                    || (table.clone(), SortEngine::new()),
                    |(mut table, mut engine)| {
                        engine.sort_by(&mut table, black_box(column));
                        table
                    },
                    criterion::BatchSize::SmallInput,
                )
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_sort);
criterion_main!(benches);
