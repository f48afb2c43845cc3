// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Parse and validation throughput benchmarks
//!
//! Measures:
//! - Parsing alone, per database type
//! - Validation of an already parsed statement
//! - The combined `validate_sql` path

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use queryvis_sql_parser::SqlParser;
use queryvis_sql_validation::{SqlValidator, validate_sql};
use queryvis_test_utils::SqlFixtures;

const DATABASES: &[&str] = &["postgresql", "mysql"];

fn bench_queries() -> Vec<(&'static str, &'static str)> {
    vec![
        ("simple", SqlFixtures::simple_select()),
        ("join", SqlFixtures::inner_join()),
        ("having", SqlFixtures::group_by_having()),
        ("window", SqlFixtures::window_over_aggregate()),
        ("cte", SqlFixtures::with_cte()),
    ]
}

fn bench_parse(c: &mut Criterion) {
    let parser = SqlParser::new();

    for db_type in DATABASES {
        let mut group = c.benchmark_group(format!("parse/{}", db_type));

        for (name, sql) in bench_queries() {
            group.throughput(Throughput::Bytes(sql.len() as u64));
            group.bench_function(BenchmarkId::from_parameter(name), |b| {
                b.iter(|| {
                    let stmt = parser.parse_select(black_box(sql), db_type);
                    assert!(stmt.is_ok(), "Parsing failed");
                    black_box(stmt);
                });
            });
        }

        group.finish();
    }
}

fn bench_validate(c: &mut Criterion) {
    let parser = SqlParser::new();
    let validator = SqlValidator::new();
    let mut group = c.benchmark_group("validate");

    for (name, sql) in bench_queries() {
        let stmt = parser.parse_select(sql, "postgresql").unwrap();

        group.bench_function(BenchmarkId::from_parameter(name), |b| {
            b.iter(|| black_box(validator.validate(black_box(&stmt))));
        });
    }

    group.finish();
}

fn bench_validate_sql(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate_sql");

    for (name, sql) in bench_queries() {
        group.throughput(Throughput::Bytes(sql.len() as u64));
        group.bench_function(BenchmarkId::from_parameter(name), |b| {
            b.iter(|| black_box(validate_sql(black_box(sql), "postgresql")));
        });
    }

    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default().sample_size(100);
    targets =
        bench_parse,
        bench_validate,
        bench_validate_sql
);

criterion_main!(benches);
