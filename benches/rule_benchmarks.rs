//! Performance benchmarks for the Vacation Scheduling Engine.
//!
//! This benchmark suite verifies that the rule evaluation meets its
//! performance targets:
//! - Single range validation: < 10μs mean
//! - Validation against a fully booked year: < 100μs mean
//! - Merge-reschedule planning: < 100μs mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::{Duration, NaiveDate};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;
use uuid::Uuid;

use vacation_engine::config::VacationPolicy;
use vacation_engine::models::{Allotment, AllotmentStatus, RangeKind, VacationRange};
use vacation_engine::rules::{DateInterval, find_overlap, plan_merge, validate_range};

fn make_date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
}

fn empty_allotment() -> Allotment {
    Allotment {
        id: Uuid::new_v4(),
        employee_id: "emp_bench_001".to_string(),
        period_label: "2025-2026".to_string(),
        period_start: make_date("2025-01-10"),
        period_end: make_date("2026-01-10"),
        total_days: Decimal::from(30),
        advance_days_used: Decimal::ZERO,
        flexible_days_available: Decimal::from(7),
        flexible_days_used: Decimal::ZERO,
        block_days_available: Decimal::from(23),
        block_days_used: Decimal::ZERO,
        status: AllotmentStatus::Pending,
        ranges: vec![],
    }
}

/// Books `count` three-day ranges, one per week starting Monday 2025-01-13.
fn allotment_with_ranges(count: usize) -> Allotment {
    let mut allotment = empty_allotment();
    let first_monday = make_date("2025-01-13");

    for week in 0..count {
        let start = first_monday + Duration::days(7 * week as i64);
        let end = start + Duration::days(2);
        let range = VacationRange::builder(
            allotment.id,
            allotment.employee_id.clone(),
            start,
            end,
            3,
            RangeKind::Flexible,
        )
        .build()
        .expect("bench range is valid");
        allotment.ranges.push(range);
    }

    allotment
}

fn bench_validation(c: &mut Criterion) {
    let policy = VacationPolicy::default();
    let mut group = c.benchmark_group("validate_range");

    for range_count in [0usize, 10, 50] {
        let allotment = allotment_with_ranges(range_count);
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(
            BenchmarkId::from_parameter(range_count),
            &allotment,
            |b, allotment| {
                b.iter(|| {
                    // Thursday/Friday slot in the last free week.
                    validate_range(
                        black_box(make_date("2025-12-25")),
                        black_box(make_date("2025-12-26")),
                        allotment,
                        &policy,
                        true,
                    )
                })
            },
        );
    }
    group.finish();
}

fn bench_overlap_scan(c: &mut Criterion) {
    let allotment = allotment_with_ranges(50);
    let candidates = [DateInterval::new(
        make_date("2025-12-25"),
        make_date("2025-12-26"),
    )];

    let mut group = c.benchmark_group("find_overlap");
    group.throughput(Throughput::Elements(allotment.ranges.len() as u64));
    group.bench_function("50_ranges_no_conflict", |b| {
        b.iter(|| find_overlap(black_box(&candidates), &allotment, &[]))
    });
    group.finish();
}

fn bench_merge_planning(c: &mut Criterion) {
    let policy = VacationPolicy::default();
    let mut allotment = allotment_with_ranges(2);
    allotment.flexible_days_used = Decimal::from(6);
    let source_ids: Vec<Uuid> = allotment.ranges.iter().map(|r| r.id).collect();
    let today = make_date("2025-01-01");

    c.bench_function("plan_merge_two_sources", |b| {
        b.iter(|| {
            plan_merge(
                &allotment,
                black_box(&source_ids),
                black_box(make_date("2025-07-07")),
                black_box(make_date("2025-07-12")),
                today,
                &policy,
            )
        })
    });
}

criterion_group!(
    benches,
    bench_validation,
    bench_overlap_scan,
    bench_merge_planning
);
criterion_main!(benches);
