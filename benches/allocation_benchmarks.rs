//! Benchmarks for the working-day calendar and the forward search.

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use vacation_engine::allocation::find_default_window;
use vacation_engine::calendar::count_working_days;
use vacation_engine::models::CandidateRange;

fn bench_count_working_days(c: &mut Criterion) {
    let begin = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();

    c.bench_function("count_working_days_full_year", |b| {
        b.iter(|| count_working_days(black_box(begin), black_box(end)))
    });

    let two_weeks_end = NaiveDate::from_ymd_opt(2025, 1, 14).unwrap();
    c.bench_function("count_working_days_two_weeks", |b| {
        b.iter(|| count_working_days(black_box(begin), black_box(two_weeks_end)))
    });
}

fn bench_validate_period(c: &mut Criterion) {
    use vacation_engine::allocation::validate_period;

    let candidates = vec![
        CandidateRange {
            begin_date: NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
        },
        CandidateRange {
            begin_date: NaiveDate::from_ymd_opt(2025, 8, 4).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 8, 8).unwrap(),
        },
    ];

    c.bench_function("validate_period_two_ranges", |b| {
        b.iter(|| validate_period(black_box(&candidates), black_box(2025), black_box(15)))
    });
}

fn bench_find_default_window(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2025, 11, 1).unwrap();

    c.bench_function("find_default_window_december", |b| {
        b.iter(|| find_default_window(black_box(today), black_box(15)))
    });

    let late = NaiveDate::from_ymd_opt(2025, 12, 20).unwrap();
    c.bench_function("find_default_window_january_fallback", |b| {
        b.iter(|| find_default_window(black_box(late), black_box(15)))
    });
}

criterion_group!(
    benches,
    bench_count_working_days,
    bench_validate_period,
    bench_find_default_window
);
criterion_main!(benches);
