// ============================================================================
// Calculator Engine Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Reducer - Raw apply() throughput over action sequences
// 2. Controller - Full Calculator::press including display projection
// 3. Formatting - format_number / format_entry_for_display
// ============================================================================

use calc_engine::prelude::*;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

fn action_sequence(len: usize) -> Vec<Action> {
    let cycle = [
        Action::Digit(1),
        Action::Digit(2),
        Action::Decimal,
        Action::Digit(5),
        Action::Operator(Operator::Multiply),
        Action::Digit(3),
        Action::Operator(Operator::Add),
        Action::Digit(7),
        Action::Percent,
        Action::Equals,
        Action::SquareRoot,
        Action::ClearEntry,
    ];
    cycle.iter().copied().cycle().take(len).collect()
}

// ============================================================================
// Reducer Benchmarks
// ============================================================================

fn benchmark_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply");

    for len in [12, 120, 1200].iter() {
        let actions = action_sequence(*len);

        group.bench_with_input(BenchmarkId::from_parameter(len), &actions, |b, actions| {
            b.iter(|| {
                let state = actions
                    .iter()
                    .fold(SessionState::new(), |state, action| apply(*action, state));
                black_box(state)
            });
        });
    }

    group.finish();
}

// ============================================================================
// Controller Benchmarks
// ============================================================================

fn benchmark_calculator_press(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculator_press");
    let actions = action_sequence(120);

    group.bench_function("no_op_handler", |b| {
        b.iter(|| {
            let mut calc = Calculator::new();
            for action in &actions {
                black_box(calc.press(*action));
            }
        });
    });

    group.bench_function("with_memory", |b| {
        b.iter(|| {
            let mut calc = Calculator::new();
            for action in &actions {
                calc.press(*action);
                black_box(calc.press(MemoryAction::Add));
            }
        });
    });

    group.finish();
}

// ============================================================================
// Formatting Benchmarks
// ============================================================================

fn benchmark_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting");

    let values = [0.3, 1234567.891, -42.0, 9.99998e12, 5e-10];
    group.bench_function("format_number", |b| {
        b.iter(|| {
            for value in &values {
                black_box(format_number(black_box(*value)));
            }
        });
    });

    let entries = ["0", "1234.", "-9876543.21", "1.234568e12", DIVIDE_BY_ZERO];
    group.bench_function("format_entry_for_display", |b| {
        b.iter(|| {
            for entry in &entries {
                black_box(format_entry_for_display(black_box(entry)));
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_apply,
    benchmark_calculator_press,
    benchmark_formatting
);
criterion_main!(benches);
