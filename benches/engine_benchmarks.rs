use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use josephus::{
    JosephusState, SessionSettings, SessionStateManagement,
    functional::{classical_survivor, solve},
};

/// Helper to create a started session ready to step.
fn setup_running_session(participants: usize, step_count: u32) -> JosephusState {
    let mut state =
        JosephusState::with_settings(SessionSettings::new(participants, step_count, 100)).unwrap();
    state.start().unwrap();
    state
}

/// Benchmark the batch solver across circle sizes.
fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");

    for participants in [7, 20, 200, 1000].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_participants", participants)),
            participants,
            |b, &n| {
                b.iter(|| solve(n, 7));
            },
        );
    }

    group.finish();
}

/// Benchmark the closed-form recurrence against the same sizes.
fn bench_classical_survivor(c: &mut Criterion) {
    let mut group = c.benchmark_group("classical_survivor");

    for participants in [7, 1000].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_participants", participants)),
            participants,
            |b, &n| {
                b.iter(|| classical_survivor(n, 7));
            },
        );
    }

    group.finish();
}

/// Benchmark a single interactive step at the largest session size.
fn bench_session_step(c: &mut Criterion) {
    c.bench_function("session_step", |b| {
        b.iter_batched(
            || setup_running_session(20, 10),
            |mut state| {
                state.step();
                state
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

/// Benchmark snapshot generation (taken every frame by renderers).
fn bench_snapshot(c: &mut Criterion) {
    let state = setup_running_session(20, 10);
    c.bench_function("snapshot", |b| {
        b.iter(|| state.snapshot());
    });
}

/// Benchmark event draining (common per-frame operation).
fn bench_drain_events(c: &mut Criterion) {
    c.bench_function("drain_events", |b| {
        b.iter_batched(
            || setup_running_session(20, 10),
            |mut state| {
                state.drain_events();
                state
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

criterion_group!(batch_solving, bench_solve, bench_classical_survivor);

criterion_group!(
    session_operations,
    bench_session_step,
    bench_snapshot,
    bench_drain_events,
);

criterion_main!(batch_solving, session_operations);
