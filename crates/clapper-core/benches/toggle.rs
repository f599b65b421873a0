// Benchmarks for the toggle path

use clapper_core::{Signal, ToggleMachine};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_machine_toggle(c: &mut Criterion) {
    c.bench_function("machine_toggle_1000", |b| {
        b.iter(|| {
            let mut machine = ToggleMachine::new();
            for _ in 0..1_000 {
                black_box(machine.toggle());
            }
            black_box(machine.state());
        })
    });
}

fn bench_signal_publish(c: &mut Criterion) {
    let signal = Signal::new(ToggleMachine::new().state());
    signal.subscribe(|state| {
        black_box(state.count);
    });

    c.bench_function("signal_publish_toggle", |b| {
        let mut machine = ToggleMachine::new();
        b.iter(|| signal.set(machine.toggle()))
    });
}

criterion_group!(benches, bench_machine_toggle, bench_signal_publish);
criterion_main!(benches);
