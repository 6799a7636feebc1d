//! Benchmarks for circuit evaluation and gradients
//!
//! Run with: cargo bench -p qvar-sim

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use qvar_ir::{Circuit, Observable, ParameterExpression, QubitId};
use qvar_sim::{CircuitEvaluator, DeviceConfig};

/// RY layer followed by a CX ladder, measuring Z on qubit 0.
fn ladder(n: u32) -> Circuit {
    let mut circuit = Circuit::with_size("ladder", n);
    for q in 0..n {
        circuit
            .ry(ParameterExpression::slot(q as usize), QubitId(q))
            .unwrap();
    }
    for q in 0..n - 1 {
        circuit.cx(QubitId(q), QubitId(q + 1)).unwrap();
    }
    circuit.expval(Observable::z(QubitId(0))).unwrap();
    circuit
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    for n in &[2u32, 6, 10] {
        let eval = CircuitEvaluator::new(DeviceConfig::default_qubit(*n), ladder(*n)).unwrap();
        let params = vec![0.3; *n as usize];
        group.bench_with_input(BenchmarkId::new("ladder", n), &params, |b, p| {
            b.iter(|| eval.evaluate(black_box(p)).unwrap());
        });
    }

    group.finish();
}

fn bench_gradient(c: &mut Criterion) {
    let mut group = c.benchmark_group("gradient");

    for n in &[2u32, 6, 10] {
        let eval = CircuitEvaluator::new(DeviceConfig::default_qubit(*n), ladder(*n)).unwrap();
        let params = vec![0.3; *n as usize];
        group.bench_with_input(BenchmarkId::new("parameter_shift", n), &params, |b, p| {
            b.iter(|| eval.gradient(black_box(p)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_evaluate, bench_gradient);
criterion_main!(benches);
