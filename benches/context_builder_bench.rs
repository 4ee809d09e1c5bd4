/// Benchmark for progressive context building and findings parsing
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use fairness_audit::context::{build_progressive_context, parse_findings};
use fairness_audit::data::learn_state;
use fairness_audit::model::FeedbackLoop;
use fairness_audit::risk::create_risk_entry;
use fairness_audit::{AuditState, Component};
use std::hint::black_box;

/// Case study with `extra` additional risks and feedback loops
fn scaled_state(extra: usize) -> AuditState {
    let mut state = learn_state();
    for i in 0..extra {
        state.c1.risk_matrix.push(create_risk_entry(
            format!("X{}", i),
            format!("Generated risk {}", i),
            5.0,
            5.0,
            4.0,
        ));
        state.c1.feedback_loops.push(FeedbackLoop {
            trigger: format!("Trigger {}", i),
            mechanism: "Repeated notices".to_string(),
            amplification: "Compounding distrust".to_string(),
            ..Default::default()
        });
    }
    state
}

fn bench_build_context(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_progressive_context");
    for extra in [0, 50, 500] {
        let state = scaled_state(extra);
        group.bench_with_input(BenchmarkId::from_parameter(extra), &state, |b, state| {
            b.iter(|| build_progressive_context(black_box(state), Component::C4).render())
        });
    }
    group.finish();
}

fn bench_parse_findings(c: &mut Criterion) {
    let rendered = build_progressive_context(&scaled_state(50), Component::C4).render();
    c.bench_function("parse_findings", |b| {
        b.iter(|| parse_findings(black_box(&rendered)))
    });
}

criterion_group!(benches, bench_build_context, bench_parse_findings);
criterion_main!(benches);
