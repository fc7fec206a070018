// Rust guideline compliant 2026-10-16

use afu9_core::{
    is_valid_transition, resolve_next_step, DraftData, IssueData, LifecycleGraph, Status,
    ValidationStatus,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const STATUSES: [&str; 7] = [
    "CREATED",
    "SPEC_READY",
    "IMPLEMENTING_PREP",
    "REVIEW_READY",
    "DONE",
    "HOLD",
    "BOGUS",
];

fn build_snapshot(count: usize) -> Vec<(IssueData, Option<DraftData>)> {
    (0..count)
        .map(|i| {
            let draft_id = format!("D-{}", i);
            let issue = IssueData::new(format!("I-{}", i), STATUSES[i % STATUSES.len()])
                .with_github_url("https://github.com/o/r/issues/1")
                .with_draft_id(draft_id.clone())
                .with_handoff_state(if i % 2 == 0 { "SYNCED" } else { "NOT_SENT" });
            let validation = match i % 3 {
                0 => ValidationStatus::Valid,
                1 => ValidationStatus::Invalid,
                _ => ValidationStatus::Unknown,
            };
            (issue, Some(DraftData::new(draft_id).with_validation(validation)))
        })
        .collect()
}

fn bench_resolve(c: &mut Criterion) {
    let snapshot = build_snapshot(1000);
    c.bench_function("resolve_next_step_1000", |b| {
        b.iter(|| {
            for (issue, draft) in &snapshot {
                black_box(resolve_next_step(issue, draft.as_ref()));
            }
        })
    });
}

fn bench_transitions(c: &mut Criterion) {
    c.bench_function("is_valid_transition_all_pairs", |b| {
        b.iter(|| {
            for from in Status::ALL {
                for to in Status::ALL {
                    black_box(is_valid_transition(from, to));
                }
            }
        })
    });
}

fn bench_forward_path(c: &mut Criterion) {
    let graph = LifecycleGraph::new();
    c.bench_function("forward_path_created_done", |b| {
        b.iter(|| black_box(graph.forward_path(Status::Created, Status::Done)))
    });
}

criterion_group!(benches, bench_resolve, bench_transitions, bench_forward_path);
criterion_main!(benches);
