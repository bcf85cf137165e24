// ABOUTME: Criterion benchmarks for per-frame form evaluation
// ABOUTME: Measures joint angles, landmark extraction, evaluator steps, and full session replays
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormSense Contributors

//! Criterion benchmarks for per-frame form evaluation.
//!
//! Every frame has to be scored well inside a 33 ms video frame budget.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

mod common;

use chrono::{DateTime, Utc};
use common::fixtures::{push_up_frame, push_up_recording, RecordingLength};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use formsense::intelligence::{
    extract_joints, joint_angle, EngineConfig, ExerciseEvaluator, ExerciseProfile,
    ProfileEvaluator,
};
use formsense::models::{ExerciseType, Point};
use formsense::session::SessionRegistry;

fn bench_joint_angle(c: &mut Criterion) {
    c.bench_function("joint_angle", |b| {
        b.iter(|| {
            joint_angle(
                black_box(Point::new(0.3, 0.4)),
                black_box(Point::new(0.3, 0.6)),
                black_box(Point::new(0.45, 0.72)),
            )
        });
    });
}

fn bench_frame_evaluation(c: &mut Criterion) {
    let config = EngineConfig::default();
    let profile = ExerciseProfile::builtin(ExerciseType::PushUp);
    let frame = push_up_frame(DateTime::<Utc>::UNIX_EPOCH, 120.0);

    let mut group = c.benchmark_group("frame_evaluation");

    let required = profile.required_joints();
    group.bench_function("extract_joints", |b| {
        b.iter(|| extract_joints(black_box(&frame), &required, config.visibility_threshold));
    });

    let mut evaluator = ProfileEvaluator::new(profile.clone(), &config);
    let joints = extract_joints(&frame, &required, config.visibility_threshold)
        .unwrap_or_default();
    group.bench_function("push_up_process", |b| {
        b.iter(|| evaluator.process(black_box(&joints)));
    });

    group.finish();
}

fn bench_session_replay(c: &mut Criterion) {
    let mut group = c.benchmark_group("session_replay");

    for length in [RecordingLength::Second, RecordingLength::Minute] {
        let frames = push_up_recording(length);
        group.throughput(Throughput::Elements(frames.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("push_up", length.label()),
            &frames,
            |b, frames| {
                b.iter(|| {
                    let mut sessions = SessionRegistry::default();
                    let Ok(handle) = sessions.start_session(ExerciseType::PushUp) else {
                        return 0;
                    };
                    for frame in frames {
                        let _ = black_box(sessions.submit_frame(handle, frame));
                    }
                    sessions
                        .end_session(handle)
                        .map_or(0, |summary| summary.total_reps)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_joint_angle,
    bench_frame_evaluation,
    bench_session_replay
);
criterion_main!(benches);
