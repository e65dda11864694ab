//! Benchmarks for utterance synthesis and event dispatch

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use corti_rs::recognition::fit_transcripts;
use corti_rs::{SpeechRecognition, SpeechRecognitionEvent};

fn bench_fit_transcripts(c: &mut Criterion) {
    let mut group = c.benchmark_group("fit_transcripts");

    for max_alternatives in [1usize, 5, 20, 100] {
        group.bench_with_input(
            BenchmarkId::new("pad_single", max_alternatives),
            &max_alternatives,
            |b, &max| {
                b.iter(|| fit_transcripts(black_box(vec!["turn on the lights".to_string()]), max))
            },
        );
    }

    group.finish();
}

fn bench_say(c: &mut Criterion) {
    let mut group = c.benchmark_group("say");

    for listeners in [0usize, 1, 10] {
        let recognition = SpeechRecognition::new();
        recognition.set_continuous(true);
        recognition.set_max_alternatives(5);
        for _ in 0..listeners {
            recognition.add_event_listener(
                "result",
                Arc::new(|event: &SpeechRecognitionEvent| {
                    black_box(event.results());
                }),
            );
        }
        let _ = recognition.start();

        group.bench_with_input(BenchmarkId::new("listeners", listeners), &listeners, |b, _| {
            b.iter(|| recognition.say(black_box(["dim the lights", "trim the lights"])))
        });
    }

    group.finish();
}

fn bench_session(c: &mut Criterion) {
    c.bench_function("start_say_end", |b| {
        b.iter_with_setup(SpeechRecognition::new, |recognition| {
            let _ = recognition.start();
            recognition.say(black_box("lights off"));
        })
    });
}

criterion_group!(benches, bench_fit_transcripts, bench_say, bench_session);
criterion_main!(benches);
