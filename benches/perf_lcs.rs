use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use lcs_stepper::{linear::hirschberg, LcsEngine};
use rand::{rngs::StdRng, Rng, SeedableRng};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn random_dna(rng: &mut StdRng, len: usize) -> String {
    const ALPHABET: &[char] = &['A', 'C', 'G', 'T'];
    (0..len)
        .map(|_| {
            let idx = rng.gen_range(0..ALPHABET.len());
            ALPHABET[idx]
        })
        .collect()
}

fn rss_kib() -> u64 {
    let mut sys = System::new();
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    match get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        Some(p) => p.memory() / 1024,
        None => 0,
    }
}

fn bench_compute_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("lcs_compute_all");
    for &len in &[256usize, 1_000, 2_000] {
        group.bench_function(format!("len_{len}"), |b| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(42);
                    (random_dna(&mut rng, len), random_dna(&mut rng, len))
                },
                |(s, t)| {
                    let before = rss_kib();
                    let mut engine = LcsEngine::new();
                    engine.set_sequences(&s, &t);
                    engine.compute_all();
                    let after = rss_kib();
                    criterion::black_box(engine.lcs_len());
                    // record memory delta to stderr to avoid criterion noise
                    eprintln!("RSS KiB delta (table {len}): {}", after.saturating_sub(before));
                },
                BatchSize::PerIteration,
            )
        });
    }
    group.finish();
}

fn bench_stepping(c: &mut Criterion) {
    let mut group = c.benchmark_group("lcs_step_loop");
    for &len in &[256usize, 1_000] {
        group.bench_function(format!("len_{len}"), |b| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(42);
                    (random_dna(&mut rng, len), random_dna(&mut rng, len))
                },
                |(s, t)| {
                    let mut engine = LcsEngine::new();
                    engine.initialize(&s, &t);
                    while engine.step() {}
                    criterion::black_box(engine.lcs_len());
                },
                BatchSize::PerIteration,
            )
        });
    }
    group.finish();
}

fn bench_linear(c: &mut Criterion) {
    let mut group = c.benchmark_group("lcs_linear_space");
    for &len in &[1_000usize, 5_000] {
        group.bench_function(format!("len_{len}"), |b| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(42);
                    let s: Vec<char> = random_dna(&mut rng, len).chars().collect();
                    let t: Vec<char> = random_dna(&mut rng, len).chars().collect();
                    (s, t)
                },
                |(s, t)| criterion::black_box(hirschberg(&s, &t).len()),
                BatchSize::PerIteration,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_compute_all, bench_stepping, bench_linear);
criterion_main!(benches);
