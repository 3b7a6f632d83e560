use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use trap_report::{narrate, ReplayCsvWriter};
use trap_sim::{run, SimulationConfig};

fn trap_config(num_steps: u32) -> SimulationConfig {
    SimulationConfig {
        human_order_price: 90.0,
        buyer_arrival_step: 5,
        num_steps,
        ..SimulationConfig::default()
    }
}

fn bench_stepper(c: &mut Criterion) {
    let mut group = c.benchmark_group("stepper");

    for num_steps in [10_u32, 50, 100] {
        let config = trap_config(num_steps);
        group.throughput(Throughput::Elements(u64::from(num_steps)));
        group.bench_with_input(BenchmarkId::new("run", num_steps), &config, |b, config| {
            b.iter(|| black_box(run(black_box(config)).expect("bench config should be valid")));
        });
    }

    group.finish();
}

fn bench_reports(c: &mut Criterion) {
    let result = run(&trap_config(100)).expect("bench config should be valid");

    c.bench_function("replay_csv_100_steps", |b| {
        b.iter(|| {
            let mut output = Vec::with_capacity(8 * 1024);
            let mut writer = ReplayCsvWriter::new(&mut output);
            writer.write_header().expect("write to vec");
            writer
                .append_states(black_box(result.states()))
                .expect("write to vec");
            black_box(output);
        });
    });

    c.bench_function("narrate_100_steps", |b| {
        b.iter(|| black_box(narrate(black_box(&result))));
    });
}

criterion_group!(benches, bench_stepper, bench_reports);
criterion_main!(benches);
