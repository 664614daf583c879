/* crate use */
use rand::SeedableRng;

/* project use */
use synthreads;

fn make_reads(c: &mut criterion::Criterion) {
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);

    let reference = synthreads::random_seq(100_000, &mut rng);
    let length = synthreads::model::Length::new(50, 150).unwrap();
    let quality = synthreads::model::Quality::new(18.0, 3.0).unwrap();

    let mut g = c.benchmark_group("Make reads");
    g.sampling_mode(criterion::SamplingMode::Flat);

    for n_reads in (1000..=10_000).step_by(1000) {
        g.bench_with_input(
            criterion::BenchmarkId::new("number of reads", n_reads),
            &n_reads,
            |b, &n_reads| {
                b.iter(|| {
                    criterion::black_box(
                        synthreads::simulate::make_reads(
                            &reference, n_reads, &length, &quality, &mut rng,
                        )
                        .unwrap(),
                    )
                })
            },
        );
    }
}

fn setup(c: &mut criterion::Criterion) {
    make_reads(c);
}

criterion::criterion_group!(benches, setup);

criterion::criterion_main!(benches);
