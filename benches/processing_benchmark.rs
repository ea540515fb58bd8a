use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use isd_extractor::models::Observation;
use isd_extractor::parsers::RecordParser;
use isd_extractor::processors::{YearGrouper, YearShuffle};

// Create test data for benchmarking
fn create_record_lines(count: usize) -> Vec<String> {
    let mut lines = Vec::with_capacity(count);

    for i in 0..count {
        let year = 1900 + (i % 100);
        let temperature = (i % 700) as i32 - 350;
        let quality = ['0', '1', '2', '4', '5', '9'][i % 6];

        let field = if temperature < 0 {
            format!("-{:04}", -temperature)
        } else {
            format!("+{:04}", temperature)
        };

        let mut line = String::with_capacity(93);
        line.push_str(&"0".repeat(15));
        line.push_str(&year.to_string());
        line.push_str(&"9".repeat(68));
        line.push_str(&field);
        line.push(quality);
        lines.push(line);
    }

    lines
}

fn create_observations(count: usize) -> Vec<Observation> {
    (0..count)
        .map(|i| {
            let year = 1900 + (i % 100);
            Observation::new(year.to_string(), (i % 700) as i32 - 350)
        })
        .collect()
}

fn benchmark_record_parser(c: &mut Criterion) {
    let lines = create_record_lines(10_000);
    let parser = RecordParser::new();

    c.bench_function("record_parser_10k", |b| {
        b.iter(|| {
            let mut accepted = 0;
            for line in &lines {
                if parser.parse(line).is_some() {
                    accepted += 1;
                }
            }
            black_box(accepted)
        })
    });
}

fn benchmark_shuffle_and_group(c: &mut Criterion) {
    let observations = create_observations(10_000);

    c.bench_function("shuffle_group_10k", |b| {
        b.iter(|| {
            let mut shuffle = YearShuffle::new();
            shuffle.extend(observations.iter().cloned());

            let grouper = YearGrouper::new();
            let mut total_lines = 0;
            for (year, temperatures) in shuffle.into_groups() {
                total_lines += grouper.emit(&year, &temperatures).len();
            }
            black_box(total_lines)
        })
    });
}

fn benchmark_varying_data_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("extraction_by_size");

    for &size in &[1_000, 10_000, 50_000] {
        group.bench_with_input(BenchmarkId::new("records", size), &size, |b, &count| {
            let lines = create_record_lines(count);
            let parser = RecordParser::new();

            b.iter(|| {
                let mut shuffle = YearShuffle::new();
                for line in &lines {
                    if let Some(observation) = parser.parse(line) {
                        shuffle.insert(observation);
                    }
                }

                let grouper = YearGrouper::new();
                let mut total_lines = 0;
                for (year, temperatures) in shuffle.into_groups() {
                    total_lines += grouper.emit(&year, &temperatures).len();
                }
                black_box(total_lines)
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_record_parser,
    benchmark_shuffle_and_group,
    benchmark_varying_data_sizes
);
criterion_main!(benches);
