use std::sync::Arc;

use arrow::array::{Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use colsv::writer::{write_csv_batch, WriteOptions};

/// Generate a synthetic mixed-type batch for benchmarking
fn generate_batch(rows: usize) -> RecordBatch {
    let schema = Arc::new(Schema::new(vec![
        Field::new("id", DataType::Int64, false),
        Field::new("value", DataType::Float64, false),
        Field::new("label", DataType::Utf8, true),
    ]));

    let ids: Vec<i64> = (0..rows as i64).collect();
    let values: Vec<f64> = (0..rows).map(|i| i as f64 * 0.25).collect();
    let labels: Vec<Option<String>> = (0..rows)
        .map(|i| match i % 4 {
            0 => Some(format!("row-{i}")),
            1 => Some(format!("needs,\"quoting\" {i}")),
            2 => Some(String::new()),
            _ => None,
        })
        .collect();

    RecordBatch::try_new(
        schema,
        vec![
            Arc::new(Int64Array::from(ids)),
            Arc::new(Float64Array::from(values)),
            Arc::new(StringArray::from(labels)),
        ],
    )
    .expect("benchmark batch is well-formed")
}

fn bench_write_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("write_csv");

    for rows in [1_000usize, 10_000, 100_000] {
        let batch = generate_batch(rows);

        // Measure against the emitted byte count so results read as MB/s.
        let mut probe = Vec::new();
        write_csv_batch(&batch, &WriteOptions::default(), &mut probe)
            .expect("benchmark write succeeds");
        group.throughput(Throughput::Bytes(probe.len() as u64));

        group.bench_with_input(BenchmarkId::new("rows", rows), &batch, |b, batch| {
            b.iter(|| {
                let mut out = Vec::with_capacity(probe.len());
                write_csv_batch(batch, &WriteOptions::default(), &mut out)
                    .expect("benchmark write succeeds");
                out
            })
        });
    }

    group.finish();
}

fn bench_batch_sizes(c: &mut Criterion) {
    let batch = generate_batch(100_000);
    let mut group = c.benchmark_group("batch_size");

    for batch_size in [64usize, 1024, 16_384] {
        let options = WriteOptions::default().with_batch_size(batch_size);
        group.bench_with_input(
            BenchmarkId::new("batch_size", batch_size),
            &options,
            |b, options| {
                b.iter(|| {
                    let mut out = Vec::new();
                    write_csv_batch(&batch, options, &mut out).expect("benchmark write succeeds");
                    out
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_write_throughput, bench_batch_sizes);
criterion_main!(benches);
