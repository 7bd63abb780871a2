use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use raw_pack::{encode, encode_into, BufferView, EncodingMode, PayloadFamily};

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    for &size in &[31usize, 255, 65535, 1 << 20] {
        let data = vec![0x5au8; size];
        let view = BufferView::from_bytes(&data);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_function(format!("bin_{}", size), |b| {
            b.iter(|| encode(black_box(&view), PayloadFamily::Bin, EncodingMode::BinaryAware))
        });
        group.bench_function(format!("str_legacy_{}", size), |b| {
            b.iter(|| encode(black_box(&view), PayloadFamily::Str, EncodingMode::LegacyRaw))
        });
    }
    group.finish();
}

fn bench_encode_reused_buffer(c: &mut Criterion) {
    let data = vec![0x5au8; 65535];
    let view = BufferView::from_bytes(&data);
    let mut buf = Vec::with_capacity(1 << 17);
    c.bench_function("encode_into_65535", |b| {
        b.iter(|| {
            buf.clear();
            encode_into(
                black_box(&mut buf),
                &view,
                PayloadFamily::Bin,
                EncodingMode::BinaryAware,
            )
        })
    });
}

fn bench_gather(c: &mut Criterion) {
    // Column-major 256x256 forces the copying flatten path.
    let data = vec![0x5au8; 65536];
    let view = BufferView::new(&data, 1, vec![256, 256], vec![1, 256]).unwrap();
    c.bench_function("encode_strided_65536", |b| {
        b.iter(|| encode(black_box(&view), PayloadFamily::Bin, EncodingMode::BinaryAware))
    });
}

criterion_group!(
    benches,
    bench_encode,
    bench_encode_reused_buffer,
    bench_gather
);
criterion_main!(benches);
