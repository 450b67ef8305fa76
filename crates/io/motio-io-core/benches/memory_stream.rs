use criterion::{black_box, criterion_group, criterion_main, Criterion};
use motio_io_core::{MemoryStream, Origin, Stream};

fn bench_small_writes(c: &mut Criterion) {
    let chunk = [0x5Au8; 24];
    c.bench_function("memory_stream_small_writes_64k", |b| {
        b.iter(|| {
            let mut stream = MemoryStream::new();
            for _ in 0..(64 * 1024 / chunk.len()) {
                stream.write(black_box(&chunk));
            }
            black_box(stream.size())
        })
    });
}

fn bench_read_back(c: &mut Criterion) {
    let mut stream = MemoryStream::new();
    stream.write(&vec![1u8; 64 * 1024]);
    let mut out = [0u8; 64];
    c.bench_function("memory_stream_read_back_64k", |b| {
        b.iter(|| {
            stream.seek(0, Origin::Set).unwrap();
            while stream.read(&mut out) == out.len() {}
            black_box(out[0])
        })
    });
}

criterion_group!(benches, bench_small_writes, bench_read_back);
criterion_main!(benches);
