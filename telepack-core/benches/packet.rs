use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use telepack_core::{
    decode_stream, encode_stream, read_packet, write_packet, CommPacket, PacketType,
};

fn sample_packets(count: usize) -> Vec<CommPacket> {
    (0..count)
        .map(|i| {
            let x = i as f32;
            CommPacket::new(
                PacketType::State,
                (i % 128) as u8,
                [x * 0.5, -x * 1.25, 1000.0 + x],
            )
        })
        .collect()
}

fn bench_write_packet(c: &mut Criterion) {
    let packet = CommPacket::new(PacketType::State, 54, [-724.99, 846.53, 442.59]);

    c.bench_function("write_packet", |b| {
        b.iter(|| write_packet(black_box(&packet)));
    });
}

fn bench_read_packet(c: &mut Criterion) {
    let frame = [178u8, 157, 26, 78, 167, 88, 234, 94];

    c.bench_function("read_packet", |b| {
        b.iter(|| read_packet(black_box(&frame)));
    });
}

fn bench_streams(c: &mut Criterion) {
    let mut group = c.benchmark_group("stream");

    for count in [16, 256, 4096] {
        let packets = sample_packets(count);
        let encoded = encode_stream(&packets);

        group.throughput(Throughput::Bytes(encoded.len() as u64));
        group.bench_with_input(BenchmarkId::new("encode", count), &packets, |b, packets| {
            b.iter(|| encode_stream(black_box(packets)));
        });
        group.bench_with_input(BenchmarkId::new("decode", count), &encoded, |b, data| {
            b.iter(|| decode_stream(black_box(data)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_write_packet, bench_read_packet, bench_streams);
criterion_main!(benches);
