// Performance benchmarks for ScopeHub-Actix
// Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::time::Duration;
use scopehub_actix::protocol::encoding::codec::{decode, encode};
use scopehub_actix::protocol::enums::packet::Packet;
use scopehub_actix::protocol::structs::packet_controller::PacketController;
use scopehub_actix::protocol::structs::reaction::Reaction;
use scopehub_actix::scope::structs::scope_cache::ScopeCache;

fn sample_save_packet(payload_size: usize) -> Packet {
    Packet::SaveData {
        scope_id: "game".to_string(),
        holder_id: "player-123".to_string(),
        data: format!(r#"{{"blob":"{}"}}"#, "x".repeat(payload_size)),
    }
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec_encode");
    for size in [16, 256, 4096].iter() {
        let packet = sample_save_packet(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                black_box(encode(&packet, 42).unwrap());
            });
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec_decode");
    for size in [16, 256, 4096].iter() {
        let frame = encode(&sample_save_packet(*size), 42).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                black_box(decode(&frame).unwrap());
            });
        });
    }
    group.finish();
}

fn bench_sequence_allocation(c: &mut Criterion) {
    let controller = PacketController::new();

    c.bench_function("register_transmission", |b| {
        b.iter(|| {
            let transmission = controller.register(Packet::Heartbeat, Reaction::builder().build());
            black_box(controller.remove(transmission.sequence.wrapping_add(1)));
        });
    });
}

fn bench_cache_put_get(c: &mut Criterion) {
    let cache = ScopeCache::new(Duration::from_secs(300), 10000);
    let mut data = serde_json::Map::new();
    data.insert("score".to_string(), serde_json::json!(100));
    for i in 0..5000 {
        cache.put(&format!("holder-{}", i), data.clone());
    }

    c.bench_function("cache_hit", |b| {
        b.iter(|| {
            black_box(cache.get("holder-2500"));
        });
    });

    c.bench_function("cache_put", |b| {
        b.iter(|| {
            cache.put("holder-2500", data.clone());
        });
    });
}

criterion_group!(
    benches,
    bench_encode,
    bench_decode,
    bench_sequence_allocation,
    bench_cache_put_get
);
criterion_main!(benches);
