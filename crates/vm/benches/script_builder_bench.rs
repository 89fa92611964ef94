//! Script Builder Benchmarks
//!
//! Encoder throughput for integer pushes, tiered byte pushes and syscalls,
//! plus disassembly of the resulting scripts.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use neo_sdk_vm::{disassembler, OpCode, ScriptBuilder};

/// Creates a script of mixed-width integer pushes
fn build_integer_script(count: usize) -> Vec<u8> {
    let mut builder = ScriptBuilder::new();
    for i in 0..count as i64 {
        builder
            .emit_push_int(i * 7919 - 50_000)
            .expect("push integer");
    }
    builder.emit_opcode(OpCode::RET).expect("ret");
    builder.to_array()
}

fn bench_push_integers(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_integers");
    for count in [16usize, 256, 4096] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| build_integer_script(black_box(count)))
        });
    }
    group.finish();
}

fn bench_push_bytes(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_bytes");
    for size in [32usize, 200, 4096, 70_000] {
        let data = vec![0xABu8; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| {
                let mut builder = ScriptBuilder::new();
                builder.emit_push(black_box(data)).expect("push bytes");
                builder.to_script()
            })
        });
    }
    group.finish();
}

fn bench_syscall(c: &mut Criterion) {
    c.bench_function("emit_syscall", |b| {
        b.iter(|| {
            let mut builder = ScriptBuilder::new();
            builder
                .emit_syscall(black_box("System.Contract.Call"))
                .expect("syscall");
            builder.to_array()
        })
    });
}

fn bench_disassemble(c: &mut Criterion) {
    let script = build_integer_script(1024);
    c.bench_function("disassemble_1024", |b| {
        b.iter(|| disassembler::render(black_box(&script)))
    });
}

criterion_group!(
    benches,
    bench_push_integers,
    bench_push_bytes,
    bench_syscall,
    bench_disassemble
);
criterion_main!(benches);
