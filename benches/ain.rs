extern crate ainscope;

use ainscope::{disassembler::opcodes, Ain, Disassembler};
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;

const FUNCTIONS: i32 = 2000;

fn push_i32(out: &mut Vec<u8>, value: i32) {
    out.extend_from_slice(&value.to_le_bytes());
}

fn push_op(out: &mut Vec<u8>, opcode: u16, args: &[i32]) {
    out.extend_from_slice(&opcode.to_le_bytes());
    for arg in args {
        push_i32(out, *arg);
    }
}

/// A version 4 container with `FUNCTIONS` small functions and one string each.
fn synthetic_container() -> Vec<u8> {
    let mut code = Vec::new();
    let mut addresses = Vec::new();
    for function in 1..=FUNCTIONS {
        push_op(&mut code, opcodes::FUNC, &[function]);
        addresses.push(code.len() as i32);
        push_op(&mut code, opcodes::S_PUSH, &[function]);
        push_op(&mut code, opcodes::PUSH, &[function]);
        push_op(&mut code, opcodes::CALLFUNC, &[function - 1]);
        push_op(&mut code, opcodes::RETURN, &[]);
        push_op(&mut code, opcodes::ENDFUNC, &[function]);
    }

    let mut data = b"VERS".to_vec();
    push_i32(&mut data, 4);
    data.extend_from_slice(b"CODE");
    push_i32(&mut data, code.len() as i32);
    data.extend_from_slice(&code);

    data.extend_from_slice(b"FUNC");
    push_i32(&mut data, FUNCTIONS + 1);
    for (index, address) in std::iter::once(0).chain(addresses).enumerate() {
        push_i32(&mut data, address);
        data.extend_from_slice(format!("function_{index}\0").as_bytes());
        // is_label, return kind, return struct, nr_args, nr_vars, crc
        for value in [0, 0, -1, 0, 0, 0] {
            push_i32(&mut data, value);
        }
    }

    data.extend_from_slice(b"STR0");
    push_i32(&mut data, FUNCTIONS + 1);
    for index in 0..=FUNCTIONS {
        data.extend_from_slice(format!("string {index}\0").as_bytes());
    }
    data
}

fn bench_load(c: &mut Criterion) {
    let data = synthetic_container();

    let mut group = c.benchmark_group("ain");
    group.throughput(Throughput::Bytes(data.len() as u64));
    group.bench_function("from_mem", |b| {
        b.iter(|| {
            let ain = Ain::from_mem(black_box(data.clone())).unwrap();
            black_box(ain)
        });
    });
    group.finish();
}

fn bench_disassemble(c: &mut Criterion) {
    let ain = Ain::from_mem(synthetic_container()).unwrap();

    let mut group = c.benchmark_group("disassembler");
    group.throughput(Throughput::Bytes(ain.code.len() as u64));
    group.bench_function("format_all", |b| {
        b.iter(|| {
            let mut dasm = Disassembler::new(black_box(&ain));
            let mut bytes = 0;
            while !dasm.eof() {
                bytes += dasm.format().len();
                dasm.next();
            }
            black_box(bytes)
        });
    });
    group.finish();
}

criterion_group!(benches, bench_load, bench_disassemble);
criterion_main!(benches);
