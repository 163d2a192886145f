use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use mysql_resultset::{FieldFlags, FlagWeights};

fn bench_flag_decode(c: &mut Criterion) {
    let weights = FlagWeights::protocol_41();

    // NOT_NULL | PRI_KEY | AUTO_INCREMENT | PART_KEY, a typical id column
    c.bench_function("decode_typical_mask", |b| {
        b.iter(|| FieldFlags::decode(black_box(0x4203), &weights))
    });

    c.bench_function("decode_all_documented", |b| {
        b.iter(|| FieldFlags::decode(black_box(0x0FFF), &weights))
    });
}

criterion_group!(benches, bench_flag_decode);
criterion_main!(benches);
