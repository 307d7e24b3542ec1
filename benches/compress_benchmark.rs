use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sha3::{
    digest::{ExtendableOutput, Update, XofReader},
    Shake256,
};
use widehash::{bmw, groestl, jh, shavite};

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut block = [0u8; 128];
    let mut v = Shake256::default();
    v.update(b"widehash block");
    v.finalize_xof().read(&mut block);

    let words32: [u32; 16] = std::array::from_fn(|i| i as u32 * 0x0101_0101);
    let words64: [u64; 16] = std::array::from_fn(|i| i as u64 * 0x0101_0101_0101_0101);

    c.bench_function("bmw compress32", |b| {
        b.iter(|| bmw::compress32(black_box(&bmw::FINAL32), black_box(&words32)))
    });
    c.bench_function("bmw compress64", |b| {
        b.iter(|| bmw::compress64(black_box(&bmw::FINAL64), black_box(&words64)))
    });

    let m8: [u64; 8] = std::array::from_fn(|i| words64[i]);
    c.bench_function("groestl compress 8 columns", |b| {
        let mut h = [0u64; 8];
        b.iter(|| groestl::compress(&mut h, black_box(&m8)))
    });
    c.bench_function("groestl compress 16 columns", |b| {
        let mut h = [0u64; 16];
        b.iter(|| groestl::compress(&mut h, black_box(&words64)))
    });

    c.bench_function("jh f8", |b| {
        let mut state = [0u8; 128];
        b.iter(|| jh::f8(&mut state, black_box(&block[..64])))
    });

    c.bench_function("shavite c256", |b| {
        b.iter(|| shavite::c256(black_box(&[0; 8]), black_box(&words32), 512))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
