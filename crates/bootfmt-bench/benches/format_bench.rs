//! Formatting throughput benchmarks.
//!
//! Each group measures the bootfmt engine against the host `snprintf` on the
//! same template and arguments, so regressions show up relative to a
//! production C library rather than an absolute number.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use bootfmt_core::{Arg, sprintf};

fn bench_decimal(c: &mut Criterion) {
    let values: &[i32] = &[0, 7, -7, 123_456, i32::MIN];
    let mut group = c.benchmark_group("decimal");

    for &value in values {
        group.bench_with_input(BenchmarkId::new("bootfmt", value), &value, |b, &v| {
            let mut buf = [0u8; 64];
            b.iter(|| {
                let n = sprintf(&mut buf, b"%d", &[Arg::Int(v)]).unwrap();
                black_box(&buf[..n]);
            });
        });
        group.bench_with_input(BenchmarkId::new("host_snprintf", value), &value, |b, &v| {
            let mut buf = [0u8; 64];
            b.iter(|| {
                let n = unsafe {
                    libc::snprintf(
                        buf.as_mut_ptr().cast(),
                        buf.len(),
                        c"%d".as_ptr(),
                        v as libc::c_int,
                    )
                };
                black_box((n, &buf));
            });
        });
    }
    group.finish();
}

fn bench_zero_pad_width(c: &mut Criterion) {
    let mut group = c.benchmark_group("zero_pad_width");

    group.bench_function("bootfmt", |b| {
        let mut buf = [0u8; 64];
        b.iter(|| {
            let n = sprintf(&mut buf, b"%010d", &[Arg::Int(-7)]).unwrap();
            black_box(&buf[..n]);
        });
    });
    group.bench_function("host_snprintf", |b| {
        let mut buf = [0u8; 64];
        b.iter(|| {
            let n = unsafe {
                libc::snprintf(
                    buf.as_mut_ptr().cast(),
                    buf.len(),
                    c"%010d".as_ptr(),
                    -7 as libc::c_int,
                )
            };
            black_box((n, &buf));
        });
    });
    group.finish();
}

fn bench_hex(c: &mut Criterion) {
    let mut group = c.benchmark_group("hex");

    group.bench_function("bootfmt", |b| {
        let mut buf = [0u8; 64];
        b.iter(|| {
            let n = sprintf(&mut buf, b"%08X", &[Arg::Uint(0xDEAD_BEEF)]).unwrap();
            black_box(&buf[..n]);
        });
    });
    group.bench_function("host_snprintf", |b| {
        let mut buf = [0u8; 64];
        b.iter(|| {
            let n = unsafe {
                libc::snprintf(
                    buf.as_mut_ptr().cast(),
                    buf.len(),
                    c"%08X".as_ptr(),
                    0xDEAD_BEEFu32 as libc::c_uint,
                )
            };
            black_box((n, &buf));
        });
    });
    group.finish();
}

fn bench_mixed_template(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed_template");
    let args = [Arg::Str(b"hda"), Arg::Uint(2048), Arg::Uint(0x7C00)];

    group.bench_function("bootfmt", |b| {
        let mut buf = [0u8; 128];
        b.iter(|| {
            let n = sprintf(&mut buf, b"%s: %u sectors at 0x%08X", &args).unwrap();
            black_box(&buf[..n]);
        });
    });
    group.bench_function("host_snprintf", |b| {
        let mut buf = [0u8; 128];
        b.iter(|| {
            let n = unsafe {
                libc::snprintf(
                    buf.as_mut_ptr().cast(),
                    buf.len(),
                    c"%s: %u sectors at 0x%08X".as_ptr(),
                    c"hda".as_ptr(),
                    2048 as libc::c_uint,
                    0x7C00 as libc::c_uint,
                )
            };
            black_box((n, &buf));
        });
    });
    group.finish();
}

fn bench_string_copy(c: &mut Criterion) {
    let sizes: &[usize] = &[16, 64, 256, 1024];
    let mut group = c.benchmark_group("string_copy");

    for &size in sizes {
        let mut payload = vec![b'A'; size];
        payload.push(0);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("bootfmt", size), &size, |b, _| {
            let mut buf = vec![0u8; size + 16];
            b.iter(|| {
                let n = sprintf(&mut buf, b"%s", &[Arg::Str(&payload)]).unwrap();
                black_box(n);
            });
        });
        group.bench_with_input(BenchmarkId::new("host_snprintf", size), &size, |b, _| {
            let mut buf = vec![0u8; size + 16];
            b.iter(|| {
                let n = unsafe {
                    libc::snprintf(
                        buf.as_mut_ptr().cast(),
                        buf.len(),
                        c"%s".as_ptr(),
                        payload.as_ptr(),
                    )
                };
                black_box(n);
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_decimal,
    bench_zero_pad_width,
    bench_hex,
    bench_mixed_template,
    bench_string_copy
);
criterion_main!(benches);
