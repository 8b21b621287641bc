use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::fmt::Write;

use foilcut_rs::contour::{build_contour, scale_contour, ScaleParameters};
use foilcut_rs::dat::parse_dat;
use foilcut_rs::emit::csv::emit_csv;

fn synthetic_dat(points_per_surface: usize) -> String {
    let n = points_per_surface;
    let mut text = String::new();
    writeln!(text, "SYNTHETIC PROFILE").unwrap();
    writeln!(text, "{}. {}.", n, n).unwrap();
    writeln!(text).unwrap();

    for sign in [1.0, -1.0] {
        for i in 0..n {
            let x = i as f64 / (n - 1) as f64;
            let y = sign * 0.2 * x.sqrt() * (1.0 - x);
            writeln!(text, "{:.6} {:.6}", x, y).unwrap();
        }
        writeln!(text).unwrap();
    }

    text
}

fn benchmark(c: &mut Criterion) {
    let raw = synthetic_dat(200);
    let params = ScaleParameters::new(180, 22);

    c.bench_function("Profile Pipeline", |b| {
        b.iter(|| {
            let profile = parse_dat(black_box(&raw)).unwrap();
            let contour = build_contour(&profile).unwrap();
            let scaled = scale_contour(&contour, black_box(&params)).unwrap();
            emit_csv(&scaled)
        })
    });
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
