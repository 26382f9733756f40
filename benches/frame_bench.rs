//! Per-frame cost of the camera kernel.

use std::hint::black_box;

use camkit::math::{look_at, multiply, perspective};
use camkit::mesh::parse_obj;
use camkit::options::Options;
use camkit::{Scene, SceneKind};
use criterion::{criterion_group, criterion_main, Criterion};
use glam::Vec3;

fn matrix_benchmark(c: &mut Criterion) {
    let _ = c.bench_function("look_at_times_perspective", |b| {
        b.iter(|| {
            let view = look_at(
                black_box(Vec3::new(2.0, 2.0, 5.0)),
                black_box(Vec3::ZERO),
                Vec3::Y,
            );
            multiply(perspective(60.0, 16.0 / 9.0, 0.1, 100.0), view)
        })
    });
}

fn render_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene_render");
    let options = Options::default();

    for kind in [SceneKind::FreeFly, SceneKind::Orbit] {
        let mut scene = Scene::new(kind, &options);
        let key = match kind {
            SceneKind::FreeFly => "KeyW",
            SceneKind::Orbit => "ArrowLeft",
        };
        let mut t = 0.0;
        let _ = group.bench_function(kind.to_string(), |b| {
            b.iter(|| {
                t += 1.0 / 60.0;
                let _ = scene.handle_key(key, true);
                black_box(scene.render(black_box(t)))
            })
        });
    }
    group.finish();
}

fn obj_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_obj");

    for rings in [8_u32, 32, 128] {
        let text = sphere_obj(rings);
        let _ = group.bench_function(format!("{rings}_rings"), |b| {
            b.iter(|| black_box(parse_obj(black_box(&text))))
        });
    }
    group.finish();
}

/// UV sphere as OBJ text, quads only.
fn sphere_obj(rings: u32) -> String {
    use std::fmt::Write;

    let segments = rings * 2;
    let mut out = String::new();
    for r in 0..=rings {
        let theta = std::f32::consts::PI * r as f32 / rings as f32;
        for s in 0..segments {
            let phi = std::f32::consts::TAU * s as f32 / segments as f32;
            let _ = writeln!(
                out,
                "v {} {} {}",
                theta.sin() * phi.cos(),
                theta.cos(),
                theta.sin() * phi.sin()
            );
        }
    }
    for r in 0..rings {
        for s in 0..segments {
            let a = r * segments + s + 1;
            let b = r * segments + (s + 1) % segments + 1;
            let _ = writeln!(out, "f {a} {b} {} {}", b + segments, a + segments);
        }
    }
    out
}

criterion_group!(benches, matrix_benchmark, render_benchmark, obj_benchmark);
criterion_main!(benches);
