use arcball::camera::Camera;
use arcball::input::VirtualTrackball;
use arcball::math;
use arcball::scene::Scene;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::{Vec2, Vec3};

fn test_scene() -> Scene {
    let camera = Camera::new(
        Vec3::new(10.0, 10.0, -10.0),
        Vec3::ZERO,
        Vec3::ZERO,
        Vec3::Y,
    )
    .unwrap();
    Scene::new(camera)
}

fn axis_angle_benchmark(c: &mut Criterion) {
    c.bench_function("rotation_from_axis_angle", |b| {
        b.iter(|| {
            math::rotation_from_axis_angle(
                black_box(Vec3::new(0.2, 0.9, -0.1)),
                black_box(0.4),
            )
        })
    });
}

fn compute_rotation_benchmark(c: &mut Criterion) {
    let mut trackball = VirtualTrackball::new(800.0, 600.0).unwrap();
    let mut scene = test_scene();
    trackball.on_pointer_down(Vec2::new(400.0, 300.0));
    trackball
        .on_pointer_up(Vec2::new(600.0, 250.0), &mut scene)
        .unwrap();

    c.bench_function("compute_rotation", |b| {
        b.iter(|| black_box(trackball.compute_rotation()))
    });
}

fn full_gesture_benchmark(c: &mut Criterion) {
    c.bench_function("pointer_down_up_gesture", |b| {
        let mut trackball = VirtualTrackball::new(800.0, 600.0).unwrap();
        let mut scene = test_scene();
        b.iter(|| {
            trackball.on_pointer_down(black_box(Vec2::new(400.0, 300.0)));
            trackball
                .on_pointer_up(black_box(Vec2::new(420.0, 310.0)), &mut scene)
        })
    });
}

criterion_group!(
    benches,
    axis_angle_benchmark,
    compute_rotation_benchmark,
    full_gesture_benchmark
);
criterion_main!(benches);
