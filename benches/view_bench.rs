//! Benchmarks for the per-frame hot paths: clip sampling, key routing and
//! a full engine update.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Quat;
use pong3d::animation::{ClipTiming, OrientationClip};
use pong3d::camera::ViewTargets;
use pong3d::input::{InputRouter, KeyInput, Modifiers};
use pong3d::options::ViewOptions;
use pong3d::util::easing::EasingFunction;
use pong3d::surface::FrameSnapshot;
use pong3d::{DebugOverlay, Options, PongEngine, RenderSurface};

/// Surface that discards frames so long runs stay flat in memory.
#[derive(Default)]
struct NullSurface {
    overlay: bool,
}

impl DebugOverlay for NullSurface {
    fn show(&mut self) {
        self.overlay = true;
    }

    fn hide(&mut self) {
        self.overlay = false;
    }

    fn is_visible(&self) -> bool {
        self.overlay
    }
}

impl RenderSurface for NullSurface {
    fn render(&mut self, frame: &FrameSnapshot) {
        let _ = black_box(frame);
    }

    fn resize(&mut self, _width: u32, _height: u32) {}

    fn set_menu_content(&mut self, _content: &str) {}
}

fn clip_sampling_benchmark(c: &mut Criterion) {
    let ViewTargets { gameplay, menu } = ViewOptions::default().targets();
    let linear = OrientationClip::new("bench", menu, gameplay, ClipTiming::default());
    let eased = linear.with_easing(EasingFunction::EASE_OUT);

    c.bench_function("clip_sample_linear", |b| {
        b.iter(|| black_box(linear.sample(black_box(0.37))))
    });
    c.bench_function("clip_sample_eased", |b| {
        b.iter(|| black_box(eased.sample(black_box(0.37))))
    });
    c.bench_function("clip_sample_shortest_arc", |b| {
        let flipped = OrientationClip::new(
            "bench",
            Quat::IDENTITY,
            -Quat::from_rotation_y(0.5),
            ClipTiming::default(),
        );
        b.iter(|| black_box(flipped.sample(black_box(0.5))))
    });
}

fn routing_benchmark(c: &mut Criterion) {
    let router = InputRouter::default();
    let arrow = KeyInput::new("ArrowUp", "ArrowUp");
    let chord = KeyInput::new("i", "KeyI").with_modifiers(Modifiers::SHIFT_CTRL_ALT);
    let unbound = KeyInput::new("q", "KeyQ");

    let mut group = c.benchmark_group("route");
    group.bench_function("paddle", |b| b.iter(|| black_box(router.route(black_box(&arrow)))));
    group.bench_function("chord", |b| b.iter(|| black_box(router.route(black_box(&chord)))));
    group.bench_function("unbound", |b| b.iter(|| black_box(router.route(black_box(&unbound)))));
    group.finish();
}

fn engine_update_benchmark(c: &mut Criterion) {
    let space = KeyInput::new(" ", "Space");
    c.bench_function("engine_update_with_toggle", |b| {
        let mut engine = PongEngine::init(Options::default(), NullSurface::default());
        b.iter(|| {
            let _ = engine.handle_key(&space);
            engine.update(black_box(1.0 / 60.0));
        });
    });
}

criterion_group!(
    benches,
    clip_sampling_benchmark,
    routing_benchmark,
    engine_update_benchmark
);
criterion_main!(benches);
