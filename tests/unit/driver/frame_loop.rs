use super::*;
use crate::{
    animation::variant::BreatheParams,
    foundation::core::{Canvas, Rgb8},
    particles::extract::{Raster, extract},
    render::frame::{FrameRGBA, InMemorySurface},
    scene::model::Palette,
};

fn scene() -> Scene {
    let raster = Raster::new(2, 2, [1, 1, 1, 255].repeat(4)).unwrap();
    Scene::breathe(
        Canvas {
            width: 4,
            height: 4,
        },
        Palette::new(Rgb8::new(1, 2, 3), 0.5),
        extract(&raster),
        BreatheParams::default(),
    )
    .unwrap()
}

#[derive(Default)]
struct CountingScheduler {
    requests: u32,
}

impl FrameScheduler for CountingScheduler {
    fn request_frame(&mut self) {
        self.requests += 1;
    }
}

struct FailingSurface {
    ok_frames: u32,
}

impl RenderSurface for FailingSurface {
    fn put_frame(&mut self, _frame: &FrameRGBA) -> StippleResult<()> {
        if self.ok_frames == 0 {
            return Err(StippleError::evaluation("surface lost"));
        }
        self.ok_frames -= 1;
        Ok(())
    }
}

#[test]
fn idle_loop_ignores_callbacks() {
    let scene = scene();
    let mut lp = FrameLoop::new(&scene);
    let mut sched = CountingScheduler::default();
    let mut surface = InMemorySurface::new();
    assert_eq!(lp.state(), LoopState::Idle);
    assert!(!lp.on_frame(0.0, &mut surface, &mut sched).unwrap());
    assert_eq!(sched.requests, 0);
    assert!(surface.frames().is_empty());
}

#[test]
fn running_loop_reschedules_every_frame() {
    let scene = scene();
    let mut lp = FrameLoop::new(&scene);
    let mut sched = CountingScheduler::default();
    let mut surface = InMemorySurface::new();

    lp.start(&mut sched).unwrap();
    lp.start(&mut sched).unwrap();
    assert_eq!(sched.requests, 1);

    for i in 0..5 {
        assert!(lp.on_frame(f64::from(i) * 16.0, &mut surface, &mut sched).unwrap());
    }
    assert_eq!(sched.requests, 6);
    assert_eq!(lp.presented(), 5);
    assert_eq!(surface.frames().len(), 5);
}

#[test]
fn stop_prevents_any_further_scheduling() {
    let scene = scene();
    let mut lp = FrameLoop::new(&scene);
    let mut sched = CountingScheduler::default();
    let mut surface = InMemorySurface::new();

    lp.start(&mut sched).unwrap();
    lp.on_frame(0.0, &mut surface, &mut sched).unwrap();
    lp.stop();
    let before = sched.requests;

    // A callback already queued by the host arrives after stop.
    assert!(!lp.on_frame(16.0, &mut surface, &mut sched).unwrap());
    assert_eq!(sched.requests, before);
    assert_eq!(surface.frames().len(), 1);
    assert!(lp.start(&mut sched).is_err());
    assert_eq!(lp.state(), LoopState::Stopped);
}

#[test]
fn surface_failure_stops_the_loop() {
    let scene = scene();
    let mut lp = FrameLoop::new(&scene);
    let mut sched = CountingScheduler::default();
    let mut surface = FailingSurface { ok_frames: 2 };

    lp.start(&mut sched).unwrap();
    assert!(lp.on_frame(0.0, &mut surface, &mut sched).unwrap());
    assert!(lp.on_frame(16.0, &mut surface, &mut sched).unwrap());
    let err = lp.on_frame(32.0, &mut surface, &mut sched).unwrap_err();
    assert!(err.to_string().contains("surface lost"));
    assert_eq!(lp.state(), LoopState::Stopped);
    assert_eq!(sched.requests, 3);
    assert_eq!(lp.presented(), 2);
}

#[test]
fn fixed_step_scheduler_drives_frames_at_refresh_times() {
    let scene = scene();
    let mut lp = FrameLoop::new(&scene);
    let mut sched = FixedStepScheduler::new(1000.0, 50.0).unwrap();
    let mut surface = InMemorySurface::new();

    assert_eq!(sched.run(&mut lp, &mut surface, 10).unwrap(), 0);

    lp.start(&mut sched).unwrap();
    assert_eq!(sched.run(&mut lp, &mut surface, 4).unwrap(), 4);
    assert!(sched.is_pending());
    assert_eq!(surface.frames().len(), 4);

    let expected: Vec<FrameRGBA> = [1000.0, 1020.0, 1040.0, 1060.0]
        .iter()
        .map(|&t| Animator::render_frame(&scene, t))
        .collect();
    assert_eq!(surface.frames(), expected.as_slice());

    lp.stop();
    assert_eq!(sched.run(&mut lp, &mut surface, 4).unwrap(), 1);
    assert!(!sched.is_pending());
    assert_eq!(surface.frames().len(), 4);
    assert_eq!(sched.requests(), 5);
}

#[test]
fn fixed_step_rejects_bad_fps() {
    assert!(FixedStepScheduler::new(0.0, 0.0).is_err());
    assert!(FixedStepScheduler::new(0.0, f64::INFINITY).is_err());
}
