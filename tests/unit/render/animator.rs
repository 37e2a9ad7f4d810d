use super::*;
use crate::{
    animation::variant::{BlendCurve, BreatheParams, MorphParams},
    foundation::core::Canvas,
    foundation::math::Rng64,
    particles::extract::{Raster, extract, extract_jittered},
    particles::mapping::MorphPair,
    particles::particle::ParticleSet,
    scene::model::Palette,
};

const FG: Rgb8 = Rgb8::new(20, 40, 60);

fn canvas(width: u32, height: u32) -> Canvas {
    Canvas { width, height }
}

fn solid(width: u32, height: u32, a: u8) -> Raster {
    Raster::new(width, height, [9, 9, 9, a].repeat((width * height) as usize)).unwrap()
}

fn breathe_scene(c: Canvas, particles: ParticleSet) -> Scene {
    Scene::breathe(c, Palette::new(FG, 0.5), particles, BreatheParams::default()).unwrap()
}

fn morph_scene(
    c: Canvas,
    a: ParticleSet,
    b: ParticleSet,
    curve: BlendCurve,
    with_glint: bool,
) -> Scene {
    let pair = MorphPair::new(a, b, &mut Rng64::new(7)).unwrap();
    let params = MorphParams {
        curve,
        glint: with_glint,
    };
    Scene::morph(c, Palette::new(FG, 0.5), pair, params).unwrap()
}

#[test]
fn empty_set_draws_nothing() {
    let scene = breathe_scene(canvas(8, 8), extract(&solid(4, 4, 0)));
    let (frame, stats) = Animator::render_frame_with_stats(&scene, 1234.0);
    assert_eq!(frame.covered_pixels(), 0);
    assert_eq!(stats, FrameStats::default());
}

#[test]
fn breathe_without_jitter_is_the_centered_silhouette() {
    let scene = breathe_scene(canvas(8, 6), extract(&solid(4, 2, 77)));
    for t in [0.0, 600.0, 3999.0] {
        let frame = Animator::render_frame(&scene, t);
        assert_eq!(frame.covered_pixels(), 8);
        for y in 0..6 {
            for x in 0..8 {
                let inside = (2..6).contains(&x) && (2..4).contains(&y);
                let want = if inside { [20, 40, 60, 77] } else { [0, 0, 0, 0] };
                assert_eq!(frame.pixel(x, y), Some(want), "t={t} ({x},{y})");
            }
        }
    }
}

#[test]
fn breathe_jitter_rests_between_swells() {
    let particles = extract_jittered(&solid(4, 4, 255), &mut Rng64::new(3));
    let scene = breathe_scene(canvas(1000, 1000), particles.clone());
    let base = Vec2::new(498.0, 498.0);

    // Every column is past its ramp at t=2000 (lag <= 30 ms), so nothing is displaced.
    for (p, placed) in particles.iter().zip(Animator::placements(&scene, 2000.0)) {
        assert_eq!(placed.pos, base + p.pos());
    }

    // Column 0 peaks at t=600: displacement is the full 180/400 amplitude times its jitter.
    for (p, placed) in particles.iter().zip(Animator::placements(&scene, 600.0)) {
        if p.x != 0 {
            continue;
        }
        let want = base + p.pos() + Vec2::new(180.0 * p.rx, 400.0 * p.ry);
        assert!((placed.pos - want).hypot() < 1e-9);
        assert_eq!(placed.a, 255);
    }
}

#[test]
fn frames_are_pure() {
    let particles = extract_jittered(&solid(5, 3, 200), &mut Rng64::new(1));
    let scene = breathe_scene(canvas(64, 64), particles);
    let a = Animator::render_frame(&scene, 777.0);
    let _ = Animator::render_frame(&scene, 123.0);
    let b = Animator::render_frame(&scene, 777.0);
    assert_eq!(a, b);
}

#[test]
fn morph_endpoints_match_each_silhouette() {
    let wide = extract(&solid(4, 1, 255));
    let small = extract(&solid(2, 1, 100));
    let c = canvas(8, 3);

    let at_source = Animator::render_frame(
        &morph_scene(c, wide.clone(), small.clone(), BlendCurve::Fixed { k: 1.0 }, false),
        0.0,
    );
    for x in 2..6 {
        assert_eq!(at_source.pixel(x, 1), Some([20, 40, 60, 255]));
    }
    assert_eq!(at_source.covered_pixels(), 4);

    let at_target = Animator::render_frame(
        &morph_scene(c, wide, small, BlendCurve::Fixed { k: 0.0 }, false),
        0.0,
    );
    assert_eq!(at_target.covered_pixels(), 2);
    assert_eq!(at_target.pixel(3, 1), Some([20, 40, 60, 100]));
    assert_eq!(at_target.pixel(4, 1), Some([20, 40, 60, 100]));
}

#[test]
fn morph_alpha_and_glint_follow_k() {
    let a = extract(&solid(1, 1, 200));
    let b = extract(&solid(1, 1, 100));
    let c = canvas(3, 3);

    let scene = morph_scene(c, a.clone(), b.clone(), BlendCurve::Fixed { k: 0.5 }, true);
    let placed = Animator::placements(&scene, 0.0);
    assert_eq!(placed.len(), 1);
    assert_eq!(placed[0].a, 150);
    assert_eq!(placed[0].color, scene.palette.highlight);

    let plain = morph_scene(c, a, b, BlendCurve::Fixed { k: 0.5 }, false);
    assert_eq!(Animator::placements(&plain, 0.0)[0].color, FG);
}

#[test]
fn travel_curve_varies_by_column() {
    let a = extract(&solid(3, 1, 255));
    let b = extract(&solid(3, 1, 255));
    let curve = BlendCurve::Travel {
        duration_ms: 1000.0,
        cutoff: 0.0,
        phase_per_px: 1.0,
    };
    let scene = morph_scene(canvas(5, 3), a, b, curve.clone(), true);
    let colors: Vec<Rgb8> = Animator::placements(&scene, 100.0)
        .iter()
        .map(|p| p.color)
        .collect();
    let source = match scene.content() {
        SceneContent::Morph { pair, .. } => pair.source().clone(),
        SceneContent::Breathe { .. } => unreachable!(),
    };
    for (p, color) in source.iter().zip(colors) {
        let k = curve.factor(100.0, p.x);
        assert_eq!(color, scene.palette.highlight.mix(FG, glint(k)));
    }
}

#[test]
fn off_canvas_writes_are_skipped() {
    // A 6x6 image on a 4x4 canvas overhangs one pixel on every side.
    let scene = breathe_scene(canvas(4, 4), extract(&solid(6, 6, 255)));
    let (frame, stats) = Animator::render_frame_with_stats(&scene, 0.0);
    assert_eq!(stats.drawn, 16);
    assert_eq!(stats.skipped, 20);
    assert_eq!(frame.covered_pixels(), 16);
}

#[test]
fn last_writer_wins() {
    let mut frame = FrameRGBA::transparent(canvas(2, 2));
    let first = Placement {
        pos: Vec2::new(1.7, 0.2),
        color: Rgb8::new(1, 1, 1),
        a: 10,
    };
    let second = Placement {
        pos: Vec2::new(1.1, 0.9),
        color: Rgb8::new(2, 2, 2),
        a: 20,
    };
    assert!(put(&mut frame, &first));
    assert!(put(&mut frame, &second));
    assert_eq!(frame.pixel(1, 0), Some([2, 2, 2, 20]));
    assert_eq!(frame.covered_pixels(), 1);
}

#[test]
fn put_truncates_toward_zero_and_rejects_nan() {
    let mut frame = FrameRGBA::transparent(canvas(2, 2));
    let edge = Placement {
        pos: Vec2::new(-0.5, 1.99),
        color: FG,
        a: 1,
    };
    assert!(put(&mut frame, &edge));
    assert_eq!(frame.pixel(0, 1), Some([20, 40, 60, 1]));

    let nan = Placement {
        pos: Vec2::new(f64::NAN, 0.0),
        ..edge
    };
    assert!(!put(&mut frame, &nan));
    let far = Placement {
        pos: Vec2::new(2.0, 0.0),
        ..edge
    };
    assert!(!put(&mut frame, &far));
}
