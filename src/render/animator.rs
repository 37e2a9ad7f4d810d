use crate::{
    animation::ease::glint,
    foundation::core::{Rgb8, Vec2, to_u8},
    foundation::math::{lerp, lerp_vec2},
    render::frame::{FrameRGBA, FrameStats},
    scene::model::{Scene, SceneContent},
};

/// A particle's evaluated state for one frame, before rasterization.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Canvas-space position; the written pixel is the truncated coordinate.
    pub pos: Vec2,
    pub color: Rgb8,
    pub a: u8,
}

/// Stateless per-frame evaluator.
///
/// Output depends only on `(scene, t_ms)`: every call starts from a transparent buffer and
/// nothing is carried between calls.
pub struct Animator;

impl Animator {
    pub fn render_frame(scene: &Scene, t_ms: f64) -> FrameRGBA {
        Self::render_frame_with_stats(scene, t_ms).0
    }

    #[tracing::instrument(level = "trace", skip(scene))]
    pub fn render_frame_with_stats(scene: &Scene, t_ms: f64) -> (FrameRGBA, FrameStats) {
        let mut frame = FrameRGBA::transparent(scene.canvas);
        let mut stats = FrameStats::default();
        Self::for_each_placement(scene, t_ms, |p| {
            if put(&mut frame, &p) {
                stats.drawn += 1;
            } else {
                stats.skipped += 1;
            }
        });
        if stats.skipped > 0 {
            tracing::trace!(skipped = stats.skipped, "particles fell outside the canvas");
        }
        (frame, stats)
    }

    /// Evaluated placements in particle order.
    pub fn placements(scene: &Scene, t_ms: f64) -> Vec<Placement> {
        let mut out = Vec::with_capacity(scene.particle_count());
        Self::for_each_placement(scene, t_ms, |p| out.push(p));
        out
    }

    pub fn for_each_placement(scene: &Scene, t_ms: f64, mut f: impl FnMut(Placement)) {
        let palette = scene.palette;
        match scene.content() {
            SceneContent::Breathe { particles, params } => {
                let base = scene
                    .canvas
                    .center_offset(particles.width, particles.height);
                for p in particles {
                    let s = params.swell_at(t_ms, p.x);
                    let drift = Vec2::new(
                        s * params.amplitude_x * p.rx,
                        s * params.amplitude_y * p.ry,
                    );
                    f(Placement {
                        pos: base + p.pos() + drift,
                        color: palette.foreground,
                        a: p.a,
                    });
                }
            }
            SceneContent::Morph { pair, params } => {
                let (source, target) = (pair.source(), pair.target());
                let base_a = scene.canvas.center_offset(source.width, source.height);
                let base_b = scene.canvas.center_offset(target.width, target.height);
                let uniform_k = params
                    .curve
                    .is_uniform()
                    .then(|| params.curve.factor(t_ms, 0));

                for (pa, &j) in source.iter().zip(pair.mapping().targets()) {
                    let pb = &target[j];
                    let k = uniform_k.unwrap_or_else(|| params.curve.factor(t_ms, pa.x));
                    let color = if params.glint {
                        palette.highlight.mix(palette.foreground, glint(k))
                    } else {
                        palette.foreground
                    };
                    f(Placement {
                        pos: lerp_vec2(base_a + pa.pos(), base_b + pb.pos(), k),
                        color,
                        a: to_u8(lerp(f64::from(pa.a), f64::from(pb.a), k)),
                    });
                }
            }
        }
    }
}

/// Write one placement; returns `false` (and writes nothing) when the pixel is off-canvas.
fn put(frame: &mut FrameRGBA, p: &Placement) -> bool {
    let x = p.pos.x.trunc();
    let y = p.pos.y.trunc();
    let inside =
        x >= 0.0 && y >= 0.0 && x < f64::from(frame.width) && y < f64::from(frame.height);
    if !inside {
        return false;
    }
    let o = 4 * (x as usize + y as usize * frame.width as usize);
    frame.data[o..o + 4].copy_from_slice(&[p.color.r, p.color.g, p.color.b, p.a]);
    true
}

#[cfg(test)]
#[path = "../../tests/unit/render/animator.rs"]
mod tests;
