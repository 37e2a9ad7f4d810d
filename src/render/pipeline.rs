use rayon::prelude::*;

use crate::{
    foundation::error::{StippleError, StippleResult},
    render::animator::Animator,
    render::frame::{FrameRGBA, FrameStats},
    scene::model::Scene,
};

#[derive(Clone, Debug, Default)]
/// Threading controls for offline multi-frame rendering.
pub struct RenderThreading {
    /// Enable parallel rendering when `true`.
    pub parallel: bool,
    /// Optional explicit worker thread count.
    pub threads: Option<usize>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Aggregated counters over a rendered timeline.
pub struct RenderStats {
    pub frames: u64,
    pub drawn: u64,
    pub skipped: u64,
}

impl RenderStats {
    fn add(&mut self, frame: FrameStats) {
        self.frames += 1;
        self.drawn += frame.drawn;
        self.skipped += frame.skipped;
    }
}

/// Timestamps for `count` display refreshes at `fps`, starting at `start_ms`.
pub fn frame_times(start_ms: f64, fps: f64, count: usize) -> StippleResult<Vec<f64>> {
    if !(fps.is_finite() && fps > 0.0) {
        return Err(StippleError::validation("fps must be finite and > 0"));
    }
    let step = 1000.0 / fps;
    Ok((0..count).map(|i| start_ms + step * i as f64).collect())
}

/// Render one frame per timestamp, in input order.
///
/// Frames are pure functions of `(scene, t)`, so the parallel path produces exactly the same
/// bytes as the serial one.
pub fn render_timeline(
    scene: &Scene,
    times_ms: &[f64],
    threading: &RenderThreading,
) -> StippleResult<(Vec<FrameRGBA>, RenderStats)> {
    let rendered: Vec<(FrameRGBA, FrameStats)> = if threading.parallel {
        let pool = build_thread_pool(threading.threads)?;
        pool.install(|| {
            times_ms
                .par_iter()
                .map(|&t| Animator::render_frame_with_stats(scene, t))
                .collect()
        })
    } else {
        times_ms
            .iter()
            .map(|&t| Animator::render_frame_with_stats(scene, t))
            .collect()
    };

    let mut stats = RenderStats::default();
    let mut frames = Vec::with_capacity(rendered.len());
    for (frame, frame_stats) in rendered {
        stats.add(frame_stats);
        frames.push(frame);
    }
    tracing::debug!(
        frames = stats.frames,
        skipped = stats.skipped,
        parallel = threading.parallel,
        "rendered timeline"
    );
    Ok((frames, stats))
}

fn build_thread_pool(threads: Option<usize>) -> StippleResult<rayon::ThreadPool> {
    if threads == Some(0) {
        return Err(StippleError::validation("threads must be > 0 when set"));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| StippleError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
