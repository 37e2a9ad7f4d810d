use crate::{
    foundation::error::{StippleError, StippleResult},
    render::animator::Animator,
    render::frame::RenderSurface,
    scene::model::Scene,
};

/// Host refresh primitive: asks for exactly one more [`FrameLoop::on_frame`] callback.
pub trait FrameScheduler {
    fn request_frame(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Running,
    Stopped,
}

/// Continuous animation loop over a prepared scene.
///
/// `Running` re-requests a callback after every presented frame. `Stopped` is terminal: once
/// there, `on_frame` ignores late callbacks and nothing is scheduled again. The loop keeps no
/// per-frame state; each frame is rendered from scratch by [`Animator`].
pub struct FrameLoop<'s> {
    scene: &'s Scene,
    state: LoopState,
    presented: u64,
}

impl<'s> FrameLoop<'s> {
    pub fn new(scene: &'s Scene) -> Self {
        Self {
            scene,
            state: LoopState::Idle,
            presented: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn presented(&self) -> u64 {
        self.presented
    }

    /// `Idle -> Running`, requesting the first frame. Starting a running loop is a no-op.
    pub fn start(&mut self, scheduler: &mut dyn FrameScheduler) -> StippleResult<()> {
        match self.state {
            LoopState::Idle => {
                self.state = LoopState::Running;
                scheduler.request_frame();
                tracing::debug!(particles = self.scene.particle_count(), "frame loop started");
                Ok(())
            }
            LoopState::Running => Ok(()),
            LoopState::Stopped => Err(StippleError::evaluation(
                "frame loop was stopped and cannot be restarted",
            )),
        }
    }

    pub fn stop(&mut self) {
        if self.state != LoopState::Stopped {
            tracing::debug!(presented = self.presented, "frame loop stopped");
        }
        self.state = LoopState::Stopped;
    }

    /// Handle one refresh callback at host time `t_ms`.
    ///
    /// Returns `Ok(true)` if a frame was presented. A surface error stops the loop before it is
    /// propagated, so a failed frame never schedules another one.
    pub fn on_frame(
        &mut self,
        t_ms: f64,
        surface: &mut dyn RenderSurface,
        scheduler: &mut dyn FrameScheduler,
    ) -> StippleResult<bool> {
        if self.state != LoopState::Running {
            return Ok(false);
        }

        let (frame, stats) = Animator::render_frame_with_stats(self.scene, t_ms);
        if let Err(e) = surface.put_frame(&frame) {
            self.stop();
            return Err(e);
        }
        self.presented += 1;
        tracing::trace!(t_ms, drawn = stats.drawn, skipped = stats.skipped, "frame presented");
        scheduler.request_frame();
        Ok(true)
    }
}

/// Deterministic stand-in for a display: one callback every `1000 / fps` ms.
#[derive(Debug)]
pub struct FixedStepScheduler {
    next_t_ms: f64,
    step_ms: f64,
    pending: bool,
    requests: u64,
}

impl FixedStepScheduler {
    pub fn new(start_ms: f64, fps: f64) -> StippleResult<Self> {
        if !(fps.is_finite() && fps > 0.0) {
            return Err(StippleError::validation("fps must be finite and > 0"));
        }
        Ok(Self {
            next_t_ms: start_ms,
            step_ms: 1000.0 / fps,
            pending: false,
            requests: 0,
        })
    }

    /// Total `request_frame` calls received.
    pub fn requests(&self) -> u64 {
        self.requests
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Deliver callbacks while one is pending, at most `max_frames` of them.
    ///
    /// Returns the number of callbacks delivered.
    pub fn run(
        &mut self,
        frame_loop: &mut FrameLoop<'_>,
        surface: &mut dyn RenderSurface,
        max_frames: u64,
    ) -> StippleResult<u64> {
        let mut delivered = 0;
        while self.pending && delivered < max_frames {
            self.pending = false;
            let t = self.next_t_ms;
            self.next_t_ms += self.step_ms;
            frame_loop.on_frame(t, surface, self)?;
            delivered += 1;
        }
        Ok(delivered)
    }
}

impl FrameScheduler for FixedStepScheduler {
    fn request_frame(&mut self) {
        self.pending = true;
        self.requests += 1;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/driver/frame_loop.rs"]
mod tests;
