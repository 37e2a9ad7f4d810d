use crate::{
    animation::ease::{clamped_ramp, oscillate, swell, triangle_wave},
    foundation::error::{StippleError, StippleResult},
};

/// Which animation the scene plays.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Variant {
    /// Single image; particles drift out and back in a left-to-right travelling swell.
    Breathe(BreatheParams),
    /// Two images; particles interpolate between paired positions.
    Morph(MorphParams),
}

impl Variant {
    /// Number of source images the variant consumes.
    pub fn image_count(&self) -> usize {
        match self {
            Self::Breathe(_) => 1,
            Self::Morph(_) => 2,
        }
    }

    pub fn validate(&self) -> StippleResult<()> {
        match self {
            Self::Breathe(p) => p.validate(),
            Self::Morph(p) => p.curve.validate(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BreatheParams {
    pub duration_ms: f64,
    pub cutoff: f64,
    /// Time lag per source column; larger values stretch the wave across the image.
    pub phase_per_px: f64,
    pub amplitude_x: f64,
    pub amplitude_y: f64,
}

impl Default for BreatheParams {
    fn default() -> Self {
        Self {
            duration_ms: 4000.0,
            cutoff: 0.3,
            phase_per_px: 10.0,
            amplitude_x: 180.0,
            amplitude_y: 400.0,
        }
    }
}

impl BreatheParams {
    pub fn validate(&self) -> StippleResult<()> {
        positive("breathe.duration_ms", self.duration_ms)?;
        if !(self.cutoff > 0.0 && self.cutoff <= 1.0) {
            return Err(StippleError::validation(
                "breathe.cutoff must be in (0, 1]",
            ));
        }
        finite("breathe.phase_per_px", self.phase_per_px)?;
        finite("breathe.amplitude_x", self.amplitude_x)?;
        finite("breathe.amplitude_y", self.amplitude_y)
    }

    /// Displacement scale in `[-1, 1]` for a particle in source column `x` at time `t`.
    pub fn swell_at(&self, t: f64, x: u32) -> f64 {
        let phase = -f64::from(x) * self.phase_per_px;
        swell(t + phase, self.duration_ms, self.cutoff)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MorphParams {
    pub curve: BlendCurve,
    /// Tint particles toward the highlight color around the middle of the morph.
    #[serde(default)]
    pub glint: bool,
}

/// How the blend factor `k` evolves over time.
///
/// `k = 1` places a particle on its source-set position, `k = 0` on its target-set partner.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BlendCurve {
    /// Whole image swings back and forth together.
    Oscillate {
        #[serde(default = "default_period_ms")]
        period_ms: f64,
    },
    /// Per-particle morph that sweeps across the image, holding at each end for `cutoff`.
    Travel {
        #[serde(default = "default_travel_duration_ms")]
        duration_ms: f64,
        #[serde(default = "default_travel_cutoff")]
        cutoff: f64,
        #[serde(default = "default_travel_phase_per_px")]
        phase_per_px: f64,
    },
    /// Constant blend factor.
    Fixed { k: f64 },
}

fn default_period_ms() -> f64 {
    4000.0
}

fn default_travel_duration_ms() -> f64 {
    6000.0
}

fn default_travel_cutoff() -> f64 {
    0.2
}

fn default_travel_phase_per_px() -> f64 {
    800.0
}

impl BlendCurve {
    pub fn validate(&self) -> StippleResult<()> {
        match *self {
            Self::Oscillate { period_ms } => positive("oscillate.period_ms", period_ms),
            Self::Travel {
                duration_ms,
                cutoff,
                phase_per_px,
            } => {
                positive("travel.duration_ms", duration_ms)?;
                positive("travel.phase_per_px", phase_per_px)?;
                if !(0.0..0.5).contains(&cutoff) {
                    return Err(StippleError::validation(
                        "travel.cutoff must be in [0, 0.5)",
                    ));
                }
                Ok(())
            }
            Self::Fixed { k } => {
                if !(0.0..=1.0).contains(&k) {
                    return Err(StippleError::validation("fixed.k must be in [0, 1]"));
                }
                Ok(())
            }
        }
    }

    /// Blend factor at time `t` for a source particle in column `x`.
    pub fn factor(&self, t: f64, x: u32) -> f64 {
        match *self {
            Self::Oscillate { period_ms } => oscillate(t, period_ms),
            Self::Travel {
                duration_ms,
                cutoff,
                phase_per_px,
            } => {
                let phase = -f64::from(x) / phase_per_px;
                let rt = ((t + phase) % duration_ms) / duration_ms;
                clamped_ramp(triangle_wave(rt + phase), cutoff)
            }
            Self::Fixed { k } => k,
        }
    }

    /// `true` when the factor is the same for every particle within a frame.
    pub fn is_uniform(&self) -> bool {
        !matches!(self, Self::Travel { .. })
    }
}

fn finite(name: &str, v: f64) -> StippleResult<()> {
    if !v.is_finite() {
        return Err(StippleError::validation(format!("{name} must be finite")));
    }
    Ok(())
}

fn positive(name: &str, v: f64) -> StippleResult<()> {
    finite(name, v)?;
    if v <= 0.0 {
        return Err(StippleError::validation(format!("{name} must be > 0")));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/animation/variant.rs"]
mod tests;
