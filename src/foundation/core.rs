pub use kurbo::Vec2;

use crate::foundation::error::{StippleError, StippleResult};

/// Output surface size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    /// Largest accepted surface, in pixels (8192 x 8192, 256 MiB per RGBA8 frame).
    pub const MAX_PIXELS: u64 = 8192 * 8192;

    /// Non-empty and at most [`Canvas::MAX_PIXELS`]; every frame allocates the full buffer.
    pub fn validate(self) -> StippleResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(StippleError::validation("canvas width/height must be > 0"));
        }
        let pixels = u64::from(self.width) * u64::from(self.height);
        if pixels > Self::MAX_PIXELS {
            return Err(StippleError::validation(format!(
                "canvas {}x{} has {pixels} pixels, limit is {}",
                self.width,
                self.height,
                Self::MAX_PIXELS
            )));
        }
        Ok(())
    }

    pub fn byte_len(self) -> usize {
        (self.width as usize)
            .saturating_mul(self.height as usize)
            .saturating_mul(4)
    }

    /// Top-left offset that centers a `width x height` image on this canvas.
    ///
    /// Fractional offsets are kept; callers truncate when writing pixels.
    pub fn center_offset(self, width: u32, height: u32) -> Vec2 {
        Vec2::new(
            (f64::from(self.width) - f64::from(width)) / 2.0,
            (f64::from(self.height) - f64::from(height)) / 2.0,
        )
    }
}

/// Straight (non-premultiplied) RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channel-wise `lerp(self, other, t)`; `t = 1` yields `self`, `t = 0` yields `other`.
    pub fn mix(self, other: Self, t: f64) -> Self {
        fn channel(a: u8, b: u8, t: f64) -> u8 {
            to_u8(crate::foundation::math::lerp(f64::from(a), f64::from(b), t))
        }

        Self {
            r: channel(self.r, other.r, t),
            g: channel(self.g, other.g, t),
            b: channel(self.b, other.b, t),
        }
    }

    /// Blend toward white by `amount` in `[0, 1]` (0 keeps the color, 1 is white).
    pub fn highlight(self, amount: f64) -> Self {
        Self::WHITE.mix(self, amount.clamp(0.0, 1.0))
    }
}

/// Round and clamp into a byte, the way a clamped 8-bit pixel store behaves.
pub(crate) fn to_u8(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    v.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
