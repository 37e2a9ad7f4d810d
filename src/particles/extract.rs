use crate::{
    foundation::error::{StippleError, StippleResult},
    foundation::math::Rng64,
    particles::particle::{Particle, ParticleSet},
};

/// Straight-alpha RGBA8 pixels read back from an image, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Raster {
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> StippleResult<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|px| px.checked_mul(4))
            .ok_or_else(|| StippleError::validation("raster dimensions overflow"))?;
        if data.len() != expected {
            return Err(StippleError::validation(format!(
                "raster {width}x{height} expects {expected} rgba8 bytes, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

/// Read-back seam for decoded images.
///
/// Implementations read from memory they own (an off-screen buffer), never from a surface that
/// is being displayed, so extraction leaves nothing behind on screen.
pub trait PixelSource {
    fn read_rgba(&self) -> StippleResult<Raster>;
}

impl PixelSource for Raster {
    fn read_rgba(&self) -> StippleResult<Raster> {
        Ok(self.clone())
    }
}

impl PixelSource for image::RgbaImage {
    fn read_rgba(&self) -> StippleResult<Raster> {
        Raster::new(self.width(), self.height(), self.as_raw().clone())
    }
}

/// One particle per pixel with non-zero alpha, in row-major order, without jitter.
#[tracing::instrument(skip(raster), fields(width = raster.width(), height = raster.height()))]
pub fn extract(raster: &Raster) -> ParticleSet {
    let set = scan(raster, |x, y, a| Particle::new(x, y, a));
    tracing::debug!(particles = set.len(), "extracted particle set");
    set
}

/// Like [`extract`], but every particle also gets `rx`, `ry` drawn uniformly from `[-0.5, 0.5)`.
///
/// Jitter is drawn in particle order (`rx` then `ry`), so the result is a pure function of the
/// raster and the generator state.
#[tracing::instrument(
    skip(raster, rng),
    fields(width = raster.width(), height = raster.height())
)]
pub fn extract_jittered(raster: &Raster, rng: &mut Rng64) -> ParticleSet {
    let set = scan(raster, |x, y, a| {
        let rx = rng.next_f64_01() - 0.5;
        let ry = rng.next_f64_01() - 0.5;
        Particle::new(x, y, a).with_jitter(rx, ry)
    });
    tracing::debug!(particles = set.len(), "extracted jittered particle set");
    set
}

/// Read pixels from `source` and extract them, with or without jitter.
pub fn extract_from(
    source: &dyn PixelSource,
    rng: Option<&mut Rng64>,
) -> StippleResult<ParticleSet> {
    let raster = source.read_rgba()?;
    Ok(match rng {
        Some(rng) => extract_jittered(&raster, rng),
        None => extract(&raster),
    })
}

fn scan(raster: &Raster, mut make: impl FnMut(u32, u32, u8) -> Particle) -> ParticleSet {
    let mut particles = Vec::new();
    if raster.width > 0 {
        for (y, row) in raster.data.chunks_exact(raster.width as usize * 4).enumerate() {
            for (x, px) in row.chunks_exact(4).enumerate() {
                let a = px[3];
                if a > 0 {
                    particles.push(make(x as u32, y as u32, a));
                }
            }
        }
    }
    ParticleSet::new(raster.width, raster.height, particles)
}

#[cfg(test)]
#[path = "../../tests/unit/particles/extract.rs"]
mod tests;
