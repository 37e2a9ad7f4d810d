use crate::foundation::core::Vec2;

/// One opaque source pixel.
///
/// `rx`/`ry` are per-particle drift amplitudes in `[-0.5, 0.5)`; they are zero unless the set was
/// extracted with jitter.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Particle {
    pub x: u32,
    pub y: u32,
    pub a: u8,
    pub rx: f64,
    pub ry: f64,
}

impl Particle {
    pub fn new(x: u32, y: u32, a: u8) -> Self {
        Self {
            x,
            y,
            a,
            rx: 0.0,
            ry: 0.0,
        }
    }

    pub fn with_jitter(self, rx: f64, ry: f64) -> Self {
        Self { rx, ry, ..self }
    }

    pub fn pos(&self) -> Vec2 {
        Vec2::new(f64::from(self.x), f64::from(self.y))
    }
}

/// Particles extracted from one image, in row-major scan order.
///
/// The order is the index domain of any [`Correspondence`](crate::Correspondence) built over
/// this set. `width`/`height` are the source image dimensions, used to center the set.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParticleSet {
    pub width: u32,
    pub height: u32,
    particles: Vec<Particle>,
}

impl ParticleSet {
    pub fn new(width: u32, height: u32, particles: Vec<Particle>) -> Self {
        Self {
            width,
            height,
            particles,
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    pub fn get(&self, idx: usize) -> Option<&Particle> {
        self.particles.get(idx)
    }
}

impl std::ops::Index<usize> for ParticleSet {
    type Output = Particle;

    fn index(&self, idx: usize) -> &Particle {
        &self.particles[idx]
    }
}

impl<'a> IntoIterator for &'a ParticleSet {
    type Item = &'a Particle;
    type IntoIter = std::slice::Iter<'a, Particle>;

    fn into_iter(self) -> Self::IntoIter {
        self.particles.iter()
    }
}
