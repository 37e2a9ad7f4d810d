use std::path::Path;

use crate::{
    animation::variant::{BreatheParams, MorphParams, Variant},
    assets::decode::load_image,
    foundation::core::{Canvas, Rgb8},
    foundation::error::{StippleError, StippleResult},
    foundation::math::Rng64,
    particles::extract::{PixelSource, extract, extract_jittered},
    particles::mapping::MorphPair,
    particles::particle::ParticleSet,
    scene::config::SceneConfig,
};

/// Colors fixed for the lifetime of a scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub foreground: Rgb8,
    /// Foreground blended toward white; used for the mid-morph glint.
    pub highlight: Rgb8,
}

impl Palette {
    pub fn new(foreground: Rgb8, highlight_mix: f64) -> Self {
        Self {
            foreground,
            highlight: foreground.highlight(highlight_mix),
        }
    }
}

#[derive(Clone, Debug)]
pub enum SceneContent {
    Breathe {
        particles: ParticleSet,
        params: BreatheParams,
    },
    Morph {
        pair: MorphPair,
        params: MorphParams,
    },
}

/// Everything the animator reads: built once, never mutated while frames are rendered.
#[derive(Clone, Debug)]
pub struct Scene {
    pub canvas: Canvas,
    pub palette: Palette,
    content: SceneContent,
}

impl Scene {
    pub fn breathe(
        canvas: Canvas,
        palette: Palette,
        particles: ParticleSet,
        params: BreatheParams,
    ) -> StippleResult<Self> {
        canvas.validate()?;
        params.validate()?;
        Ok(Self {
            canvas,
            palette,
            content: SceneContent::Breathe { particles, params },
        })
    }

    pub fn morph(
        canvas: Canvas,
        palette: Palette,
        pair: MorphPair,
        params: MorphParams,
    ) -> StippleResult<Self> {
        canvas.validate()?;
        params.curve.validate()?;
        Ok(Self {
            canvas,
            palette,
            content: SceneContent::Morph { pair, params },
        })
    }

    pub fn content(&self) -> &SceneContent {
        &self.content
    }

    /// Particles evaluated per frame.
    pub fn particle_count(&self) -> usize {
        match &self.content {
            SceneContent::Breathe { particles, .. } => particles.len(),
            SceneContent::Morph { pair, .. } => pair.mapping().len(),
        }
    }

    /// Build a scene from already-decoded images, one per image slot of the variant.
    ///
    /// All randomness (breathing jitter, correspondence draws) comes from `config.seed`.
    pub fn from_sources(
        config: &SceneConfig,
        sources: &[&dyn PixelSource],
    ) -> StippleResult<Self> {
        config.validate()?;
        let want = config.variant.image_count();
        if sources.len() != want {
            return Err(StippleError::validation(format!(
                "variant needs {want} image(s), got {}",
                sources.len()
            )));
        }

        let palette = Palette::new(config.foreground.resolve()?, config.highlight_mix);
        let mut rng = Rng64::new(config.seed);

        match &config.variant {
            Variant::Breathe(params) => {
                let raster = sources[0].read_rgba()?;
                let particles = extract_jittered(&raster, &mut rng);
                Self::breathe(config.canvas, palette, particles, params.clone())
            }
            Variant::Morph(params) => {
                let first = extract(&sources[0].read_rgba()?);
                let second = extract(&sources[1].read_rgba()?);
                let pair = MorphPair::new(first, second, &mut rng)?;
                Self::morph(config.canvas, palette, pair, params.clone())
            }
        }
    }

    /// Load the config's images from `assets_root` and build the scene.
    #[tracing::instrument(skip(config))]
    pub fn prepare(config: &SceneConfig, assets_root: &Path) -> StippleResult<Self> {
        config.validate()?;
        let images = config
            .image_paths(assets_root)?
            .iter()
            .map(|p| load_image(p))
            .collect::<StippleResult<Vec<_>>>()?;
        let sources: Vec<&dyn PixelSource> =
            images.iter().map(|img| img as &dyn PixelSource).collect();

        let scene = Self::from_sources(config, &sources)?;
        tracing::info!(
            particles = scene.particle_count(),
            width = scene.canvas.width,
            height = scene.canvas.height,
            "scene prepared"
        );
        Ok(scene)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
