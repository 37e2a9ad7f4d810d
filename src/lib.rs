//! stipple renders an image as a cloud of particles and animates it.
//!
//! Two animations are supported: a single silhouette that "breathes" (particles drift out and
//! back in a wave that travels across the image) and a morph between two silhouettes through a
//! randomized particle correspondence.
//!
//! # Pipeline overview
//!
//! 1. **Extract**: `PixelSource -> Raster -> ParticleSet` (one particle per non-transparent pixel)
//! 2. **Pair** (morph only): `ParticleSet x ParticleSet -> MorphPair` via [`build_mapping`]
//! 3. **Animate**: `Scene + t_ms -> FrameRGBA` via [`Animator`], once per display refresh
//! 4. **Present**: [`FrameLoop`] hands each frame to a [`RenderSurface`]
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-seed**: all randomness comes from a seeded [`Rng64`].
//! - **Pure frames**: a frame depends only on the scene and its timestamp.
//! - **Straight RGBA8** output; every frame starts fully transparent.
#![forbid(unsafe_code)]

mod animation;
mod assets;
mod driver;
mod foundation;
mod particles;
mod render;
mod scene;

pub use animation::ease::{
    clamped_ramp, glint, oscillate, ramp_with_plateau, swell, triangle_wave,
};
pub use animation::variant::{BlendCurve, BreatheParams, MorphParams, Variant};
pub use assets::color::{ColorSpec, parse_css_color};
pub use assets::decode::{DecodedImage, decode_image, load_image};
pub use driver::frame_loop::{FixedStepScheduler, FrameLoop, FrameScheduler, LoopState};
pub use foundation::core::{Canvas, Rgb8, Vec2};
pub use foundation::error::{StippleError, StippleResult};
pub use foundation::math::{Rng64, lerp, lerp_vec2};
pub use particles::extract::{PixelSource, Raster, extract, extract_from, extract_jittered};
pub use particles::mapping::{Correspondence, MorphPair, build_mapping};
pub use particles::particle::{Particle, ParticleSet};
pub use render::animator::{Animator, Placement};
pub use render::frame::{
    FrameRGBA, FrameStats, InMemorySurface, PngSequenceSurface, RenderSurface, write_png,
};
pub use render::pipeline::{RenderStats, RenderThreading, frame_times, render_timeline};
pub use scene::config::SceneConfig;
pub use scene::model::{Palette, Scene, SceneContent};
