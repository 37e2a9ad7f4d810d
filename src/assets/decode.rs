use std::{path::Path, sync::Arc};

use anyhow::Context;

use crate::{
    StippleResult,
    particles::extract::{PixelSource, Raster},
};

/// Decoded image kept in its own off-screen memory, straight (non-premultiplied) RGBA8.
#[derive(Clone, Debug)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgba8: Arc<Vec<u8>>,
}

impl PixelSource for DecodedImage {
    fn read_rgba(&self) -> StippleResult<Raster> {
        Raster::new(self.width, self.height, self.rgba8.as_ref().clone())
    }
}

pub fn decode_image(bytes: &[u8]) -> StippleResult<DecodedImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(DecodedImage {
        width,
        height,
        rgba8: Arc::new(rgba.into_raw()),
    })
}

pub fn load_image(path: &Path) -> StippleResult<DecodedImage> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read image '{}'", path.display()))?;
    decode_image(&bytes)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
