use std::path::PathBuf;

use anyhow::Context as _;

use crate::foundation::{core::Canvas, error::StippleResult};

/// One rendered backbuffer: straight-alpha RGBA8, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl FrameRGBA {
    /// Fully transparent frame.
    pub fn transparent(canvas: Canvas) -> Self {
        Self {
            width: canvas.width,
            height: canvas.height,
            data: vec![0; canvas.byte_len()],
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let o = 4 * (x as usize + y as usize * self.width as usize);
        Some([
            self.data[o],
            self.data[o + 1],
            self.data[o + 2],
            self.data[o + 3],
        ])
    }

    /// Number of pixels with non-zero alpha.
    pub fn covered_pixels(&self) -> usize {
        self.data.chunks_exact(4).filter(|px| px[3] > 0).count()
    }
}

/// Per-frame write counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Particle writes that landed inside the buffer.
    pub drawn: u64,
    /// Particle writes dropped because their pixel fell outside the buffer.
    pub skipped: u64,
}

/// Display seam: accepts one full backbuffer per frame.
pub trait RenderSurface {
    fn put_frame(&mut self, frame: &FrameRGBA) -> StippleResult<()>;
}

/// Surface that keeps every presented frame, for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySurface {
    frames: Vec<FrameRGBA>,
}

impl InMemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[FrameRGBA] {
        &self.frames
    }

    pub fn last(&self) -> Option<&FrameRGBA> {
        self.frames.last()
    }
}

impl RenderSurface for InMemorySurface {
    fn put_frame(&mut self, frame: &FrameRGBA) -> StippleResult<()> {
        self.frames.push(frame.clone());
        Ok(())
    }
}

/// Writes each presented frame to `<dir>/frame_NNNNN.png`.
#[derive(Debug)]
pub struct PngSequenceSurface {
    dir: PathBuf,
    next_index: u64,
}

impl PngSequenceSurface {
    pub fn create(dir: impl Into<PathBuf>) -> StippleResult<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("create output dir '{}'", dir.display()))?;
        Ok(Self { dir, next_index: 0 })
    }

    pub fn written(&self) -> u64 {
        self.next_index
    }

    pub fn path_for(&self, index: u64) -> PathBuf {
        self.dir.join(format!("frame_{index:05}.png"))
    }
}

impl RenderSurface for PngSequenceSurface {
    fn put_frame(&mut self, frame: &FrameRGBA) -> StippleResult<()> {
        let path = self.path_for(self.next_index);
        write_png(&path, frame)?;
        self.next_index += 1;
        Ok(())
    }
}

pub fn write_png(path: &std::path::Path, frame: &FrameRGBA) -> StippleResult<()> {
    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
