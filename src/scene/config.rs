use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::{
    animation::variant::Variant,
    assets::color::ColorSpec,
    foundation::core::Canvas,
    foundation::error::{StippleError, StippleResult},
};

/// Scene description as stored on disk (JSON).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneConfig {
    pub canvas: Canvas,
    /// Image paths, relative to the config file's directory.
    pub images: Vec<String>,
    #[serde(default)]
    pub foreground: ColorSpec,
    /// How far the highlight color sits between the foreground (`0`) and white (`1`).
    #[serde(default = "default_highlight_mix")]
    pub highlight_mix: f64,
    #[serde(default)]
    pub seed: u64,
    pub variant: Variant,
}

fn default_highlight_mix() -> f64 {
    0.6
}

impl SceneConfig {
    pub fn from_json_str(s: &str) -> StippleResult<Self> {
        serde_json::from_str(s).map_err(|e| StippleError::serde(e.to_string()))
    }

    pub fn load(path: &Path) -> StippleResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("open scene config '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    pub fn to_json_pretty(&self) -> StippleResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| StippleError::serde(e.to_string()))
    }

    pub fn validate(&self) -> StippleResult<()> {
        self.canvas.validate()?;
        let want = self.variant.image_count();
        if self.images.len() != want {
            return Err(StippleError::validation(format!(
                "variant needs {want} image(s), config lists {}",
                self.images.len()
            )));
        }
        if !(0.0..=1.0).contains(&self.highlight_mix) {
            return Err(StippleError::validation(
                "highlight_mix must be in [0, 1]",
            ));
        }
        self.foreground.resolve()?;
        self.variant.validate()
    }

    /// Resolve image paths against `root`, refusing paths that climb out of it.
    pub fn image_paths(&self, root: &Path) -> StippleResult<Vec<PathBuf>> {
        self.images
            .iter()
            .map(|rel| {
                let rel_path = Path::new(rel);
                let escapes = rel_path.is_absolute()
                    || rel_path
                        .components()
                        .any(|c| matches!(c, std::path::Component::ParentDir));
                if rel.trim().is_empty() || escapes {
                    return Err(StippleError::validation(format!(
                        "image path '{rel}' must be relative and stay inside the scene directory"
                    )));
                }
                Ok(root.join(rel_path))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/config.rs"]
mod tests;
