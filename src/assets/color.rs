use crate::{
    foundation::core::Rgb8,
    foundation::error::{StippleError, StippleResult},
};

/// Parse a computed-style color such as `rgb(20, 24, 32)` or `rgba(20, 24, 32, 0.5)`.
///
/// All decimal digit runs are collected in order; the first three are `r, g, b`. Anything after
/// the third run (an alpha component, fractional digits) is ignored.
pub fn parse_css_color(s: &str) -> StippleResult<Rgb8> {
    let mut channels = [0u8; 3];
    let mut found = 0usize;
    for run in s
        .split(|c: char| !c.is_ascii_digit())
        .filter(|run| !run.is_empty())
        .take(3)
    {
        channels[found] = run.parse::<u8>().map_err(|_| {
            StippleError::color(format!("channel '{run}' in '{s}' is out of range 0..=255"))
        })?;
        found += 1;
    }
    if found < 3 {
        return Err(StippleError::color(format!(
            "expected at least three numbers in '{s}', found {found}"
        )));
    }
    Ok(Rgb8::new(channels[0], channels[1], channels[2]))
}

fn parse_hex(s: &str) -> StippleResult<Rgb8> {
    let hex = s.trim().strip_prefix('#').unwrap_or(s.trim());
    if hex.len() != 6 {
        return Err(StippleError::color(format!(
            "hex color must be #RRGGBB, got '{s}'"
        )));
    }
    let byte = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
            .ok_or_else(|| StippleError::color(format!("invalid hex color '{s}'")))
    };
    Ok(Rgb8::new(byte(0..2)?, byte(2..4)?, byte(4..6)?))
}

/// Color as written in scene configuration: `"rgb(r, g, b)"`, `"#rrggbb"`, or `[r, g, b]`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    Text(String),
    Channels([u8; 3]),
}

impl ColorSpec {
    pub fn resolve(&self) -> StippleResult<Rgb8> {
        match self {
            Self::Text(s) if s.trim_start().starts_with('#') => parse_hex(s),
            Self::Text(s) => parse_css_color(s),
            Self::Channels([r, g, b]) => Ok(Rgb8::new(*r, *g, *b)),
        }
    }
}

impl Default for ColorSpec {
    fn default() -> Self {
        Self::Channels([0, 0, 0])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/color.rs"]
mod tests;
