use crate::board::Board;
use crate::draw::Rgba;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Largest surface side accepted, in pixels.
const MAX_SURFACE: u32 = 8192;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Board width in cells
    pub columns: u32,
    /// Board height in cells
    pub rows: u32,
    /// Side of one cell in pixels
    pub cell_size: u32,
    /// Gameplay ticks per second
    pub fps: f64,
    pub snake_color: Rgba,
    pub fruit_color: Rgba,
    pub background: Rgba,
    /// Fixed seed for start and fruit placement
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            columns: 40,
            rows: 30,
            cell_size: 16,
            fps: 2.0,
            snake_color: Rgba::GREEN,
            fruit_color: Rgba::RED,
            background: Rgba::BACKGROUND,
            seed: None,
        }
    }
}

impl Settings {
    pub fn from_json(text: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(text).context("invalid settings JSON")?;
        Ok(settings)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading settings from {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.columns == 0 || self.rows == 0 {
            bail!("board must be at least 1x1 cells, got {}x{}", self.columns, self.rows);
        }
        if self.cell_size == 0 {
            bail!("cell size must be at least one pixel");
        }
        if !self.fps.is_finite() || self.fps <= 0.0 {
            bail!("fps must be a positive number, got {}", self.fps);
        }
        let (w, h) = (self.columns as u64 * self.cell_size as u64, self.rows as u64 * self.cell_size as u64);
        if w > MAX_SURFACE as u64 || h > MAX_SURFACE as u64 {
            bail!("surface {w}x{h} exceeds {MAX_SURFACE} pixels on a side");
        }
        Ok(())
    }

    pub fn board(&self) -> Board {
        Board::new(self.columns, self.rows, self.cell_size)
    }
}
