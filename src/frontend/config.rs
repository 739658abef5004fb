// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Render configuration
//!
//! A TOML file describing the output image and the rasterization flags.
//! Every key is optional:
//!
//! ```toml
//! width = 500
//! height = 500
//! smooth = true
//! anti_alias = true
//! aa_level = 4
//! steps = 24
//! texture = "pattern.jpg"
//! background = { r = 0.0, g = 0.0, b = 0.0 }
//!
//! [[shape]]
//! kind = "triangle"
//! vertices = [{ x = 10, y = 10 }, { x = 90, y = 20 }, { x = 40, y = 80 }]
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::error::{RasterError, Result};
use crate::core::raster::{Color, DrawOptions};
use crate::core::scene::{Scene, Shape};

/// Output and rasterization settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Output width in pixels
    pub width: usize,
    /// Output height in pixels
    pub height: usize,
    /// Interpolate vertex colors
    pub smooth: bool,
    /// Super-sampled anti-aliasing
    pub anti_alias: bool,
    /// Super-sampling factor
    pub aa_level: u32,
    /// Scene subdivision
    pub steps: u32,
    /// Image file used by textured scenes and shapes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub texture: Option<PathBuf>,
    /// Color the frame is cleared to
    pub background: Color,
    /// Extra primitives drawn after the scene
    #[serde(rename = "shape", skip_serializing_if = "Vec::is_empty")]
    pub shapes: Vec<Shape>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 500,
            height: 500,
            smooth: false,
            anti_alias: false,
            aa_level: 4,
            steps: Scene::DEFAULT_STEPS,
            texture: None,
            background: Color::BLACK,
            shapes: Vec::new(),
        }
    }
}

impl RenderConfig {
    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&contents)?;
        log::debug!("Loaded render config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), contents)?;
        Ok(())
    }

    /// Reject settings the renderer cannot honor
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(RasterError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.aa_level == 0 {
            return Err(RasterError::InvalidAaLevel(self.aa_level));
        }
        Ok(())
    }

    /// Per-call flags for the rasterizer
    pub fn draw_options(&self) -> DrawOptions {
        DrawOptions {
            smooth: self.smooth,
            anti_alias: self.anti_alias,
            aa_level: self.aa_level,
        }
    }
}
