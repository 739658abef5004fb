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

//! Rasterizer primitive type definitions
//!
//! This module contains the value types passed into the rasterizer: colors,
//! texture coordinates, points, per-call draw options and the triangle
//! shading tag.

use serde::{Deserialize, Serialize};

use crate::core::buffer::PixelSource;

/// An RGB color with floating point channels
///
/// Channels are nominally in `[0, 1]`. Pixel buffers quantize them to 8 bits
/// per channel at rest.
///
/// # Examples
///
/// ```
/// use softrast::core::raster::Color;
///
/// let color = Color::new(1.0, 0.5, 0.0);
/// assert_eq!(color.to_rgb8(), [255, 128, 0]);
/// assert_eq!(Color::from_rgb8([255, 0, 0]), Color::RED);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Color {
    /// Red channel (0.0-1.0)
    pub r: f32,
    /// Green channel (0.0-1.0)
    pub g: f32,
    /// Blue channel (0.0-1.0)
    pub b: f32,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
    pub const RED: Color = Color::new(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::new(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::new(0.0, 0.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Convert to 8-bit channels
    ///
    /// Each channel is clamped to `[0, 1]` and mapped with `round(v * 255)`.
    pub fn to_rgb8(self) -> [u8; 3] {
        #[inline(always)]
        fn quantize(v: f32) -> u8 {
            (v.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        [quantize(self.r), quantize(self.g), quantize(self.b)]
    }

    /// Convert from 8-bit channels (`v / 255`)
    pub fn from_rgb8(rgb: [u8; 3]) -> Self {
        Self {
            r: rgb[0] as f32 / 255.0,
            g: rgb[1] as f32 / 255.0,
            b: rgb[2] as f32 / 255.0,
        }
    }
}

/// A continuous texture coordinate
///
/// Coordinates are in texture-buffer pixel units, not normalized: `(0, 0)` is
/// the first texel and `(width - 1, height - 1)` the last.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TexCoord {
    /// Horizontal texel coordinate
    pub u: f32,
    /// Vertical texel coordinate
    pub v: f32,
}

impl TexCoord {
    pub const fn new(u: f32, v: f32) -> Self {
        Self { u, v }
    }
}

/// A primitive vertex
///
/// Integer pixel position, an RGB color and an optional texture coordinate.
/// Points are plain values; the rasterizer copies them as needed and never
/// writes back into caller-owned points.
///
/// # Examples
///
/// ```
/// use softrast::core::raster::{Color, Point};
///
/// let p = Point::new(10, 20, Color::GREEN);
/// assert_eq!((p.x, p.y), (10, 20));
/// assert!(p.tex.is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// X coordinate in output pixels
    pub x: i32,
    /// Y coordinate in output pixels
    pub y: i32,
    /// Vertex color
    pub color: Color,
    /// Texture coordinate, assigned by the triangle rasterizer in texture mode
    pub tex: Option<TexCoord>,
}

impl Point {
    pub const fn new(x: i32, y: i32, color: Color) -> Self {
        Self {
            x,
            y,
            color,
            tex: None,
        }
    }

    /// Copy of this point carrying a texture coordinate
    pub fn with_tex(self, tex: TexCoord) -> Self {
        Self {
            tex: Some(tex),
            ..self
        }
    }

    /// Texture coordinate, or the origin if none was assigned
    pub(crate) fn tex_or_origin(&self) -> TexCoord {
        self.tex.unwrap_or_default()
    }
}

/// Per-call rasterization flags
///
/// There is no ambient rendering state: every draw call receives its
/// options explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawOptions {
    /// Interpolate vertex colors along the primitive
    pub smooth: bool,
    /// Enable super-sampled anti-aliasing
    pub anti_alias: bool,
    /// Super-sampling factor, meaningful only when `anti_alias` is set
    pub aa_level: u32,
}

impl DrawOptions {
    /// Flat shading, no anti-aliasing
    pub const fn flat() -> Self {
        Self {
            smooth: false,
            anti_alias: false,
            aa_level: 1,
        }
    }

    /// Smooth shading, no anti-aliasing
    pub const fn smooth() -> Self {
        Self {
            smooth: true,
            anti_alias: false,
            aa_level: 1,
        }
    }

    /// Copy with anti-aliasing enabled at the given level
    pub const fn with_aa(self, aa_level: u32) -> Self {
        Self {
            anti_alias: true,
            aa_level,
            ..self
        }
    }

    /// Effective super-sampling factor
    ///
    /// 1 when anti-aliasing is disabled. A level of 0 is treated as 1.
    pub fn supersample(&self) -> i32 {
        if self.anti_alias {
            self.aa_level.clamp(1, i32::MAX as u32) as i32
        } else {
            1
        }
    }
}

impl Default for DrawOptions {
    fn default() -> Self {
        Self {
            smooth: false,
            anti_alias: false,
            aa_level: 4,
        }
    }
}

/// Triangle fill mode
///
/// `Flat` paints one constant color, `Smooth` interpolates the three vertex
/// colors and `Textured` samples the given texture buffer, ignoring vertex
/// colors.
#[derive(Clone, Copy)]
pub enum Shading<'t> {
    Flat(Color),
    Smooth,
    Textured(&'t dyn PixelSource),
}

impl<'t> Shading<'t> {
    /// Map the boolean shading flags onto a fill mode
    ///
    /// Texturing wins over smoothing; flat shading uses `anchor`'s color.
    pub fn from_flags(
        do_smooth: bool,
        texture: Option<&'t dyn PixelSource>,
        anchor: &Point,
    ) -> Self {
        match texture {
            Some(texture) => Shading::Textured(texture),
            None if do_smooth => Shading::Smooth,
            None => Shading::Flat(anchor.color),
        }
    }

    pub(crate) fn name(&self) -> &'static str {
        match self {
            Shading::Flat(_) => "flat",
            Shading::Smooth => "smooth",
            Shading::Textured(_) => "textured",
        }
    }
}

impl std::fmt::Debug for Shading<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Shading::Flat(color) => f.debug_tuple("Flat").field(color).finish(),
            Shading::Smooth => f.write_str("Smooth"),
            Shading::Textured(texture) => write!(
                f,
                "Textured({}x{})",
                texture.width(),
                texture.height()
            ),
        }
    }
}
