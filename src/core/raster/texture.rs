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

//! Texture sampling
//!
//! Texture coordinates are continuous and expressed in texel units, not
//! normalized: `(0, 0)` is the first texel and `(w - 1, h - 1)` the last.

use super::interpolate::interpolate;
use super::primitives::{Color, Point, TexCoord};
use crate::core::buffer::PixelSource;

/// Bilinear sample of `texture` at `coord`
///
/// Reads the four texels at the floor/ceil of each axis and blends them,
/// first along v, then along u. A coordinate on a texel row or column
/// collapses that axis to the exact texel.
///
/// Coordinates are clamped into `[0, w - 1] x [0, h - 1]`; non-finite
/// components read as 0. An empty texture samples as black.
///
/// # Examples
///
/// ```
/// use softrast::core::buffer::{FrameBuffer, PixelBuffer};
/// use softrast::core::raster::{sample_bilinear, Color, TexCoord};
///
/// let mut tex = FrameBuffer::new(2, 1);
/// tex.set_pixel(1, 0, Color::WHITE);
///
/// let c = sample_bilinear(&tex, TexCoord::new(0.5, 0.0));
/// assert_eq!(c.to_rgb8(), [128, 128, 128]);
/// ```
pub fn sample_bilinear<T: PixelSource + ?Sized>(texture: &T, coord: TexCoord) -> Color {
    let (width, height) = (texture.width(), texture.height());
    if width == 0 || height == 0 {
        return Color::BLACK;
    }

    let u = clamp_axis(coord.u, width);
    let v = clamp_axis(coord.v, height);

    let (left, right) = (u.floor() as i32, u.ceil() as i32);
    let (down, up) = (v.floor() as i32, v.ceil() as i32);

    let col = |x: i32| {
        interpolate(
            texture.get_pixel(x, down),
            texture.get_pixel(x, up),
            down as f32,
            v,
            up as f32,
        )
    };

    interpolate(col(left), col(right), left as f32, u, right as f32)
}

#[inline]
fn clamp_axis(value: f32, extent: usize) -> f32 {
    if value.is_finite() {
        value.clamp(0.0, (extent - 1) as f32)
    } else {
        0.0
    }
}

/// Map triangle vertices onto texture coordinates
///
/// The triangle's bounding box is scaled uniformly so it fits the texture,
/// then centered on it. Each vertex gets
/// `center + (vertex - box_center) * scale`, so the result depends only on
/// vertex positions, never on vertex order or color.
///
/// The scale is the smaller of `(w - 1) / box_width` and
/// `(h - 1) / box_height`. An axis with zero extent does not constrain the
/// scale; when both are zero every vertex maps to the texture center.
pub fn assign_texture_coords<T: PixelSource + ?Sized>(
    vertices: &[Point; 3],
    texture: &T,
) -> [Point; 3] {
    let min_x = vertices.iter().map(|p| p.x).min().unwrap_or(0);
    let max_x = vertices.iter().map(|p| p.x).max().unwrap_or(0);
    let min_y = vertices.iter().map(|p| p.y).min().unwrap_or(0);
    let max_y = vertices.iter().map(|p| p.y).max().unwrap_or(0);

    let box_width = (max_x - min_x) as f32;
    let box_height = (max_y - min_y) as f32;
    let tex_width = texture.width().saturating_sub(1) as f32;
    let tex_height = texture.height().saturating_sub(1) as f32;

    let scale = match (box_width > 0.0, box_height > 0.0) {
        (true, true) => (tex_width / box_width).min(tex_height / box_height),
        (true, false) => tex_width / box_width,
        (false, true) => tex_height / box_height,
        (false, false) => {
            log::debug!("Texture mapping a point-sized triangle at ({}, {})", min_x, min_y);
            0.0
        }
    };

    vertices.map(|p| {
        p.with_tex(TexCoord::new(
            tex_width / 2.0 + ((p.x - min_x) as f32 - box_width / 2.0) * scale,
            tex_height / 2.0 + ((p.y - min_y) as f32 - box_height / 2.0) * scale,
        ))
    })
}
