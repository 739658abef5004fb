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

//! Software rasterizer
//!
//! Converts line segments and triangles into writes on a [`PixelBuffer`].
//!
//! # Pipeline
//!
//! ```text
//! Point(s) ─┬─> line ──────────────────────────────┬─> interpolate / blend ─> PixelBuffer
//!           └─> triangle ─> boundary (3 edges) ────┴─> texture sampler
//! ```
//!
//! - `stepper` walks a segment on a super-sampled grid (Bresenham)
//! - `line` paints coverage-weighted pixels along that walk
//! - `boundary` records the leftmost/rightmost sub-pixel per sub-row
//! - `triangle` merges three edge boundaries and fills the scanlines
//! - `texture` does bilinear sampling and texture coordinate assignment
//!
//! Nothing is retained between calls. The only state is the buffer, borrowed
//! exclusively by a [`Rasterizer`] for the duration of its draws.

mod boundary;
mod interpolate;
mod line;
mod primitives;
mod stepper;
mod texture;
mod triangle;

pub use boundary::{find_line_boundary, BoundaryEntry, EdgeAttr, EdgeMode, EdgeSample};
pub use interpolate::{blend_over_backdrop, interpolate, interpolate_tex, Lerp};
pub use primitives::{Color, DrawOptions, Point, Shading, TexCoord};
pub use stepper::Regime;
pub use texture::{assign_texture_coords, sample_bilinear};

use crate::core::buffer::PixelBuffer;

/// A drawing session over one pixel buffer
///
/// Holds the buffer's exclusive borrow, so draws from different sessions on
/// the same buffer cannot interleave.
///
/// # Examples
///
/// ```
/// use softrast::core::buffer::{FrameBuffer, PixelSource};
/// use softrast::core::raster::{Color, DrawOptions, Point, Rasterizer, Shading};
///
/// let mut fb = FrameBuffer::new(32, 32);
/// let mut raster = Rasterizer::new(&mut fb);
///
/// raster.draw_line(
///     Point::new(1, 1, Color::RED),
///     Point::new(20, 9, Color::BLUE),
///     &DrawOptions::smooth().with_aa(4),
/// );
/// raster.draw_triangle(
///     Point::new(2, 12, Color::WHITE),
///     Point::new(28, 14, Color::WHITE),
///     Point::new(10, 30, Color::WHITE),
///     Shading::Flat(Color::GREEN),
///     &DrawOptions::flat(),
/// );
///
/// assert_eq!(fb.get_pixel(12, 20), Color::GREEN);
/// ```
pub struct Rasterizer<'b, B: PixelBuffer + ?Sized> {
    buffer: &'b mut B,
}

impl<'b, B: PixelBuffer + ?Sized> Rasterizer<'b, B> {
    /// Start a drawing session on `buffer`
    pub fn new(buffer: &'b mut B) -> Self {
        Self { buffer }
    }

    /// Write a single opaque pixel with the point's color
    pub fn draw_point(&mut self, point: Point) {
        self.buffer.set_pixel(point.x, point.y, point.color);
    }
}
