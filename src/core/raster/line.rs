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

//! Line rendering implementation
//!
//! Implements anti-aliased, color-interpolated line and polyline
//! rasterization on top of the super-sampled Bresenham walk.
//!
//! # Coverage
//!
//! Every sub-pixel step increments a coverage counter. A coarse pixel is
//! painted, with alpha `coverage / level`, when the walk is about to leave
//! it: either the minor axis moves into the next pixel or the major axis
//! reaches the pixel's last sub-cell. If both happen on the same step the
//! pixel is painted once. Each sub-pixel therefore contributes to exactly
//! one paint.

use super::interpolate::{blend_over_backdrop, interpolate_at};
use super::primitives::{DrawOptions, Point};
use super::stepper::{Axis, LineWalk};
use super::Rasterizer;
use crate::core::buffer::PixelBuffer;

impl<B: PixelBuffer + ?Sized> Rasterizer<'_, B> {
    /// Draw a line segment from `p1` to `p2`
    ///
    /// # Arguments
    ///
    /// * `p1` - Start point
    /// * `p2` - End point
    /// * `opts` - Smoothing and anti-aliasing flags
    ///
    /// # Shading
    ///
    /// Flat lines use `p2`'s color as passed in. Smooth lines interpolate
    /// between the endpoint colors along the major axis, at the coarse pixel
    /// coordinate. The segment is normalized so it runs left to right, which
    /// fixes the interpolation anchor; drawing `p2 -> p1` covers the same
    /// pixels.
    ///
    /// # Notes
    ///
    /// A zero-length segment draws one pixel. Pixels are composited over the
    /// existing buffer contents, so drawing the same anti-aliased line twice
    /// darkens/brightens its partially covered pixels further.
    pub fn draw_line(&mut self, p1: Point, p2: Point, opts: &DrawOptions) {
        let flat = p2.color;
        let level = opts.supersample();

        // Normalize so p1.x <= p2.x
        let (p1, p2) = if p1.x > p2.x { (p2, p1) } else { (p1, p2) };

        let walk = LineWalk::new(&p1, &p2, level);
        let axis = walk.major_axis();

        log::trace!(
            "Rendering {}line: ({}, {}) -> ({}, {}) regime={:?} level={}",
            if opts.smooth { "smooth " } else { "" },
            p1.x,
            p1.y,
            p2.x,
            p2.y,
            walk.regime,
            level
        );

        let mut coverage = 0;
        for step in walk.steps() {
            coverage += 1;
            if !(step.minor_crossed || step.major_boundary) {
                continue;
            }

            let x = step.x.div_euclid(level);
            let y = step.y.div_euclid(level);
            let color = if opts.smooth {
                let at = if axis == Axis::X { x } else { y };
                interpolate_at(
                    walk.lo.color,
                    walk.hi.color,
                    axis.of(&walk.lo),
                    at,
                    axis.of(&walk.hi),
                )
            } else {
                flat
            };

            blend_over_backdrop(self.buffer, x, y, color, coverage as f32 / level as f32);
            coverage = 0;
        }
    }

    /// Draw connected line segments
    ///
    /// Requires at least 2 points. If fewer are provided, no drawing occurs.
    pub fn draw_polyline(&mut self, points: &[Point], opts: &DrawOptions) {
        if points.len() < 2 {
            return;
        }

        log::trace!("Rendering polyline with {} vertices", points.len());

        for pair in points.windows(2) {
            self.draw_line(pair[0], pair[1], opts);
        }
    }
}
