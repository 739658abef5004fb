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

//! Triangle rendering implementation
//!
//! Implements flat, smooth and textured triangle fill from edge boundaries.
//!
//! # Algorithm
//!
//! 1. Sort vertices by Y coordinate (v0.y <= v1.y <= v2.y)
//! 2. Trace the three edges with [`find_line_boundary`]: the two short edges
//!    `v0 -> v1` and `v1 -> v2`, and the long edge `v0 -> v2`
//! 3. Chain the short edges into one side. Both short edges contain the
//!    super-sampled rows of `v1`, so the first edge's last pixel row is dropped.
//! 4. For each sub-row, the span runs from the smaller left to the larger
//!    right of the two sides. Neither side is assumed to be the left one.
//! 5. Fill each pixel row between the outermost span ends
//!
//! # Coverage
//!
//! With anti-aliasing, a pixel's alpha is `coverage / level`, where coverage
//! is the larger of
//!
//! - the widest overlap of any sub-row span with the pixel's sub-columns
//! - the number of sub-rows whose span overlaps the pixel at all
//!
//! This is a cheap estimate, not the exact covered area. Textured fill is
//! always opaque.

use super::boundary::{find_line_boundary, BoundaryEntry, EdgeMode, EdgeSample};
use super::interpolate::{blend_over_backdrop, interpolate_at};
use super::primitives::{DrawOptions, Point, Shading};
use super::texture::{assign_texture_coords, sample_bilinear};
use super::Rasterizer;
use crate::core::buffer::{PixelBuffer, PixelSource};

impl<B: PixelBuffer + ?Sized> Rasterizer<'_, B> {
    /// Draw a filled triangle
    ///
    /// # Arguments
    ///
    /// * `v0`, `v1`, `v2` - Vertices in any order
    /// * `shading` - Fill mode. Vertex colors are only read for
    ///   [`Shading::Smooth`].
    /// * `opts` - Anti-aliasing flags. `opts.smooth` is ignored in favor of
    ///   `shading`.
    ///
    /// # Notes
    ///
    /// Collinear vertices are valid input and paint at most the pixels of the
    /// segment between the outermost two.
    pub fn draw_triangle(
        &mut self,
        v0: Point,
        v1: Point,
        v2: Point,
        shading: Shading<'_>,
        opts: &DrawOptions,
    ) {
        let level = opts.supersample();

        let area2 = (v1.x - v0.x) as i64 * (v2.y - v0.y) as i64
            - (v2.x - v0.x) as i64 * (v1.y - v0.y) as i64;
        if area2 == 0 {
            log::debug!(
                "Degenerate triangle ({}, {}) ({}, {}) ({}, {})",
                v0.x,
                v0.y,
                v1.x,
                v1.y,
                v2.x,
                v2.y
            );
        }

        let (vertices, mode) = match shading {
            Shading::Flat(color) => ([v0, v1, v2], EdgeMode::Flat(color)),
            Shading::Smooth => ([v0, v1, v2], EdgeMode::Smooth),
            Shading::Textured(texture) => (
                assign_texture_coords(&[v0, v1, v2], texture),
                EdgeMode::Textured,
            ),
        };

        let [v0, v1, v2] = sort_vertices_by_y(vertices);

        log::trace!(
            "Rendering {} triangle: ({}, {}) ({}, {}) ({}, {}) level={}",
            shading.name(),
            v0.x,
            v0.y,
            v1.x,
            v1.y,
            v2.x,
            v2.y,
            level
        );

        let mut side_a = find_line_boundary(&v0, &v1, mode, level);
        side_a.truncate(side_a.len().saturating_sub(level as usize));
        side_a.extend(find_line_boundary(&v1, &v2, mode, level));
        let side_b = find_line_boundary(&v0, &v2, mode, level);
        debug_assert_eq!(side_a.len(), side_b.len());

        let mut spans = Vec::with_capacity(level as usize);
        for (row, (chunk_a, chunk_b)) in side_a
            .chunks(level as usize)
            .zip(side_b.chunks(level as usize))
            .enumerate()
        {
            let y = v0.y + row as i32;
            spans.clear();

            let mut left = EdgeSample::LEFT;
            let mut right = EdgeSample::RIGHT;
            for (a, b) in chunk_a.iter().zip(chunk_b) {
                let span = merge(a, b);
                if span.left.x < left.x {
                    left = span.left;
                }
                if span.right.x > right.x {
                    right = span.right;
                }
                spans.push((span.left.x, span.right.x));
            }

            if left.x > right.x {
                continue;
            }

            let lx = left.x.div_euclid(level);
            let rx = right.x.div_euclid(level);

            for x in lx..=rx {
                match shading {
                    Shading::Textured(texture) => {
                        let tex = interpolate_at(left.attr.tex(), right.attr.tex(), lx, x, rx);
                        self.buffer.set_pixel(x, y, sample_bilinear(texture, tex));
                    }
                    Shading::Smooth | Shading::Flat(_) => {
                        let cover = coverage(&spans, x, level);
                        if cover == 0 {
                            continue;
                        }
                        let color = match shading {
                            Shading::Flat(color) => color,
                            _ => interpolate_at(left.attr.color(), right.attr.color(), lx, x, rx),
                        };
                        blend_over_backdrop(
                            self.buffer,
                            x,
                            y,
                            color,
                            cover as f32 / level as f32,
                        );
                    }
                }
            }
        }
    }

    /// Draw a filled triangle selecting the fill mode from flags
    ///
    /// A texture selects textured fill, otherwise `opts.smooth` chooses
    /// between smooth shading and flat shading with `v0`'s color.
    pub fn draw_triangle_with_flags(
        &mut self,
        v0: Point,
        v1: Point,
        v2: Point,
        texture: Option<&dyn PixelSource>,
        opts: &DrawOptions,
    ) {
        let shading = Shading::from_flags(opts.smooth, texture, &v0);
        self.draw_triangle(v0, v1, v2, shading, opts);
    }
}

/// Sort vertices by Y coordinate (top to bottom), stable under ties
fn sort_vertices_by_y(mut v: [Point; 3]) -> [Point; 3] {
    if v[0].y > v[1].y {
        v.swap(0, 1);
    }
    if v[1].y > v[2].y {
        v.swap(1, 2);
    }
    if v[0].y > v[1].y {
        v.swap(0, 1);
    }
    v
}

/// Outer span of one sub-row covered by two sides
///
/// Ties go to `b`.
fn merge(a: &BoundaryEntry, b: &BoundaryEntry) -> BoundaryEntry {
    BoundaryEntry {
        left: if a.left.x < b.left.x { a.left } else { b.left },
        right: if a.right.x > b.right.x { a.right } else { b.right },
    }
}

/// Coverage of pixel column `x` by the sub-row spans of one row, in `0..=level`
fn coverage(spans: &[(i32, i32)], x: i32, level: i32) -> i32 {
    let (first, last) = (x * level, (x + 1) * level - 1);
    let mut widest = 0;
    let mut rows = 0;
    for &(left, right) in spans {
        if left > right {
            continue;
        }
        let overlap = right.min(last) - left.max(first) + 1;
        if overlap > 0 {
            widest = widest.max(overlap);
            rows += 1;
        }
    }
    widest.max(rows)
}
