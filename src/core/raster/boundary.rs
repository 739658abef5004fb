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

//! Per-row edge boundaries
//!
//! Replays the line walk of an edge without painting, and records for every
//! super-sampled row the leftmost and rightmost sub-pixel the walk touched.
//! The triangle rasterizer fills between these boundaries instead of testing
//! pixels against edge equations.

use super::interpolate::interpolate_at;
use super::primitives::{Color, Point, TexCoord};
use super::stepper::{Axis, LineWalk};

/// The attribute carried by a boundary sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EdgeAttr {
    Color(Color),
    Tex(TexCoord),
}

impl EdgeAttr {
    /// Color of the sample, black for texture samples
    pub fn color(&self) -> Color {
        match *self {
            EdgeAttr::Color(color) => color,
            EdgeAttr::Tex(_) => Color::BLACK,
        }
    }

    /// Texture coordinate of the sample, the origin for color samples
    pub fn tex(&self) -> TexCoord {
        match *self {
            EdgeAttr::Color(_) => TexCoord::default(),
            EdgeAttr::Tex(tex) => tex,
        }
    }
}

/// One recorded sub-pixel of an edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeSample {
    /// Sub-pixel x
    pub x: i32,
    /// Sub-pixel y
    pub y: i32,
    pub attr: EdgeAttr,
}

impl EdgeSample {
    /// Loses every "is further left" comparison
    pub const LEFT: EdgeSample = EdgeSample {
        x: i32::MAX,
        y: 0,
        attr: EdgeAttr::Color(Color::BLACK),
    };

    /// Loses every "is further right" comparison
    pub const RIGHT: EdgeSample = EdgeSample {
        x: i32::MIN,
        y: 0,
        attr: EdgeAttr::Color(Color::BLACK),
    };
}

/// Leftmost and rightmost sample of one super-sampled row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryEntry {
    pub left: EdgeSample,
    pub right: EdgeSample,
}

impl BoundaryEntry {
    /// A row no sample has reached yet
    pub const EMPTY: BoundaryEntry = BoundaryEntry {
        left: EdgeSample::LEFT,
        right: EdgeSample::RIGHT,
    };

    /// Whether no sample was recorded for this row
    pub fn is_empty(&self) -> bool {
        self.left.x > self.right.x
    }

    fn record(&mut self, sample: EdgeSample) {
        if sample.x < self.left.x {
            self.left = sample;
        }
        if sample.x > self.right.x {
            self.right = sample;
        }
    }
}

/// What a boundary sample carries
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EdgeMode {
    /// The same color everywhere
    Flat(Color),
    /// Endpoint colors interpolated along the edge
    Smooth,
    /// Endpoint texture coordinates interpolated along the edge
    Textured,
}

/// Record the left/right extent of each super-sampled row along `p1 -> p2`
///
/// # Arguments
///
/// * `p1`, `p2` - Edge endpoints, in either order
/// * `mode` - Which attribute the samples carry
/// * `supersample` - Sub-pixels per pixel, see [`DrawOptions::supersample`]
///
/// # Returns
///
/// `(|p2.y - p1.y| + 1) * supersample` entries. Entry `i` describes sub-pixel
/// row `min(p1.y, p2.y) * supersample + i`. Sample coordinates are in
/// sub-pixels; attributes are interpolated at the coarse coordinate along the
/// walk's major axis, exactly as the line rasterizer would color that pixel.
///
/// Textured mode reads `tex` from both endpoints; a missing coordinate reads
/// as the texture origin.
///
/// [`DrawOptions::supersample`]: super::DrawOptions::supersample
pub fn find_line_boundary(
    p1: &Point,
    p2: &Point,
    mode: EdgeMode,
    supersample: i32,
) -> Vec<BoundaryEntry> {
    let level = supersample.max(1);
    let (p1, p2) = if p1.x > p2.x { (p2, p1) } else { (p1, p2) };

    let rows = ((p2.y - p1.y).unsigned_abs() as usize + 1) * level as usize;
    let base = p1.y.min(p2.y) * level;
    let mut edge = vec![BoundaryEntry::EMPTY; rows];

    let walk = LineWalk::new(p1, p2, level);
    let axis = walk.major_axis();
    let (lo, hi) = (axis.of(&walk.lo), axis.of(&walk.hi));

    for step in walk.steps() {
        let major = if axis == Axis::X {
            step.x
        } else {
            step.y
        }
        .div_euclid(level);

        let attr = match mode {
            EdgeMode::Flat(color) => EdgeAttr::Color(color),
            EdgeMode::Smooth => EdgeAttr::Color(interpolate_at(
                walk.lo.color,
                walk.hi.color,
                lo,
                major,
                hi,
            )),
            EdgeMode::Textured => EdgeAttr::Tex(interpolate_at(
                walk.lo.tex_or_origin(),
                walk.hi.tex_or_origin(),
                lo,
                major,
                hi,
            )),
        };

        let row = (step.y - base) as usize;
        edge[row].record(EdgeSample {
            x: step.x,
            y: step.y,
            attr,
        });
    }

    edge
}
