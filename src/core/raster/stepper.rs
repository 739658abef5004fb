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

//! Super-sampled Bresenham stepping
//!
//! Both the line rasterizer and the boundary tracker walk a segment on a grid
//! subdivided `level` times per pixel. This module owns that walk so the two
//! consumers see exactly the same sub-pixel sequence.
//!
//! # Algorithm
//!
//! 1. The segment is normalized so `p1.x <= p2.x`.
//! 2. Deltas are scaled by `level` and pushed outward by `level - 1` in the
//!    direction of their sign, so the walk runs from the first sub-cell of the
//!    start pixel to the last sub-cell of the end pixel.
//! 3. One of four regimes is chosen from the sign and steepness of the
//!    scaled deltas. Each regime names a major axis, a start sub-cell and a
//!    minor direction; the major axis always advances by +1.
//! 4. The classic integer error term `d = 2 * minor - major` decides when the
//!    minor axis moves.
//!
//! # References
//!
//! - [Bresenham's Line Algorithm](https://en.wikipedia.org/wiki/Bresenham%27s_line_algorithm)

use super::primitives::Point;

/// The four octant-reduced slope regimes
///
/// "Rising" means y grows as x grows. "Shallow" walks along x, "steep"
/// along y.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    /// `0 <= dy <= dx`
    ShallowRising,
    /// `dy > dx >= 0`
    SteepRising,
    /// `-dx <= dy < 0`
    ShallowFalling,
    /// `dy < -dx`
    SteepFalling,
}

impl Regime {
    fn major_axis(self) -> Axis {
        match self {
            Regime::ShallowRising | Regime::ShallowFalling => Axis::X,
            Regime::SteepRising | Regime::SteepFalling => Axis::Y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Axis {
    X,
    Y,
}

impl Axis {
    #[inline(always)]
    pub(crate) fn of(self, p: &Point) -> i32 {
        match self {
            Axis::X => p.x,
            Axis::Y => p.y,
        }
    }

    /// Build `(x, y)` from major/minor coordinates with `self` as major axis
    #[inline(always)]
    fn compose(self, major: i32, minor: i32) -> (i32, i32) {
        match self {
            Axis::X => (major, minor),
            Axis::Y => (minor, major),
        }
    }
}

/// Push a scaled delta outward by `level - 1` in the direction of its sign
///
/// Zero counts as positive.
#[inline]
fn widen(delta: i32, level: i32) -> i32 {
    let sign = if delta >= 0 { 1 } else { -1 };
    delta * level + (level - 1) * sign
}

/// A prepared super-sampled walk over one segment
#[derive(Debug, Clone, Copy)]
pub(crate) struct LineWalk {
    pub(crate) regime: Regime,
    pub(crate) level: i32,
    /// Endpoint with the smaller major-axis coordinate
    pub(crate) lo: Point,
    /// Endpoint with the larger major-axis coordinate
    pub(crate) hi: Point,
    major_start: i32,
    minor_start: i32,
    minor_dir: i32,
    d_major: i32,
    d_minor: i32,
}

impl LineWalk {
    /// Prepare the walk from `p1` to `p2`
    ///
    /// `p1.x <= p2.x` is required; callers normalize first.
    pub(crate) fn new(p1: &Point, p2: &Point, level: i32) -> Self {
        debug_assert!(p1.x <= p2.x, "segment not normalized");
        let level = level.max(1);

        let delta_x = widen(p2.x - p1.x, level);
        let delta_y = widen(p2.y - p1.y, level);

        let (regime, lo, hi, major_start, minor_start, minor_dir, d_major, d_minor) =
            if delta_y >= 0 && delta_y <= delta_x {
                (
                    Regime::ShallowRising,
                    *p1,
                    *p2,
                    p1.x * level,
                    p1.y * level,
                    1,
                    delta_x,
                    delta_y,
                )
            } else if delta_y >= 0 {
                (
                    Regime::SteepRising,
                    *p1,
                    *p2,
                    p1.y * level,
                    p1.x * level,
                    1,
                    delta_y,
                    delta_x,
                )
            } else if delta_y >= -delta_x {
                (
                    Regime::ShallowFalling,
                    *p1,
                    *p2,
                    p1.x * level,
                    (p1.y + 1) * level - 1,
                    -1,
                    delta_x,
                    -delta_y,
                )
            } else {
                // Walks upward from p2, stepping left towards p1
                (
                    Regime::SteepFalling,
                    *p2,
                    *p1,
                    p2.y * level,
                    (p2.x + 1) * level - 1,
                    -1,
                    -delta_y,
                    delta_x,
                )
            };

        Self {
            regime,
            level,
            lo,
            hi,
            major_start,
            minor_start,
            minor_dir,
            d_major,
            d_minor,
        }
    }

    /// Major axis of the walk
    pub(crate) fn major_axis(&self) -> Axis {
        self.regime.major_axis()
    }

    /// Number of sub-pixel steps
    pub(crate) fn len(&self) -> usize {
        (self.d_major + 1) as usize
    }

    /// Iterate the sub-pixel steps in walk order
    pub(crate) fn steps(&self) -> SubSteps {
        SubSteps {
            axis: self.major_axis(),
            level: self.level,
            remaining: self.len(),
            major: self.major_start,
            minor: self.minor_start,
            minor_dir: self.minor_dir,
            error: 2 * self.d_minor - self.d_major,
            error_step: 2 * self.d_minor,
            error_step_minor: 2 * self.d_minor - 2 * self.d_major,
        }
    }
}

/// One visited sub-pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SubStep {
    /// Sub-pixel x
    pub(crate) x: i32,
    /// Sub-pixel y
    pub(crate) y: i32,
    /// The next sub-pixel lies in a different coarse pixel along the minor axis
    pub(crate) minor_crossed: bool,
    /// This sub-pixel is the last one of its coarse pixel along the major axis
    pub(crate) major_boundary: bool,
}

/// Iterator over the sub-pixels of a [`LineWalk`]
pub(crate) struct SubSteps {
    axis: Axis,
    level: i32,
    remaining: usize,
    major: i32,
    minor: i32,
    minor_dir: i32,
    error: i32,
    error_step: i32,
    error_step_minor: i32,
}

impl Iterator for SubSteps {
    type Item = SubStep;

    fn next(&mut self) -> Option<SubStep> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let (major, minor) = (self.major, self.minor);

        let next_minor = if self.error > 0 {
            self.error += self.error_step_minor;
            minor + self.minor_dir
        } else {
            self.error += self.error_step;
            minor
        };

        let minor_crossed = next_minor.div_euclid(self.level) != minor.div_euclid(self.level);
        let major_boundary = (major + 1).rem_euclid(self.level) == 0;

        self.major += 1;
        self.minor = next_minor;

        let (x, y) = self.axis.compose(major, minor);
        Some(SubStep {
            x,
            y,
            minor_crossed,
            major_boundary,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for SubSteps {}
