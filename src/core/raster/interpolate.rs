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

//! Linear interpolation and coverage compositing
//!
//! `interpolate(a, b, l, m, r)` blends `a` and `b` by `m`'s fractional
//! position between `l` and `r`:
//!
//! ```text
//! t = (m - l) / (r - l)
//! result = a * (1 - t) + b * t        (per channel)
//! ```
//!
//! When `l == r` the result is `a` unchanged. Callers never extrapolate:
//! `m` must lie in `[l, r]`, which is checked in debug builds.

use super::primitives::{Color, TexCoord};
use crate::core::buffer::PixelBuffer;

/// Values that can be blended channel-wise
pub trait Lerp: Copy {
    /// `self * (1 - t) + other * t`
    fn lerp(self, other: Self, t: f32) -> Self;
}

impl Lerp for Color {
    #[inline]
    fn lerp(self, other: Self, t: f32) -> Self {
        let s = 1.0 - t;
        Color {
            r: self.r * s + other.r * t,
            g: self.g * s + other.g * t,
            b: self.b * s + other.b * t,
        }
    }
}

impl Lerp for TexCoord {
    #[inline]
    fn lerp(self, other: Self, t: f32) -> Self {
        let s = 1.0 - t;
        TexCoord {
            u: self.u * s + other.u * t,
            v: self.v * s + other.v * t,
        }
    }
}

/// Interpolate between `a` and `b` by `m`'s position in `[l, r]`
///
/// # Examples
///
/// ```
/// use softrast::core::raster::{interpolate, Color};
///
/// let mid = interpolate(Color::RED, Color::GREEN, 0.0, 5.0, 10.0);
/// assert_eq!(mid, Color::new(0.5, 0.5, 0.0));
///
/// // Degenerate range returns the first value
/// assert_eq!(interpolate(Color::RED, Color::GREEN, 3.0, 3.0, 3.0), Color::RED);
/// ```
#[inline]
pub fn interpolate<T: Lerp>(a: T, b: T, l: f32, m: f32, r: f32) -> T {
    if l == r {
        return a;
    }
    debug_assert!(
        l < r && l <= m && m <= r,
        "interpolation position {} outside [{}, {}]",
        m,
        l,
        r
    );
    a.lerp(b, (m - l) / (r - l))
}

/// Integer-position variant of [`interpolate`]
#[inline]
pub(crate) fn interpolate_at<T: Lerp>(a: T, b: T, l: i32, m: i32, r: i32) -> T {
    interpolate(a, b, l as f32, m as f32, r as f32)
}

/// Texture coordinate interpolation, same semantics as [`interpolate`]
#[inline]
pub fn interpolate_tex(a: TexCoord, b: TexCoord, l: f32, m: f32, r: f32) -> TexCoord {
    interpolate(a, b, l, m, r)
}

/// Composite `color` over the pixel already in the buffer
///
/// Reads the backdrop at `(x, y)` and writes `interpolate(backdrop, color, 0,
/// alpha, 1)`: alpha 0 leaves the backdrop, alpha 1 writes `color`. Repeated
/// draws with alpha below 1 accumulate.
///
/// # Examples
///
/// ```
/// use softrast::core::buffer::{FrameBuffer, PixelSource};
/// use softrast::core::raster::{blend_over_backdrop, Color};
///
/// let mut fb = FrameBuffer::new(4, 4);
/// blend_over_backdrop(&mut fb, 1, 1, Color::WHITE, 1.0);
/// assert_eq!(fb.get_pixel(1, 1), Color::WHITE);
///
/// blend_over_backdrop(&mut fb, 2, 2, Color::WHITE, 0.0);
/// assert_eq!(fb.get_pixel(2, 2), Color::BLACK);
/// ```
pub fn blend_over_backdrop<B: PixelBuffer + ?Sized>(
    buffer: &mut B,
    x: i32,
    y: i32,
    color: Color,
    alpha: f32,
) {
    let backdrop = buffer.get_pixel(x, y);
    buffer.set_pixel(x, y, interpolate(backdrop, color, 0.0, alpha, 1.0));
}
