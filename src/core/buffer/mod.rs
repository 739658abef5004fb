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

//! Pixel buffers
//!
//! The rasterizer reads and writes pixels only through the [`PixelSource`]
//! and [`PixelBuffer`] traits. [`FrameBuffer`] is the concrete 8-bit RGB
//! implementation used for both render targets and textures. [`FloatBuffer`]
//! keeps full `f32` precision, which is useful when composited coverage must
//! be inspected without 8-bit quantization.
//!
//! # Coordinate System
//!
//! - Origin (0, 0) is the first pixel of the first row
//! - X increases to the right (0 to width - 1)
//! - Y increases with the row index (0 to height - 1)
//!
//! # Bounds
//!
//! Bounds are checked here, at the buffer boundary, and never clamped inside
//! the rasterizer. `get_pixel`/`set_pixel` panic on out-of-range coordinates;
//! `try_get_pixel`/`try_set_pixel` report [`RasterError::OutOfBounds`].

pub mod image_io;

use crate::core::error::{RasterError, Result};
use crate::core::raster::Color;

/// Read access to a fixed-size grid of RGB pixels
pub trait PixelSource {
    /// Width in pixels
    fn width(&self) -> usize;

    /// Height in pixels
    fn height(&self) -> usize;

    /// Read the color at `(x, y)`
    ///
    /// Defined only for `0 <= x < width` and `0 <= y < height`.
    fn get_pixel(&self, x: i32, y: i32) -> Color;

    /// Whether `(x, y)` addresses a pixel of this buffer
    fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width() && (y as usize) < self.height()
    }
}

/// Read/write access to a fixed-size grid of RGB pixels
pub trait PixelBuffer: PixelSource {
    /// Write the color at `(x, y)`
    ///
    /// Defined only for `0 <= x < width` and `0 <= y < height`.
    fn set_pixel(&mut self, x: i32, y: i32, color: Color);
}

/// An 8-bit per channel RGB pixel buffer
///
/// Pixels are stored as a flat row-major `Vec`. Colors cross the interface
/// as `[0, 1]` floats and are stored as `round(v * 255)`.
///
/// # Examples
///
/// ```
/// use softrast::core::buffer::{FrameBuffer, PixelBuffer, PixelSource};
/// use softrast::core::raster::Color;
///
/// let mut fb = FrameBuffer::new(64, 32);
/// fb.set_pixel(10, 5, Color::RED);
/// assert_eq!(fb.get_pixel(10, 5), Color::RED);
/// assert!(fb.try_get_pixel(64, 0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: usize,
    height: usize,
    pixels: Vec<[u8; 3]>,
}

impl FrameBuffer {
    /// Create a black buffer
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, Color::BLACK)
    }

    /// Create a buffer filled with `color`
    pub fn filled(width: usize, height: usize, color: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![color.to_rgb8(); width * height],
        }
    }

    /// Build a buffer from row-major 8-bit pixels
    ///
    /// Returns `None` if `pixels.len() != width * height`.
    pub fn from_rgb8(width: usize, height: usize, pixels: Vec<[u8; 3]>) -> Option<Self> {
        if pixels.len() != width * height {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    /// Fill the whole buffer with `color`
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color.to_rgb8());
    }

    /// Raw 8-bit value at `(x, y)`
    pub fn rgb8(&self, x: i32, y: i32) -> [u8; 3] {
        self.pixels[self.index(x, y)]
    }

    /// Bounds-checked read
    pub fn try_get_pixel(&self, x: i32, y: i32) -> Result<Color> {
        self.check(x, y)?;
        Ok(self.get_pixel(x, y))
    }

    /// Bounds-checked write
    pub fn try_set_pixel(&mut self, x: i32, y: i32, color: Color) -> Result<()> {
        self.check(x, y)?;
        self.set_pixel(x, y, color);
        Ok(())
    }

    /// Packed row-major RGB bytes (3 bytes per pixel)
    pub fn to_rgb8_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flatten().copied().collect()
    }

    /// Number of pixels that differ from `color`
    pub fn count_not(&self, color: Color) -> usize {
        let rgb = color.to_rgb8();
        self.pixels.iter().filter(|&&p| p != rgb).count()
    }

    fn check(&self, x: i32, y: i32) -> Result<()> {
        if self.contains(x, y) {
            Ok(())
        } else {
            Err(RasterError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> usize {
        assert!(
            self.contains(x, y),
            "pixel ({}, {}) outside {}x{} buffer",
            x,
            y,
            self.width,
            self.height
        );
        (y as usize) * self.width + (x as usize)
    }
}

impl PixelSource for FrameBuffer {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    #[inline(always)]
    fn get_pixel(&self, x: i32, y: i32) -> Color {
        Color::from_rgb8(self.pixels[self.index(x, y)])
    }
}

impl PixelBuffer for FrameBuffer {
    #[inline(always)]
    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color.to_rgb8();
    }
}

/// A full-precision RGB pixel buffer
///
/// Same layout and bounds rules as [`FrameBuffer`], but colors are stored
/// unquantized.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl FloatBuffer {
    /// Create a black buffer
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, Color::BLACK)
    }

    /// Create a buffer filled with `color`
    pub fn filled(width: usize, height: usize, color: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width * height],
        }
    }

    /// Quantize into an 8-bit [`FrameBuffer`]
    pub fn to_frame_buffer(&self) -> FrameBuffer {
        FrameBuffer {
            width: self.width,
            height: self.height,
            pixels: self.pixels.iter().map(|c| c.to_rgb8()).collect(),
        }
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> usize {
        assert!(
            self.contains(x, y),
            "pixel ({}, {}) outside {}x{} buffer",
            x,
            y,
            self.width,
            self.height
        );
        (y as usize) * self.width + (x as usize)
    }
}

impl PixelSource for FloatBuffer {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    #[inline(always)]
    fn get_pixel(&self, x: i32, y: i32) -> Color {
        self.pixels[self.index(x, y)]
    }
}

impl PixelBuffer for FloatBuffer {
    #[inline(always)]
    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }
}
