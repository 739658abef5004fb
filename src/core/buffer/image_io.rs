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

//! Image file I/O
//!
//! Decodes image files into texture buffers and encodes frame buffers as PNG.
//!
//! Buffers use a bottom-left origin (row 0 is the bottom of the picture)
//! while image files store the top row first, so both directions flip
//! vertically.

use std::path::Path;

use image::{imageops, DynamicImage, RgbImage};

use super::FrameBuffer;
use crate::core::error::{RasterError, Result};

/// Load an image file as a texture buffer
///
/// Any channel layout the decoder understands (grayscale, RGBA, 16-bit) is
/// normalized to 8-bit RGB; alpha is dropped.
///
/// # Errors
///
/// - [`RasterError::Image`] if the file cannot be opened or decoded
/// - [`RasterError::EmptyTexture`] if the image has no pixels
pub fn load_texture<P: AsRef<Path>>(path: P) -> Result<FrameBuffer> {
    let path = path.as_ref();
    let img = image::open(path)?;
    log::info!(
        "Loaded texture {} ({}x{})",
        path.display(),
        img.width(),
        img.height()
    );
    texture_from_image(img)
}

/// Convert a decoded image into a texture buffer
pub fn texture_from_image(img: DynamicImage) -> Result<FrameBuffer> {
    let mut rgb = img.to_rgb8();
    if rgb.width() == 0 || rgb.height() == 0 {
        return Err(RasterError::EmptyTexture);
    }
    imageops::flip_vertical_in_place(&mut rgb);

    let (width, height) = (rgb.width() as usize, rgb.height() as usize);
    let pixels: Vec<[u8; 3]> = rgb.pixels().map(|p| p.0).collect();

    FrameBuffer::from_rgb8(width, height, pixels).ok_or(RasterError::EmptyTexture)
}

/// Encode a frame buffer as a PNG file
///
/// # Errors
///
/// - [`RasterError::ImageDimensions`] if the buffer does not fit an image
/// - [`RasterError::Image`] if encoding or writing fails
pub fn save_png<P: AsRef<Path>>(buffer: &FrameBuffer, path: P) -> Result<()> {
    let mut img = to_image(buffer)?;
    imageops::flip_vertical_in_place(&mut img);
    img.save(path.as_ref())?;
    log::info!(
        "Wrote {} ({}x{})",
        path.as_ref().display(),
        img.width(),
        img.height()
    );
    Ok(())
}

fn to_image(buffer: &FrameBuffer) -> Result<RgbImage> {
    use super::PixelSource;

    let dims_error = || RasterError::ImageDimensions {
        width: buffer.width(),
        height: buffer.height(),
    };
    let width = u32::try_from(buffer.width()).map_err(|_| dims_error())?;
    let height = u32::try_from(buffer.height()).map_err(|_| dims_error())?;

    RgbImage::from_raw(width, height, buffer.to_rgb8_bytes()).ok_or_else(dims_error)
}
