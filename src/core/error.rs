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

//! Error types
//!
//! The rasterization core never fails: degenerate geometry draws little or
//! nothing. Errors only arise at the edges of the crate, i.e. checked buffer
//! access, image and configuration I/O, and option validation.

use thiserror::Error;

/// Errors reported by buffers, image I/O and configuration
#[derive(Error, Debug)]
pub enum RasterError {
    #[error("pixel ({x}, {y}) outside {width}x{height} buffer")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },

    #[error("invalid anti-aliasing level {0} (must be at least 1)")]
    InvalidAaLevel(u32),

    #[error("invalid buffer size {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("buffer {width}x{height} cannot be encoded as an image")]
    ImageDimensions { width: usize, height: usize },

    #[error("texture mode requires a texture")]
    MissingTexture,

    #[error("texture has no pixels")]
    EmptyTexture,

    #[error("unknown scene: {0}")]
    UnknownScene(String),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

/// Result type for fallible operations
pub type Result<T> = std::result::Result<T, RasterError>;
