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

//! softrast: A super-sampling software rasterizer
//!
//! This crate draws anti-aliased, color-interpolated lines and flat, smooth
//! or textured triangles into in-memory pixel buffers.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - [`core`]: Rasterization core, pixel buffers, image I/O and scenes
//! - [`frontend`]: Render configuration for the command-line renderer
//!
//! # Example
//!
//! ```
//! use softrast::core::buffer::{FrameBuffer, PixelSource};
//! use softrast::core::raster::{Color, DrawOptions, Point, Rasterizer};
//!
//! let mut fb = FrameBuffer::new(16, 16);
//! Rasterizer::new(&mut fb).draw_line(
//!     Point::new(0, 0, Color::WHITE),
//!     Point::new(15, 15, Color::WHITE),
//!     &DrawOptions::flat(),
//! );
//! assert_eq!(fb.get_pixel(7, 7), Color::WHITE);
//! ```
//!
//! # Getting Started
//!
//! 1. Create a [`core::buffer::FrameBuffer`] (or implement
//!    [`core::buffer::PixelBuffer`] for your own storage)
//! 2. Start a [`core::raster::Rasterizer`] session on it
//! 3. Draw lines and triangles with explicit [`core::raster::DrawOptions`]
//! 4. Save the result with [`core::buffer::image_io::save_png`]
//!
//! # Modules
//!
//! - [`core::raster`]: Line and triangle rasterization
//! - [`core::buffer`]: Pixel buffer traits and implementations
//! - [`core::scene`]: Demonstration scenes
//!
//! # Error Handling
//!
//! Drawing never fails. Fallible operations (checked pixel access, image and
//! configuration I/O) return [`core::error::Result<T>`] which is an alias for
//! `Result<T, RasterError>`.

pub mod core;
pub mod frontend;

// Re-export commonly used types
pub use core::error::{RasterError, Result};
