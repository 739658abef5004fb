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

//! Demonstration scenes and user-defined shapes
//!
//! Each [`Scene`] draws a fixed pattern centered on the target buffer. The
//! `steps` parameter controls how finely the pattern is subdivided and is
//! clamped to [`Scene::MIN_STEPS`]..=[`Scene::MAX_STEPS`].
//!
//! | Scene              | Draws                                         |
//! |--------------------|-----------------------------------------------|
//! | `line-fan`         | smooth lines from the center in all directions |
//! | `line-petal`       | a petal curve around a small circle           |
//! | `triangle-flat`    | a flat-shaded triangle fan                    |
//! | `triangle-smooth`  | a smooth-shaded triangle fan                  |
//! | `triangle-texture` | a textured triangle fan                       |
//!
//! [`Shape`]s are single primitives described in the render configuration
//! and drawn after the scene.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::buffer::{PixelBuffer, PixelSource};
use crate::core::error::{RasterError, Result};
use crate::core::raster::{Color, DrawOptions, Point, Rasterizer};

/// A built-in demonstration scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scene {
    LineFan,
    LinePetal,
    TriangleFlat,
    TriangleSmooth,
    TriangleTextured,
}

impl Scene {
    /// All scenes, in presentation order
    pub const ALL: [Scene; 5] = [
        Scene::LineFan,
        Scene::LinePetal,
        Scene::TriangleFlat,
        Scene::TriangleSmooth,
        Scene::TriangleTextured,
    ];

    pub const MIN_STEPS: u32 = 6;
    pub const MAX_STEPS: u32 = 192;
    pub const DEFAULT_STEPS: u32 = 12;

    /// Command-line name of the scene
    pub fn name(self) -> &'static str {
        match self {
            Scene::LineFan => "line-fan",
            Scene::LinePetal => "line-petal",
            Scene::TriangleFlat => "triangle-flat",
            Scene::TriangleSmooth => "triangle-smooth",
            Scene::TriangleTextured => "triangle-texture",
        }
    }

    /// Whether the scene samples a texture
    pub fn needs_texture(self) -> bool {
        self == Scene::TriangleTextured
    }

    /// Draw the scene onto `buffer`
    ///
    /// Line scenes are always smooth-shaded and the two shaded triangle
    /// scenes force their own shading; every scene honors the anti-aliasing
    /// flags in `opts`.
    ///
    /// # Errors
    ///
    /// [`RasterError::MissingTexture`] if the scene needs a texture and none
    /// is given. Nothing is drawn in that case.
    pub fn render<B: PixelBuffer + ?Sized>(
        self,
        buffer: &mut B,
        steps: u32,
        opts: &DrawOptions,
        texture: Option<&dyn PixelSource>,
    ) -> Result<()> {
        let steps = steps.clamp(Self::MIN_STEPS, Self::MAX_STEPS);
        let frame = Frame::of(buffer);

        log::debug!(
            "Rendering scene {} ({}x{}, steps={}, aa={})",
            self.name(),
            buffer.width(),
            buffer.height(),
            steps,
            opts.supersample()
        );

        let mut raster = Rasterizer::new(buffer);
        match self {
            Scene::LineFan => line_fan(&mut raster, &frame, steps, opts),
            Scene::LinePetal => line_petal(&mut raster, &frame, steps, opts),
            Scene::TriangleFlat => {
                let opts = DrawOptions {
                    smooth: false,
                    ..*opts
                };
                for [v0, v1, v2] in triangle_fan(&frame, steps) {
                    // Flat shading takes the rim vertex's color
                    raster.draw_triangle_with_flags(v1, v0, v2, None, &opts);
                }
            }
            Scene::TriangleSmooth => {
                let opts = DrawOptions {
                    smooth: true,
                    ..*opts
                };
                for [v0, v1, v2] in triangle_fan(&frame, steps) {
                    raster.draw_triangle_with_flags(v0, v1, v2, None, &opts);
                }
            }
            Scene::TriangleTextured => {
                let texture = texture.ok_or(RasterError::MissingTexture)?;
                for [v0, v1, v2] in triangle_fan(&frame, steps) {
                    raster.draw_triangle_with_flags(v0, v1, v2, Some(texture), opts);
                }
            }
        }

        Ok(())
    }
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scene {
    type Err = RasterError;

    fn from_str(s: &str) -> Result<Self> {
        Scene::ALL
            .into_iter()
            .find(|scene| scene.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| RasterError::UnknownScene(s.to_string()))
    }
}

/// Center and extent of the target buffer
struct Frame {
    cx: i32,
    cy: i32,
    /// Largest offset from the center that stays inside the buffer
    reach: i32,
    min_side: f64,
}

impl Frame {
    fn of<B: PixelSource + ?Sized>(buffer: &B) -> Self {
        let (width, height) = (buffer.width() as i32, buffer.height() as i32);
        let (cx, cy) = (width / 2, height / 2);
        Self {
            cx,
            cy,
            reach: cx.min(cy).min(width - 1 - cx).min(height - 1 - cy).max(0),
            min_side: buffer.width().min(buffer.height()) as f64,
        }
    }
}

fn rgb(r: f64, g: f64, b: f64) -> Color {
    Color::new(r as f32, g as f32, b as f32)
}

/// Lines through the center, fading along the fan
fn line_fan<B: PixelBuffer + ?Sized>(
    raster: &mut Rasterizer<'_, B>,
    frame: &Frame,
    steps: u32,
    opts: &DrawOptions,
) {
    let opts = DrawOptions {
        smooth: true,
        ..*opts
    };
    let radius = (frame.min_side * 0.45) as i32 as f64;
    let center = Point::new(frame.cx, frame.cy, Color::new(1.0, 1.0, 0.0));

    for step in 0..steps {
        let fade = 1.0 - step as f64 / steps as f64;
        let theta = PI * step as f64 / steps as f64;
        let (dx, dy) = (
            (theta.sin() * radius) as i32,
            (theta.cos() * radius) as i32,
        );

        let forward = Point::new(frame.cx + dx, frame.cy + dy, rgb(0.0, 0.0, fade));
        let backward = Point::new(frame.cx - dx, frame.cy - dy, rgb(0.0, fade, 0.0));
        raster.draw_line(backward, center, &opts);
        raster.draw_line(center, forward, &opts);
    }
}

/// A petal curve around a circle
fn line_petal<B: PixelBuffer + ?Sized>(
    raster: &mut Rasterizer<'_, B>,
    frame: &Frame,
    steps: u32,
    opts: &DrawOptions,
) {
    let opts = DrawOptions {
        smooth: true,
        ..*opts
    };
    let steps = 2 * steps;
    let d_theta = 2.0 * PI / steps as f64;
    let d_petal = 12.0 * PI / steps as f64;
    // Outer extent is floor(0.5 + 1.25 * radius), which stays within reach
    let radius = 0.75 * frame.reach as f64;
    let petal = radius * 0.25;

    let petal_point = |i: u32| {
        let i = i as f64;
        let x = (0.5 + radius * (d_theta * i).sin() + petal * (d_petal * i).sin()).floor();
        let y = (0.5 + radius * (d_theta * i).cos() + petal * (d_petal * i).cos()).floor();
        Point::new(
            x as i32 + frame.cx,
            y as i32 + frame.cy,
            rgb(
                1.0,
                (128.0 + (d_theta * i * 5.0).sin() * 127.0) / 255.0,
                (128.0 + (d_theta * i * 5.0).cos() * 127.0) / 255.0,
            ),
        )
    };
    for i in 0..steps + 2 {
        raster.draw_line(petal_point(i), petal_point(i + 1), &opts);
    }

    let orange = rgb(1.0, 97.0 / 255.0, 0.0);
    let circle_point = |i: u32| {
        let i = i as f64;
        Point::new(
            (0.5 * radius * (d_theta * i).sin()).floor() as i32 + frame.cx,
            (0.5 * radius * (d_theta * i).cos()).floor() as i32 + frame.cy,
            orange,
        )
    };
    for i in 0..steps + 1 {
        raster.draw_line(circle_point(i), circle_point(i + 1), &opts);
    }
}

/// Triangles `[center, rim, next rim]` around the buffer center
fn triangle_fan(frame: &Frame, steps: u32) -> Vec<[Point; 3]> {
    let count = steps / 2;
    let delta = 2.0 * PI / count as f64;
    let radius = (frame.min_side * 0.45) as i32 as f64;

    let rim = |theta: f64| {
        Point::new(
            (frame.cx as f64 + theta.sin() * radius) as i32,
            (frame.cy as f64 + theta.cos() * radius) as i32,
            rgb(
                (127.0 + 127.0 * theta.sin()) / 255.0,
                (127.0 + 127.0 * (theta + 2.0 * PI / 3.0).sin()) / 255.0,
                (127.0 + 127.0 * (theta + 4.0 * PI / 3.0).sin()) / 255.0,
            ),
        )
    };

    let center = Point::new(frame.cx, frame.cy, Color::WHITE);
    (1..=count)
        .map(|i| {
            let theta = delta * i as f64;
            [center, rim(theta), rim(theta + delta)]
        })
        .collect()
}

/// A vertex as written in a configuration file
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeVertex {
    pub x: i32,
    pub y: i32,
    #[serde(default = "default_vertex_color")]
    pub color: Color,
}

fn default_vertex_color() -> Color {
    Color::RED
}

impl From<ShapeVertex> for Point {
    fn from(v: ShapeVertex) -> Self {
        Point::new(v.x, v.y, v.color)
    }
}

/// A single primitive drawn on top of a scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    Point { at: ShapeVertex },
    Line { from: ShapeVertex, to: ShapeVertex },
    Polyline { points: Vec<ShapeVertex> },
    Triangle { vertices: [ShapeVertex; 3] },
}

impl Shape {
    /// Draw the shape with the given options
    ///
    /// Triangles are textured when a texture is given, like the flag-style
    /// triangle call.
    ///
    /// # Errors
    ///
    /// [`RasterError::OutOfBounds`] if any vertex lies outside the buffer.
    pub fn draw<B: PixelBuffer + ?Sized>(
        &self,
        buffer: &mut B,
        opts: &DrawOptions,
        texture: Option<&dyn PixelSource>,
    ) -> Result<()> {
        for v in self.vertices() {
            if !buffer.contains(v.x, v.y) {
                return Err(RasterError::OutOfBounds {
                    x: v.x,
                    y: v.y,
                    width: buffer.width(),
                    height: buffer.height(),
                });
            }
        }

        let mut raster = Rasterizer::new(buffer);
        match self {
            Shape::Point { at } => raster.draw_point((*at).into()),
            Shape::Line { from, to } => raster.draw_line((*from).into(), (*to).into(), opts),
            Shape::Polyline { points } => {
                let points: Vec<Point> = points.iter().map(|&v| v.into()).collect();
                raster.draw_polyline(&points, opts);
            }
            Shape::Triangle { vertices: [a, b, c] } => raster.draw_triangle_with_flags(
                (*a).into(),
                (*b).into(),
                (*c).into(),
                texture,
                opts,
            ),
        }
        Ok(())
    }

    fn vertices(&self) -> Vec<ShapeVertex> {
        match self {
            Shape::Point { at } => vec![*at],
            Shape::Line { from, to } => vec![*from, *to],
            Shape::Polyline { points } => points.clone(),
            Shape::Triangle { vertices } => vertices.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::buffer::FrameBuffer;

    #[test]
    fn test_scene_names_round_trip() {
        for scene in Scene::ALL {
            assert_eq!(scene.name().parse::<Scene>().unwrap(), scene);
            assert_eq!(scene.to_string(), scene.name());
        }
        assert_eq!("LINE-FAN".parse::<Scene>().unwrap(), Scene::LineFan);
    }

    #[test]
    fn test_unknown_scene() {
        assert!(matches!(
            "spiral".parse::<Scene>(),
            Err(RasterError::UnknownScene(name)) if name == "spiral"
        ));
    }

    #[test]
    fn test_every_scene_draws() {
        let texture = FrameBuffer::filled(16, 16, Color::BLUE);
        for scene in Scene::ALL {
            for opts in [DrawOptions::flat(), DrawOptions::smooth().with_aa(4)] {
                let mut fb = FrameBuffer::new(96, 64);
                scene
                    .render(&mut fb, Scene::DEFAULT_STEPS, &opts, Some(&texture as &dyn PixelSource))
                    .unwrap();
                assert!(fb.count_not(Color::BLACK) > 0, "{} drew nothing", scene);
            }
        }
    }

    #[test]
    fn test_textured_scene_requires_texture() {
        let mut fb = FrameBuffer::new(32, 32);
        let result = Scene::TriangleTextured.render(&mut fb, 12, &DrawOptions::flat(), None);
        assert!(matches!(result, Err(RasterError::MissingTexture)));
        assert_eq!(fb.count_not(Color::BLACK), 0);
        assert!(Scene::TriangleTextured.needs_texture());
        assert!(!Scene::LineFan.needs_texture());
    }

    #[test]
    fn test_steps_are_clamped() {
        let mut low = FrameBuffer::new(64, 64);
        let mut min = FrameBuffer::new(64, 64);
        Scene::TriangleSmooth
            .render(&mut low, 0, &DrawOptions::flat(), None)
            .unwrap();
        Scene::TriangleSmooth
            .render(&mut min, Scene::MIN_STEPS, &DrawOptions::flat(), None)
            .unwrap();
        assert_eq!(low, min);

        let mut high = FrameBuffer::new(64, 64);
        let mut max = FrameBuffer::new(64, 64);
        Scene::LineFan
            .render(&mut high, 10_000, &DrawOptions::flat(), None)
            .unwrap();
        Scene::LineFan
            .render(&mut max, Scene::MAX_STEPS, &DrawOptions::flat(), None)
            .unwrap();
        assert_eq!(high, max);
    }

    #[test]
    fn test_tiny_buffer_does_not_panic() {
        let texture = FrameBuffer::filled(2, 2, Color::WHITE);
        for scene in Scene::ALL {
            let mut fb = FrameBuffer::new(1, 1);
            scene
                .render(&mut fb, 24, &DrawOptions::smooth().with_aa(3), Some(&texture as &dyn PixelSource))
                .unwrap();
        }
    }

    #[test]
    fn test_small_even_buffers_stay_in_bounds() {
        let texture = FrameBuffer::filled(4, 4, Color::WHITE);
        for (width, height) in [(4, 4), (32, 16), (16, 8), (2, 2), (16, 32), (10, 6)] {
            for scene in Scene::ALL {
                for opts in [DrawOptions::flat(), DrawOptions::smooth().with_aa(4)] {
                    let mut fb = FrameBuffer::new(width, height);
                    scene
                        .render(&mut fb, 24, &opts, Some(&texture as &dyn PixelSource))
                        .unwrap();
                }
            }
        }
    }

    #[test]
    fn test_triangle_fan_covers_center() {
        let mut fb = FrameBuffer::new(64, 64);
        Scene::TriangleFlat
            .render(&mut fb, 24, &DrawOptions::flat(), None)
            .unwrap();
        assert_ne!(fb.get_pixel(32, 32), Color::BLACK);
        assert_eq!(fb.get_pixel(0, 0), Color::BLACK);
    }

    #[test]
    fn test_shape_from_toml() {
        #[derive(Deserialize)]
        struct Doc {
            shape: Vec<Shape>,
        }

        let doc: Doc = toml::from_str(
            r#"
            [[shape]]
            kind = "line"
            from = { x = 1, y = 1 }
            to = { x = 6, y = 3, color = { r = 0.0, g = 1.0, b = 0.0 } }

            [[shape]]
            kind = "triangle"
            vertices = [{ x = 0, y = 0 }, { x = 7, y = 0 }, { x = 0, y = 7 }]
            "#,
        )
        .unwrap();

        let shapes = doc.shape;
        assert_eq!(shapes.len(), 2);
        assert!(matches!(shapes[0], Shape::Line { to, .. } if to.color == Color::GREEN));
        assert!(matches!(shapes[1], Shape::Triangle { vertices } if vertices[0].color == Color::RED));
    }

    #[test]
    fn test_shape_draw() {
        let mut fb = FrameBuffer::new(8, 8);
        let v = |x, y| ShapeVertex {
            x,
            y,
            color: Color::WHITE,
        };
        Shape::Line {
            from: v(0, 0),
            to: v(7, 0),
        }
        .draw(&mut fb, &DrawOptions::flat(), None)
        .unwrap();
        assert_eq!(fb.count_not(Color::BLACK), 8);

        let result = Shape::Triangle {
            vertices: [v(0, 0), v(8, 0), v(0, 4)],
        }
        .draw(&mut fb, &DrawOptions::flat(), None);
        assert!(matches!(result, Err(RasterError::OutOfBounds { x: 8, .. })));
        assert_eq!(fb.count_not(Color::BLACK), 8);
    }
}
