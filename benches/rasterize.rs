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

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use softrast::core::buffer::FrameBuffer;
use softrast::core::raster::{Color, DrawOptions, Point, Rasterizer, Shading};
use softrast::core::scene::Scene;

const LEVELS: [Option<u32>; 3] = [None, Some(4), Some(8)];

fn options(level: Option<u32>) -> DrawOptions {
    match level {
        Some(level) => DrawOptions::smooth().with_aa(level),
        None => DrawOptions::smooth(),
    }
}

fn label(level: Option<u32>) -> String {
    level.map_or_else(|| "no-aa".to_string(), |l| format!("aa{}", l))
}

fn bench_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("line");
    let mut fb = FrameBuffer::new(256, 256);

    for level in LEVELS {
        let opts = options(level);
        group.bench_with_input(BenchmarkId::from_parameter(label(level)), &opts, |b, opts| {
            b.iter(|| {
                Rasterizer::new(&mut fb).draw_line(
                    black_box(Point::new(3, 10, Color::RED)),
                    black_box(Point::new(250, 180, Color::BLUE)),
                    opts,
                );
            })
        });
    }
    group.finish();
}

fn bench_triangles(c: &mut Criterion) {
    let mut group = c.benchmark_group("triangle");
    let mut fb = FrameBuffer::new(256, 256);
    let texture = FrameBuffer::filled(64, 64, Color::GREEN);

    for level in LEVELS {
        let opts = options(level);
        group.bench_with_input(BenchmarkId::new("smooth", label(level)), &opts, |b, opts| {
            b.iter(|| {
                Rasterizer::new(&mut fb).draw_triangle(
                    black_box(Point::new(10, 5, Color::RED)),
                    black_box(Point::new(240, 60, Color::GREEN)),
                    black_box(Point::new(90, 250, Color::BLUE)),
                    Shading::Smooth,
                    opts,
                );
            })
        });
    }

    group.bench_function("textured", |b| {
        b.iter(|| {
            Rasterizer::new(&mut fb).draw_triangle(
                black_box(Point::new(10, 5, Color::WHITE)),
                black_box(Point::new(240, 60, Color::WHITE)),
                black_box(Point::new(90, 250, Color::WHITE)),
                Shading::Textured(&texture),
                &DrawOptions::flat(),
            );
        })
    });
    group.finish();
}

fn bench_scenes(c: &mut Criterion) {
    let mut fb = FrameBuffer::new(500, 500);
    let opts = DrawOptions::smooth().with_aa(4);

    c.bench_function("scene/line-petal", |b| {
        b.iter(|| Scene::LinePetal.render(&mut fb, black_box(48), &opts, None))
    });
}

criterion_group!(benches, bench_lines, bench_triangles, bench_scenes);
criterion_main!(benches);
