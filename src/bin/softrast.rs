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

//! softrast command-line renderer
//!
//! Renders a built-in scene (or all of them) plus any configured shapes into
//! a frame buffer and writes it as PNG. Settings come from an optional TOML
//! file; command-line flags override it.

use std::path::{Path, PathBuf};

use clap::Parser;
use softrast::core::buffer::image_io::{load_texture, save_png};
use softrast::core::buffer::{FrameBuffer, PixelSource};
use softrast::core::scene::Scene;
use softrast::frontend::RenderConfig;

#[derive(Parser, Debug)]
#[command(name = "softrast", version, about = "Super-sampling software rasterizer")]
struct Args {
    /// TOML render configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Scene to render, or "all" to render every scene to its own file
    #[arg(short, long, default_value = "all")]
    scene: String,

    /// Output width in pixels
    #[arg(long)]
    width: Option<usize>,

    /// Output height in pixels
    #[arg(long)]
    height: Option<usize>,

    /// Scene subdivision
    #[arg(long)]
    steps: Option<u32>,

    /// Interpolate vertex colors
    #[arg(long, overrides_with = "no_smooth")]
    smooth: bool,

    /// Use flat shading even if the config enables smooth shading
    #[arg(long)]
    no_smooth: bool,

    /// Enable super-sampled anti-aliasing
    #[arg(long, overrides_with = "no_aa")]
    aa: bool,

    /// Disable anti-aliasing even if the config enables it
    #[arg(long)]
    no_aa: bool,

    /// Super-sampling factor
    #[arg(long)]
    aa_level: Option<u32>,

    /// Texture image for textured scenes and shapes
    #[arg(long)]
    texture: Option<PathBuf>,

    /// Write the effective configuration to this file
    #[arg(long)]
    save_config: Option<PathBuf>,

    /// Output PNG file
    #[arg(short, long)]
    out: PathBuf,
}

impl Args {
    fn apply(&self, config: &mut RenderConfig) {
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(steps) = self.steps {
            config.steps = steps;
        }
        if let Some(level) = self.aa_level {
            config.aa_level = level;
        }
        if let Some(texture) = &self.texture {
            config.texture = Some(texture.clone());
        }
        if let Some(smooth) = flag(self.smooth, self.no_smooth) {
            config.smooth = smooth;
        }
        if let Some(aa) = flag(self.aa, self.no_aa) {
            config.anti_alias = aa;
        }
    }
}

/// Resolve a `--x` / `--no-x` pair, `None` when neither was given
fn flag(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    }
}

/// `out.png` -> `out-line-fan.png`
fn scene_path(out: &Path, scene: Scene) -> PathBuf {
    let stem = out
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "softrast".to_string());
    let ext = out
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_else(|| "png".to_string());
    out.with_file_name(format!("{}-{}.{}", stem, scene.name(), ext))
}

fn render(
    config: &RenderConfig,
    scene: Scene,
    texture: Option<&dyn PixelSource>,
    out: &Path,
) -> softrast::Result<()> {
    let opts = config.draw_options();
    let mut fb = FrameBuffer::filled(config.width, config.height, config.background);

    scene.render(&mut fb, config.steps, &opts, texture)?;
    for shape in &config.shapes {
        shape.draw(&mut fb, &opts, texture)?;
    }

    save_png(&fb, out)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Initialize logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => RenderConfig::load(path)?,
        None => RenderConfig::default(),
    };
    args.apply(&mut config);
    config.validate()?;

    if let Some(path) = &args.save_config {
        config.save(path)?;
        log::info!("Saved configuration to {}", path.display());
    }

    let texture = config.texture.as_ref().map(load_texture).transpose()?;
    let texture = texture.as_ref().map(|t| t as &dyn PixelSource);

    log::info!(
        "Rendering {}x{} (smooth={}, aa={})",
        config.width,
        config.height,
        config.smooth,
        config.draw_options().supersample()
    );

    if args.scene.eq_ignore_ascii_case("all") {
        for scene in Scene::ALL {
            if scene.needs_texture() && texture.is_none() {
                log::warn!("Skipping {}: no texture configured", scene);
                continue;
            }
            render(&config, scene, texture, &scene_path(&args.out, scene))?;
        }
    } else {
        let scene: Scene = args.scene.parse()?;
        render(&config, scene, texture, &args.out)?;
    }

    Ok(())
}
