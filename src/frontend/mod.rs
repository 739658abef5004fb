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

//! Frontend module
//!
//! Everything between the command line and the rasterization core.
//!
//! - [`config`]: TOML render configuration
//!
//! # Example
//!
//! ```no_run
//! use softrast::frontend::RenderConfig;
//!
//! let config = RenderConfig::load("softrast.toml")?;
//! config.validate()?;
//! let opts = config.draw_options();
//! # Ok::<(), softrast::RasterError>(())
//! ```

pub mod config;

pub use config::RenderConfig;
