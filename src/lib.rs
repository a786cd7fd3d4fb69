//! Relume is the resampling core of a real-time upscaling pipeline.
//!
//! A host renders a frame at an internal resolution into the top-left
//! sub-rectangle of a larger texture and asks Relume to produce the
//! display-resolution image. Three per-pixel stages are available per draw,
//! always paired with the shared region vertex stage:
//!
//! 1. **Region vertex stage**: a canonical 3-vertex fullscreen triangle whose
//!    interpolated UV spans exactly the active sub-rectangle (`uv_scale`).
//! 2. **Passthrough**: bilinear copy of the sampled source.
//! 3. **Debug visualize**: channel remap for inspecting depth / motion /
//!    mask-style textures.
//! 4. **Lanczos resample**: the core upscaler — a 6-tap radius-3 windowed-sinc
//!    filter fed by grouped 2x2 fetches, with an anti-ringing clamp against
//!    the local center envelope.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Per-pixel purity**: every output pixel is an independent pure function
//!   of the read-only source and the per-draw parameter block, so the draw
//!   loop is a plain data-parallel map with no shared mutable state.
//! - **No IO in the core**: image decode/encode happens at the CLI boundary.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod render;
mod stage;
mod texture;

pub use foundation::core::{Canvas, Channel, Vec2, Vec3, Vec4};
pub use foundation::error::{RelumeError, RelumeResult};
pub use render::params::{DispatchParams, Stage};
pub use render::pipeline::{RenderThreading, draw};
pub use stage::debug_view::{VizMode, visualize};
pub use stage::lanczos::resample;
pub use stage::passthrough::blit;
pub use stage::vertex::{VertexOutput, fullscreen_triangle, interpolate_uv, region_vertex};
pub use texture::frame::FrameRgba;
pub use texture::source::SourceImage;
