use glam::Vec2;

use crate::foundation::error::{RelumeError, RelumeResult};
use crate::stage::debug_view::VizMode;
use crate::texture::source::SourceImage;

/// Which per-pixel stage a draw runs. Exactly one stage per draw, always
/// paired with the region vertex stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Bilinear copy of the source region.
    Passthrough,
    /// Channel-remapped inspection view.
    DebugView {
        /// How to interpret the bound texture's channels.
        mode: VizMode,
    },
    /// 6-tap Lanczos upscale with anti-ringing.
    LanczosResample,
}

/// Immutable per-draw parameter block, bound once per invocation.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DispatchParams {
    /// The stage to run for every output pixel.
    pub stage: Stage,
    /// Active-region fraction of the source texture, per axis in (0, 1].
    pub uv_scale: Vec2,
    /// Pixel dimensions of the source texture. Only the Lanczos stage reads
    /// it; it converts region UV into source-pixel coordinates.
    pub input_size: Vec2,
}

impl DispatchParams {
    /// Build a validated parameter block.
    pub fn new(stage: Stage, uv_scale: Vec2, input_size: Vec2) -> RelumeResult<Self> {
        let params = Self {
            stage,
            uv_scale,
            input_size,
        };
        params.validate()?;
        Ok(params)
    }

    /// Parameters for upscaling a `render_size` region rendered into the
    /// top-left of `texture`, deriving `uv_scale = render_size / texture_size`
    /// the way the host pipeline does.
    pub fn for_region(stage: Stage, render_size: (u32, u32), texture: &SourceImage) -> RelumeResult<Self> {
        let (rw, rh) = render_size;
        if rw == 0 || rh == 0 {
            return Err(RelumeError::validation("render_size must be > 0"));
        }
        if rw > texture.width() || rh > texture.height() {
            return Err(RelumeError::validation(format!(
                "render_size {}x{} exceeds texture {}x{}",
                rw,
                rh,
                texture.width(),
                texture.height()
            )));
        }
        Self::new(
            stage,
            Vec2::new(rw as f32, rh as f32) / texture.size(),
            texture.size(),
        )
    }

    /// Check the caller contract: uv_scale per axis in (0, 1]; a positive
    /// input_size whenever the Lanczos stage will read it.
    pub fn validate(&self) -> RelumeResult<()> {
        for axis in [self.uv_scale.x, self.uv_scale.y] {
            if !(axis > 0.0 && axis <= 1.0) {
                return Err(RelumeError::validation(format!(
                    "uv_scale components must be in (0, 1], got {:?}",
                    self.uv_scale
                )));
            }
        }
        if self.stage == Stage::LanczosResample
            && !(self.input_size.x > 0.0 && self.input_size.y > 0.0)
        {
            return Err(RelumeError::validation(format!(
                "input_size must be positive for the Lanczos stage, got {:?}",
                self.input_size
            )));
        }
        Ok(())
    }
}
