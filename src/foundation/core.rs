use crate::foundation::error::{RelumeError, RelumeResult};

pub use glam::{Vec2, Vec3, Vec4};

/// Output target dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Target width in pixels.
    pub width: u32,
    /// Target height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Build a canvas, rejecting zero dimensions.
    pub fn new(width: u32, height: u32) -> RelumeResult<Self> {
        if width == 0 || height == 0 {
            return Err(RelumeError::validation("Canvas dimensions must be > 0"));
        }
        Ok(Self { width, height })
    }

    /// Total number of pixels.
    pub fn pixel_count(self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Normalized device coordinate of a pixel center, clip convention
    /// (x right, y up, both in [-1, 1]). Row 0 is the top of the target.
    pub fn pixel_center_ndc(self, x: u32, y: u32) -> Vec2 {
        Vec2::new(
            (x as f32 + 0.5) / self.width as f32 * 2.0 - 1.0,
            1.0 - (y as f32 + 0.5) / self.height as f32 * 2.0,
        )
    }
}

/// Color channel selector for grouped 2x2 fetches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    /// Red component.
    Red,
    /// Green component.
    Green,
    /// Blue component.
    Blue,
    /// Alpha component.
    Alpha,
}

impl Channel {
    /// Extract this channel from an RGBA texel.
    pub fn extract(self, texel: Vec4) -> f32 {
        match self {
            Channel::Red => texel.x,
            Channel::Green => texel.y,
            Channel::Blue => texel.z,
            Channel::Alpha => texel.w,
        }
    }
}
