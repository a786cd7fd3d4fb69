use glam::{Vec2, Vec4};

use crate::texture::source::SourceImage;

/// Passthrough stage: bilinear sample at the interpolated UV, all four
/// channels unmodified.
pub fn blit(src: &SourceImage, uv: Vec2) -> Vec4 {
    src.sample_bilinear(uv)
}
