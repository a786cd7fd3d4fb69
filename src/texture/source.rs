use glam::{Vec2, Vec4};

use crate::foundation::core::Channel;
use crate::foundation::error::{RelumeError, RelumeResult};

/// Read-only source texture: a 2-D array of RGBA f32 texels.
///
/// Sampling follows GPU conventions: normalized UV in [0,1]², texel `(x, y)`
/// centered at `((x + 0.5) / width, (y + 0.5) / height)`, and clamp-to-edge
/// addressing for reads outside the image. The host owns allocation; a draw
/// only ever reads.
#[derive(Clone, Debug)]
pub struct SourceImage {
    width: u32,
    height: u32,
    texels: Vec<Vec4>,
}

impl SourceImage {
    /// Build a source image from row-major texels.
    pub fn new(width: u32, height: u32, texels: Vec<Vec4>) -> RelumeResult<Self> {
        if width == 0 || height == 0 {
            return Err(RelumeError::validation("SourceImage dimensions must be > 0"));
        }
        let expected = width as usize * height as usize;
        if texels.len() != expected {
            return Err(RelumeError::validation(format!(
                "SourceImage texel count {} does not match {}x{}",
                texels.len(),
                width,
                height
            )));
        }
        Ok(Self {
            width,
            height,
            texels,
        })
    }

    /// A `width` x `height` image where every texel is `color`. Handy for
    /// hosts that need a solid clear target and for tests.
    pub fn filled(width: u32, height: u32, color: Vec4) -> RelumeResult<Self> {
        Self::new(
            width,
            height,
            vec![color; width as usize * height as usize],
        )
    }

    /// Convert an 8-bit RGBA image to f32 texels in [0,1]. No gamma transform
    /// is applied; the pipeline filters in whatever space the host rendered.
    pub fn from_rgba8(img: &image::RgbaImage) -> Self {
        let texels = img
            .pixels()
            .map(|p| {
                Vec4::new(
                    f32::from(p[0]),
                    f32::from(p[1]),
                    f32::from(p[2]),
                    f32::from(p[3]),
                ) / 255.0
            })
            .collect();
        Self {
            width: img.width(),
            height: img.height(),
            texels,
        }
    }

    /// Width in texels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in texels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel dimensions as a float vector, the `input_size` a Lanczos draw
    /// over the full texture expects.
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    /// Fetch a texel by integer coordinate with clamp-to-edge addressing.
    pub fn texel(&self, x: i32, y: i32) -> Vec4 {
        let x = x.clamp(0, self.width as i32 - 1) as usize;
        let y = y.clamp(0, self.height as i32 - 1) as usize;
        self.texels[y * self.width as usize + x]
    }

    /// Bilinear sample at a normalized UV.
    pub fn sample_bilinear(&self, uv: Vec2) -> Vec4 {
        let x = uv.x * self.width as f32 - 0.5;
        let y = uv.y * self.height as f32 - 0.5;
        let x0 = x.floor();
        let y0 = y.floor();
        let fx = x - x0;
        let fy = y - y0;
        let (x0, y0) = (x0 as i32, y0 as i32);

        let top = self
            .texel(x0, y0)
            .lerp(self.texel(x0 + 1, y0), fx);
        let bottom = self
            .texel(x0, y0 + 1)
            .lerp(self.texel(x0 + 1, y0 + 1), fx);
        top.lerp(bottom, fy)
    }

    /// Grouped fetch: the four same-channel texels of the 2x2 footprint
    /// surrounding `uv`, in fixed corner order
    /// (top-left, top-right, bottom-left, bottom-right).
    ///
    /// This is the CPU stand-in for a hardware gather; the Lanczos stage uses
    /// it to fill its 6x6 tap grid with 9 fetches per channel-triple instead
    /// of 36 scalar reads.
    pub fn gather(&self, uv: Vec2, channel: Channel) -> Vec4 {
        let x0 = (uv.x * self.width as f32 - 0.5).floor() as i32;
        let y0 = (uv.y * self.height as f32 - 0.5).floor() as i32;
        Vec4::new(
            channel.extract(self.texel(x0, y0)),
            channel.extract(self.texel(x0 + 1, y0)),
            channel.extract(self.texel(x0, y0 + 1)),
            channel.extract(self.texel(x0 + 1, y0 + 1)),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/texture/source.rs"]
mod tests;
