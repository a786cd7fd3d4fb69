use glam::Vec4;

use crate::foundation::core::Canvas;

/// Destination image of one draw: row-major RGBA f32 pixels.
#[derive(Clone, Debug)]
pub struct FrameRgba {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Row-major pixel data, `width * height` entries.
    pub pixels: Vec<Vec4>,
}

impl FrameRgba {
    /// Allocate a zeroed frame for a canvas.
    pub fn new(canvas: Canvas) -> Self {
        Self {
            width: canvas.width,
            height: canvas.height,
            pixels: vec![Vec4::ZERO; canvas.pixel_count()],
        }
    }

    /// Quantize to an 8-bit RGBA image, clamping each channel to [0,1].
    pub fn to_rgba8(&self) -> image::RgbaImage {
        fn q(v: f32) -> u8 {
            (v.clamp(0.0, 1.0) * 255.0).round() as u8
        }

        let mut out = image::RgbaImage::new(self.width, self.height);
        for (i, px) in self.pixels.iter().enumerate() {
            let x = i as u32 % self.width;
            let y = i as u32 / self.width;
            out.put_pixel(x, y, image::Rgba([q(px.x), q(px.y), q(px.z), q(px.w)]));
        }
        out
    }
}
