use glam::{Vec2, Vec4};

use crate::texture::source::SourceImage;

/// Channel remap applied by the debug visualize stage.
///
/// The host binds internal pipeline textures (depth, motion vectors, reactive
/// masks) to the same RGBA sampler slot; the mode says how to read them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VizMode {
    /// Show the texture as-is (alpha forced opaque).
    #[default]
    Rgb,
    /// Red channel holds a depth-like scalar; replicate it to grayscale.
    DepthGray,
    /// Red/green hold a 2-D motion vector; show magnitudes as brightness.
    MotionRg,
    /// Single-channel mask; same grayscale treatment as depth.
    MaskGray,
}

impl VizMode {
    /// Decode the host's integer mode code. Unknown codes deterministically
    /// fall back to [`VizMode::Rgb`]; a bad debug view is not a fault.
    pub fn from_code(code: u32) -> Self {
        match code {
            1 => VizMode::DepthGray,
            2 => VizMode::MotionRg,
            3 => VizMode::MaskGray,
            _ => VizMode::Rgb,
        }
    }

    /// The integer code the host uses for this mode.
    pub fn code(self) -> u32 {
        match self {
            VizMode::Rgb => 0,
            VizMode::DepthGray => 1,
            VizMode::MotionRg => 2,
            VizMode::MaskGray => 3,
        }
    }
}

/// Debug visualize stage: sample the source and remap channels per `mode`.
pub fn visualize(src: &SourceImage, uv: Vec2, mode: VizMode) -> Vec4 {
    let s = src.sample_bilinear(uv);
    match mode {
        VizMode::Rgb => Vec4::new(s.x, s.y, s.z, 1.0),
        VizMode::DepthGray | VizMode::MaskGray => Vec4::new(s.x, s.x, s.x, 1.0),
        VizMode::MotionRg => Vec4::new(s.x.abs(), s.y.abs(), 0.0, 1.0),
    }
}
