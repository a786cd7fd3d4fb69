use glam::{Vec2, Vec4, Vec4Swizzles};

/// One vertex of the fullscreen region triangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VertexOutput {
    /// Clip-space position (x right, y up).
    pub clip: Vec4,
    /// Source UV carried to the per-pixel stage.
    pub uv: Vec2,
}

/// Region vertex stage: map vertex id {0,1,2} to an oversized fullscreen
/// triangle whose rasterized footprint covers the whole target exactly once.
///
/// The UV is scaled by the active-region fraction, so the visible UV span is
/// `[0, uv_scale.x] x [0, uv_scale.y]`, and the vertical axis is flipped so
/// the top of the screen (clip y = +1) reads the top of the image (v = 0).
pub fn region_vertex(index: u32, uv_scale: Vec2) -> VertexOutput {
    // id 0 -> (0,0), id 1 -> (2,0), id 2 -> (0,2)
    let corner = Vec2::new(((index << 1) & 2) as f32, (index & 2) as f32);
    VertexOutput {
        clip: Vec4::new(corner.x * 2.0 - 1.0, 1.0 - corner.y * 2.0, 0.0, 1.0),
        uv: corner * uv_scale,
    }
}

/// The full three-vertex triangle one draw rasterizes.
pub fn fullscreen_triangle(uv_scale: Vec2) -> [VertexOutput; 3] {
    [
        region_vertex(0, uv_scale),
        region_vertex(1, uv_scale),
        region_vertex(2, uv_scale),
    ]
}

/// Interpolate the triangle's UV at a normalized device coordinate.
///
/// CPU stand-in for hardware attribute interpolation: plain barycentric
/// evaluation over the triangle's clip-space xy.
pub fn interpolate_uv(tri: &[VertexOutput; 3], ndc: Vec2) -> Vec2 {
    let a = tri[0].clip.xy();
    let b = tri[1].clip.xy();
    let c = tri[2].clip.xy();

    let det = (b - a).perp_dot(c - a);
    let wb = (ndc - a).perp_dot(c - a) / det;
    let wc = (b - a).perp_dot(ndc - a) / det;
    let wa = 1.0 - wb - wc;

    tri[0].uv * wa + tri[1].uv * wb + tri[2].uv * wc
}
