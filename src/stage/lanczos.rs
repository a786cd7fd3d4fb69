use std::f32::consts::PI;

use glam::{Vec2, Vec3, Vec4};

use crate::foundation::core::Channel;
use crate::texture::source::SourceImage;

/// How far the filtered value is pulled toward its hard-clamped counterpart.
/// 0 keeps the raw (ringing-prone) result, 1 clamps fully to the center
/// envelope; 0.5 suppresses most overshoot while keeping the sharpening.
const ANTI_RINGING: f32 = 0.5;

/// Magnitude floor for the windowed-sinc argument. Keeps `1/s²` finite at the
/// kernel center and at zero-crossings.
const ARG_FLOOR: f32 = 1e-5;

/// Windowed sinc `sin(s)·sin(s/3)/s²` for a 2π-scaled argument.
/// The function is even, so flooring `|s|` loses nothing.
fn sinc3(s: f32) -> f32 {
    let s = s.abs().max(ARG_FLOOR);
    s.sin() * (s / 3.0).sin() / (s * s)
}

/// Un-normalized Lanczos-3 weights at three half-pixel-spaced positions
/// around `x` (`x - 1.5`, `x - 0.5`, `x + 0.5`, each in half-texel units).
fn weight3(x: f32) -> Vec3 {
    let tau = 2.0 * PI;
    Vec3::new(
        sinc3(tau * (x - 1.5)),
        sinc3(tau * (x - 0.5)),
        sinc3(tau * (x + 0.5)),
    )
}

/// The six 1-D weights of one axis, split into the even-column and odd-column
/// triples the grouped fetch layout produces, normalized to sum to 1 so the
/// filter preserves energy at every phase.
struct AxisTaps {
    even: Vec3,
    odd: Vec3,
}

impl AxisTaps {
    fn at_phase(f: f32) -> Self {
        let even = weight3(0.5 - 0.5 * f);
        let odd = weight3(1.0 - 0.5 * f);
        let sum = even.element_sum() + odd.element_sum();
        Self {
            even: even / sum,
            odd: odd / sum,
        }
    }

    /// Weight of tap index 0..=5 along this axis.
    fn tap(&self, i: usize) -> f32 {
        if i % 2 == 0 {
            self.even[i / 2]
        } else {
            self.odd[i / 2]
        }
    }
}

/// Fill the 6x6 RGB tap grid with 9 grouped fetches (3 block positions per
/// axis pair, one gather per color channel). `base` is the pixel-space origin
/// of the grid; each gather's 2x2 footprint lands on two adjacent rows and
/// columns in fixed corner order (TL, TR, BL, BR).
fn gather_grid(src: &SourceImage, base: Vec2, texel_uv: Vec2) -> [[Vec3; 6]; 6] {
    let mut grid = [[Vec3::ZERO; 6]; 6];
    for block_row in 0..3 {
        for block_col in 0..3 {
            let uv = (base + Vec2::new(2.0 * block_col as f32, 2.0 * block_row as f32)) * texel_uv;
            let r = src.gather(uv, Channel::Red);
            let g = src.gather(uv, Channel::Green);
            let b = src.gather(uv, Channel::Blue);

            let (row, col) = (2 * block_row, 2 * block_col);
            grid[row][col] = Vec3::new(r.x, g.x, b.x);
            grid[row][col + 1] = Vec3::new(r.y, g.y, b.y);
            grid[row + 1][col] = Vec3::new(r.z, g.z, b.z);
            grid[row + 1][col + 1] = Vec3::new(r.w, g.w, b.w);
        }
    }
    grid
}

/// Separable-style weighted reduction of the tap grid: every cell contributes
/// `w_x(col) · w_y(row)`, so the 36 final weights are the outer product of two
/// normalized 6-weight vectors.
fn reduce(grid: &[[Vec3; 6]; 6], x_taps: &AxisTaps, y_taps: &AxisTaps) -> Vec3 {
    let mut acc = Vec3::ZERO;
    for (row, cells) in grid.iter().enumerate() {
        let wy = y_taps.tap(row);
        for (col, cell) in cells.iter().enumerate() {
            acc += *cell * (x_taps.tap(col) * wy);
        }
    }
    acc
}

/// Lanczos resample stage: upscale one destination sample.
///
/// `uv` is the interpolated region UV in `[0, uv_scale]`; `input_size` is the
/// pixel dimensions of the source texture, which converts UV to source-pixel
/// space and back. Per sample:
///
/// 1. derive the sub-pixel phase of the destination relative to the nearest
///    source texel center,
/// 2. build normalized 6-tap Lanczos-3 weights per axis at that phase,
/// 3. gather the 6x6 neighborhood in 2x2 blocks,
/// 4. reduce, then blend the result halfway toward its clamp against the
///    min/max envelope of the four center taps (anti-ringing),
/// 5. force alpha to 1.
///
/// `pos` is never clamped against the image edge here: reads outside the
/// source resolve through the sampler's clamp-to-edge addressing.
pub fn resample(src: &SourceImage, uv: Vec2, input_size: Vec2) -> Vec4 {
    let texel_uv = input_size.recip();
    let pos = uv * input_size;
    let f = (pos + 0.5) - (pos + 0.5).floor();

    let x_taps = AxisTaps::at_phase(f.x);
    let y_taps = AxisTaps::at_phase(f.y);

    // Shift back so the 6x6 grid sits symmetrically around the sample.
    let base = pos - (f + 1.5);
    let grid = gather_grid(src, base, texel_uv);
    let raw = reduce(&grid, &x_taps, &y_taps);

    // Anti-ringing: the envelope of the four taps nearest the sample bounds
    // the plausible local signal; overshoot past it is sinc ringing.
    let lo = grid[2][2].min(grid[2][3]).min(grid[3][2]).min(grid[3][3]);
    let hi = grid[2][2].max(grid[2][3]).max(grid[3][2]).max(grid[3][3]);
    let rgb = raw.lerp(raw.clamp(lo, hi), ANTI_RINGING);

    rgb.extend(1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/stage/lanczos.rs"]
mod tests;
