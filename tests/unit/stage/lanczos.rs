use super::*;

const PHASES: [f32; 7] = [0.0, 0.1, 0.25, 0.37, 0.5, 0.73, 0.95];

/// UV whose source-pixel position sits at integer cell `m` plus phase `f`
/// (i.e. `fract(pos + 0.5) == f`).
fn uv_for_phase(m: u32, f: f32, size: f32) -> f32 {
    (m as f32 - 0.5 + f) / size
}

/// 16x16 synthetic pattern with distinct, deterministic RGB per texel.
fn pattern_image() -> SourceImage {
    let mut texels = Vec::new();
    for y in 0..16u32 {
        for x in 0..16u32 {
            texels.push(Vec4::new(
                (x as f32 * 7.0 + y as f32 * 3.0) % 17.0 / 17.0,
                (x as f32 * 5.0 + y as f32 * 11.0) % 13.0 / 13.0,
                (x as f32 + y as f32 * 2.0) % 19.0 / 19.0,
                1.0,
            ));
        }
    }
    SourceImage::new(16, 16, texels).unwrap()
}

/// Reference 6x6 grid built from 36 independent single-texel fetches.
fn reference_grid(src: &SourceImage, kx: i32, ky: i32) -> [[Vec3; 6]; 6] {
    let mut grid = [[Vec3::ZERO; 6]; 6];
    for (row, cells) in grid.iter_mut().enumerate() {
        for (col, cell) in cells.iter_mut().enumerate() {
            let t = src.texel(kx - 3 + col as i32, ky - 3 + row as i32);
            *cell = t.truncate();
        }
    }
    grid
}

#[test]
fn normalized_weights_preserve_energy_at_every_phase() {
    for &fx in &PHASES {
        for &fy in &PHASES {
            let x = AxisTaps::at_phase(fx);
            let y = AxisTaps::at_phase(fy);
            let mut sum = 0.0;
            for row in 0..6 {
                for col in 0..6 {
                    sum += x.tap(col) * y.tap(row);
                }
            }
            assert!(
                (sum - 1.0).abs() < 1e-5,
                "phase ({fx},{fy}): weight sum {sum}"
            );
        }
    }
}

#[test]
fn weight3_mirrors_around_the_kernel_center() {
    for &x in &[0.0, 0.1, 0.3, 0.5, 0.62, 0.9, 1.0] {
        let fwd = weight3(x);
        let rev = weight3(1.0 - x);
        assert!((fwd.x - rev.z).abs() < 1e-6, "x={x}");
        assert!((fwd.y - rev.y).abs() < 1e-6, "x={x}");
        assert!((fwd.z - rev.x).abs() < 1e-6, "x={x}");
    }
}

#[test]
fn weights_stay_finite_at_phase_boundaries() {
    for &f in &[0.0, 1.0 - 1e-6, 0.5] {
        let taps = AxisTaps::at_phase(f);
        for i in 0..6 {
            assert!(taps.tap(i).is_finite(), "phase {f}, tap {i}");
        }
    }
}

#[test]
fn constant_image_resamples_to_itself() {
    let c = Vec4::new(0.25, 0.5, 0.75, 1.0);
    let src = SourceImage::filled(16, 16, c).unwrap();
    let size = src.size();
    for m in [2u32, 7, 13] {
        for &f in &PHASES {
            let uv = Vec2::new(uv_for_phase(m, f, 16.0), uv_for_phase(m, f, 16.0));
            let out = resample(&src, uv, size);
            assert!(
                (out.truncate() - c.truncate()).length() < 1e-4,
                "m={m} f={f}: {out:?}"
            );
            assert_eq!(out.w, 1.0);
        }
    }
}

#[test]
fn grouped_fetch_matches_single_texel_fetches() {
    let src = pattern_image();
    let size = src.size();
    for m in [3u32, 8, 12] {
        for &f in &PHASES {
            let uv = Vec2::new(uv_for_phase(m, f, 16.0), uv_for_phase(m, 0.3, 16.0));
            let pos = uv * size;
            let frac = (pos + 0.5) - (pos + 0.5).floor();
            let base = pos - (frac + 1.5);
            let grid = gather_grid(&src, base, size.recip());

            let k = (pos + 0.5).floor();
            let reference = reference_grid(&src, k.x as i32, k.y as i32);
            for row in 0..6 {
                for col in 0..6 {
                    assert_eq!(
                        grid[row][col], reference[row][col],
                        "m={m} f={f} cell ({row},{col})"
                    );
                }
            }
        }
    }
}

#[test]
fn output_is_the_exact_half_blend_of_raw_and_clamped() {
    // Hard step edge: the worst case for sinc overshoot.
    let dark = Vec4::new(0.1, 0.1, 0.1, 1.0);
    let bright = Vec4::new(0.9, 0.7, 0.5, 1.0);
    let mut texels = Vec::new();
    for _y in 0..16u32 {
        for x in 0..16u32 {
            texels.push(if x < 8 { dark } else { bright });
        }
    }
    let src = SourceImage::new(16, 16, texels).unwrap();
    let size = src.size();

    for &f in &PHASES {
        // Sample positions straddling the edge column.
        let uv = Vec2::new(uv_for_phase(8, f, 16.0), uv_for_phase(6, 0.41, 16.0));
        let pos = uv * size;
        let frac = (pos + 0.5) - (pos + 0.5).floor();
        let k = (pos + 0.5).floor();

        // Independent reference reduction over single-texel fetches.
        let x_taps = AxisTaps::at_phase(frac.x);
        let y_taps = AxisTaps::at_phase(frac.y);
        let grid = reference_grid(&src, k.x as i32, k.y as i32);
        let raw = reduce(&grid, &x_taps, &y_taps);

        let lo = grid[2][2].min(grid[2][3]).min(grid[3][2]).min(grid[3][3]);
        let hi = grid[2][2].max(grid[2][3]).max(grid[3][2]).max(grid[3][3]);
        let expected = raw.lerp(raw.clamp(lo, hi), 0.5);

        let out = resample(&src, uv, size).truncate();
        assert!((out - expected).length() < 1e-5, "f={f}: {out:?} vs {expected:?}");

        // Overshoot past the center envelope is at most half the raw overshoot.
        let out_over = (out - out.clamp(lo, hi)).length();
        let raw_over = (raw - raw.clamp(lo, hi)).length();
        assert!(out_over <= 0.5 * raw_over + 1e-6, "f={f}");
    }
}
