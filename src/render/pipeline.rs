use glam::{Vec2, Vec4};
use rayon::prelude::*;
use tracing::debug;

use crate::foundation::core::Canvas;
use crate::foundation::error::{RelumeError, RelumeResult};
use crate::render::params::{DispatchParams, Stage};
use crate::stage::{debug_view, lanczos, passthrough, vertex};
use crate::texture::frame::FrameRgba;
use crate::texture::source::SourceImage;

/// Thread configuration for a draw. `None` sizes the pool to the machine.
#[derive(Clone, Copy, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct RenderThreading {
    /// Worker thread count; must be >= 1 when set.
    pub threads: Option<usize>,
}

/// Execute one draw: rasterize the region triangle over `canvas`, running the
/// selected stage once per output pixel.
///
/// Every pixel is an independent pure function of `src` and `params`, so the
/// loop is a parallel map over output rows with no cross-pixel state.
pub fn draw(
    src: &SourceImage,
    params: &DispatchParams,
    canvas: Canvas,
    threading: &RenderThreading,
) -> RelumeResult<FrameRgba> {
    params.validate()?;
    if canvas.width == 0 || canvas.height == 0 {
        return Err(RelumeError::validation("draw canvas must be non-empty"));
    }

    let pool = build_thread_pool(threading.threads)?;
    let tri = vertex::fullscreen_triangle(params.uv_scale);
    let mut frame = FrameRgba::new(canvas);
    let width = canvas.width as usize;

    let start = std::time::Instant::now();
    pool.install(|| {
        frame
            .pixels
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, px) in row.iter_mut().enumerate() {
                    let ndc = canvas.pixel_center_ndc(x as u32, y as u32);
                    let uv = vertex::interpolate_uv(&tri, ndc);
                    *px = shade(src, uv, params);
                }
            });
    });

    debug!(
        stage = ?params.stage,
        canvas = format_args!("{}x{}", canvas.width, canvas.height),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "draw complete"
    );
    Ok(frame)
}

/// Run the selected stage for one pixel.
fn shade(src: &SourceImage, uv: Vec2, params: &DispatchParams) -> Vec4 {
    match params.stage {
        Stage::Passthrough => passthrough::blit(src, uv),
        Stage::DebugView { mode } => debug_view::visualize(src, uv, mode),
        Stage::LanczosResample => lanczos::resample(src, uv, params.input_size),
    }
}

fn build_thread_pool(threads: Option<usize>) -> RelumeResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(RelumeError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| RelumeError::dispatch(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
