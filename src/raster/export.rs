//! Frame sampling and still/animated raster export.

use image::{ExtendedColorType, ImageEncoder, codecs::png::PngEncoder};

use crate::{
    document::{
        paint::IdScope,
        synth::{RenderMode, SignatureDocument},
    },
    foundation::{
        core::Fps,
        error::{AutographError, AutographResult},
    },
    layout::canvas::Canvas,
    raster::{
        sink::{FrameSink, GifSink, SinkConfig},
        svg_raster::{RgbaFrame, parse_svg, rasterize_svg},
    },
};

/// Longest output side in pixels.
pub const MAX_RASTER_SIDE: u32 = 800;

/// Options for raster export.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RasterOptions {
    /// Animation sampling rate.
    pub fps: Fps,
    /// Output width; defaults to the canvas width.
    pub width: Option<u32>,
    /// Output height; defaults to the canvas height.
    pub height: Option<u32>,
    /// Cap on the longest output side.
    pub max_side: u32,
    /// Seconds the fully drawn signature is held at the end of an animation.
    pub hold_secs: f64,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            fps: Fps::default(),
            width: None,
            height: None,
            max_side: MAX_RASTER_SIDE,
            hold_secs: 1.0,
        }
    }
}

impl RasterOptions {
    /// Output size for `canvas`, scaled down so the longest side fits `max_side`.
    pub fn output_size(&self, canvas: &Canvas) -> AutographResult<(u32, u32)> {
        let w = self.width.map_or(canvas.width.round(), f64::from);
        let h = self.height.map_or(canvas.height.round(), f64::from);
        if !(w.is_finite() && h.is_finite() && w >= 1.0 && h >= 1.0) {
            return Err(AutographError::validation(format!(
                "invalid raster size {w}x{h}"
            )));
        }
        let longest = w.max(h);
        let cap = f64::from(self.max_side.max(1));
        let (w, h) = if longest > cap {
            let scale = cap / longest;
            (w * scale, h * scale)
        } else {
            (w, h)
        };
        Ok(((w.round() as u32).max(1), (h.round() as u32).max(1)))
    }
}

fn render_frame(
    doc: &SignatureDocument<'_>,
    mode: RenderMode,
    ids: &IdScope,
    (width, height): (u32, u32),
) -> AutographResult<RgbaFrame> {
    let svg = doc.synthesize(mode, ids)?;
    let tree = parse_svg(&svg)?;
    rasterize_svg(&tree, width, height)
}

/// Sample the animation at `opts.fps` and stream the frames into `sink`.
///
/// Frame `i` shows the state at `i / fps` for `ceil(total * fps)` frames, followed
/// by one frame of the finished signature. That last frame is held for
/// `opts.hold_secs`, or longer if the trailing fill fades have not settled by the
/// time it appears. Any failure aborts the export before `end` is called.
/// Returns the number of frames pushed.
#[tracing::instrument(skip_all, fields(fps = opts.fps.as_f64()))]
pub fn render_frames(
    doc: &SignatureDocument<'_>,
    ids: &IdScope,
    opts: &RasterOptions,
    sink: &mut dyn FrameSink,
) -> AutographResult<u64> {
    let size = opts.output_size(&doc.canvas())?;
    let fps = opts.fps;
    let count = fps.secs_to_frames_ceil(doc.timeline.total);
    let frame_secs = fps.frame_duration_secs();

    sink.begin(SinkConfig {
        width: size.0,
        height: size.1,
        fps,
    })?;
    for i in 0..count {
        let t = fps.frame_time_secs(i);
        let frame = render_frame(doc, RenderMode::At(t), ids, size)?;
        sink.push_frame(i, &frame, frame_secs)?;
    }

    let hold = if opts.hold_secs.is_finite() && opts.hold_secs > 0.0 {
        opts.hold_secs
    } else {
        frame_secs
    };
    let unsettled = doc.timeline.settled_at() - fps.frame_time_secs(count);
    let hold = hold.max(unsettled);
    let last = render_frame(doc, RenderMode::Static, ids, size)?;
    sink.push_frame(count, &last, hold)?;
    sink.end()?;

    tracing::debug!(frames = count + 1, width = size.0, height = size.1, "exported frames");
    Ok(count + 1)
}

/// Encode the animation as a looping GIF.
pub fn export_gif(
    doc: &SignatureDocument<'_>,
    ids: &IdScope,
    opts: &RasterOptions,
) -> AutographResult<Vec<u8>> {
    let mut bytes = Vec::new();
    let mut sink = GifSink::new(&mut bytes);
    render_frames(doc, ids, opts, &mut sink)?;
    drop(sink);
    Ok(bytes)
}

/// Encode the finished signature as a PNG.
#[tracing::instrument(skip_all)]
pub fn export_png(
    doc: &SignatureDocument<'_>,
    ids: &IdScope,
    opts: &RasterOptions,
) -> AutographResult<Vec<u8>> {
    let size = opts.output_size(&doc.canvas())?;
    let frame = render_frame(doc, RenderMode::Static, ids, size)?;
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes)
        .write_image(
            &frame.data,
            frame.width,
            frame.height,
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| AutographError::encode(format!("encode png: {e}")))?;
    Ok(bytes)
}

#[cfg(test)]
#[path = "../../tests/unit/raster/export.rs"]
mod tests;
