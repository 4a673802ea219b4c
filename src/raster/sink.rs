use std::io::Write;

use image::{
    Delay, Frame, RgbaImage,
    codecs::gif::{GifEncoder, Repeat},
};

use crate::{
    foundation::{
        core::Fps,
        error::{AutographError, AutographResult},
    },
    raster::svg_raster::RgbaFrame,
};

/// Configuration provided to a [`FrameSink`] at the start of an export.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SinkConfig {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Sampling rate of the animation frames.
    pub fps: Fps,
}

/// Sink contract for consuming rendered frames in timeline order.
///
/// Ordering contract: `push_frame` is called with strictly increasing indices, and
/// frame `i + 1` is only rendered once frame `i` has been accepted.
pub trait FrameSink: Send {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> AutographResult<()>;
    /// Push one frame that stays on screen for `duration_secs`.
    fn push_frame(&mut self, idx: u64, frame: &RgbaFrame, duration_secs: f64)
    -> AutographResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> AutographResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(u64, RgbaFrame, f64)>,
    finished: bool,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the sink configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    /// Borrow the captured frames with their on-screen durations.
    pub fn frames(&self) -> &[(u64, RgbaFrame, f64)] {
        &self.frames
    }

    /// `true` once `end` was called.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> AutographResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.finished = false;
        Ok(())
    }

    fn push_frame(
        &mut self,
        idx: u64,
        frame: &RgbaFrame,
        duration_secs: f64,
    ) -> AutographResult<()> {
        self.frames.push((idx, frame.clone(), duration_secs));
        Ok(())
    }

    fn end(&mut self) -> AutographResult<()> {
        self.finished = true;
        Ok(())
    }
}

/// Quantizer speed handed to the GIF encoder (1 = best, 30 = fastest).
pub const GIF_SPEED: i32 = 10;

/// Animated GIF sink that loops forever and keeps transparency.
///
/// GIF delays are whole centiseconds. The rounding error of each frame is
/// carried into the next one so the total play time matches the requested
/// durations.
pub struct GifSink<W: Write + Send> {
    writer: Option<W>,
    encoder: Option<GifEncoder<W>>,
    cfg: Option<SinkConfig>,
    carry_ms: f64,
}

impl<W: Write + Send> std::fmt::Debug for GifSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GifSink")
            .field("cfg", &self.cfg)
            .field("started", &self.encoder.is_some())
            .finish()
    }
}

impl<W: Write + Send> GifSink<W> {
    /// Sink that writes the GIF stream into `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Some(writer),
            encoder: None,
            cfg: None,
            carry_ms: 0.0,
        }
    }
}

impl<W: Write + Send> FrameSink for GifSink<W> {
    fn begin(&mut self, cfg: SinkConfig) -> AutographResult<()> {
        let writer = self
            .writer
            .take()
            .ok_or_else(|| AutographError::encode("gif sink already started"))?;
        let mut encoder = GifEncoder::new_with_speed(writer, GIF_SPEED);
        encoder
            .set_repeat(Repeat::Infinite)
            .map_err(|e| AutographError::encode(format!("gif repeat: {e}")))?;
        self.encoder = Some(encoder);
        self.cfg = Some(cfg);
        self.carry_ms = 0.0;
        Ok(())
    }

    fn push_frame(
        &mut self,
        idx: u64,
        frame: &RgbaFrame,
        duration_secs: f64,
    ) -> AutographResult<()> {
        let cfg = self
            .cfg
            .ok_or_else(|| AutographError::encode("gif sink not started"))?;
        if frame.width != cfg.width || frame.height != cfg.height {
            return Err(AutographError::encode(format!(
                "frame {idx} is {}x{}, expected {}x{}",
                frame.width, frame.height, cfg.width, cfg.height
            )));
        }
        let encoder = self
            .encoder
            .as_mut()
            .ok_or_else(|| AutographError::encode("gif sink not started"))?;
        let image = RgbaImage::from_raw(frame.width, frame.height, frame.data.clone())
            .ok_or_else(|| AutographError::encode(format!("frame {idx} has a short buffer")))?;
        let wanted_ms = if duration_secs.is_finite() {
            duration_secs * 1000.0 + self.carry_ms
        } else {
            self.carry_ms
        };
        let centis = (wanted_ms / 10.0).round().clamp(1.0, f64::from(u16::MAX));
        self.carry_ms = wanted_ms - centis * 10.0;
        let ms = centis as u32 * 10;
        encoder
            .encode_frame(Frame::from_parts(
                image,
                0,
                0,
                Delay::from_numer_denom_ms(ms, 1),
            ))
            .map_err(|e| AutographError::encode(format!("encode gif frame {idx}: {e}")))
    }

    fn end(&mut self) -> AutographResult<()> {
        match self.encoder.take() {
            // Dropping the encoder writes the GIF trailer.
            Some(encoder) => {
                drop(encoder);
                Ok(())
            }
            None => Err(AutographError::encode("gif sink not started")),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/sink.rs"]
mod tests;
