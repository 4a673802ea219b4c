use crate::foundation::error::{AutographError, AutographResult};

// Avoid pathological allocations from hostile size parameters.
const MAX_DIM: u32 = 16_384;

/// Straight-alpha RGBA8 pixels, tightly packed, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbaFrame {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// `width * height * 4` bytes.
    pub data: Vec<u8>,
}

impl RgbaFrame {
    /// Alpha of the pixel at `(x, y)`, `None` when out of bounds.
    pub fn alpha_at(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4 + 3;
        self.data.get(i).copied()
    }
}

/// Parse a synthesized document.
pub fn parse_svg(svg: &str) -> AutographResult<usvg::Tree> {
    let opts = usvg::Options::default();
    usvg::Tree::from_str(svg, &opts)
        .map_err(|e| AutographError::raster(format!("parse svg tree: {e}")))
}

/// Rasterize `tree` into a `width x height` frame.
///
/// The tree is scaled uniformly to fit and centered; uncovered pixels stay transparent.
pub fn rasterize_svg(tree: &usvg::Tree, width: u32, height: u32) -> AutographResult<RgbaFrame> {
    if width == 0 || height == 0 || width > MAX_DIM || height > MAX_DIM {
        return Err(AutographError::raster(format!(
            "raster size out of range: {width}x{height} (max {MAX_DIM}x{MAX_DIM})"
        )));
    }
    let size = tree.size();
    if !(size.width() > 0.0 && size.height() > 0.0) {
        return Err(AutographError::raster("svg has invalid width/height"));
    }

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| AutographError::raster("failed to allocate svg pixmap"))?;

    let scale = (width as f32 / size.width()).min(height as f32 / size.height());
    let tx = (width as f32 - size.width() * scale) / 2.0;
    let ty = (height as f32 - size.height() * scale) / 2.0;
    let xform = resvg::tiny_skia::Transform::from_row(scale, 0.0, 0.0, scale, tx, ty);

    resvg::render(tree, xform, &mut pixmap.as_mut());

    let data = pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();
    Ok(RgbaFrame {
        width,
        height,
        data,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/raster/svg_raster.rs"]
mod tests;
