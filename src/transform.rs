//! Affine tile transforms and transformed alpha-composited drawing.
//!
//! Source artwork is laid out at twice the tile footprint (600x800 for a
//! 300x400 slot), so every transform folds in an extra factor of one half on
//! top of the requested scale.

use image::{Rgba, RgbaImage};

use crate::layout::{TILE_HEIGHT, TILE_WIDTH};
use crate::models::TilePosition;

/// Scale factor for face artwork. Frames and tile backs draw at 1.0.
pub const SYMBOL_SCALE: f64 = 0.8;

/// An affine map from source artwork coordinates to canvas coordinates:
/// `x' = m00*x + m01*y + tx`, `y' = m10*x + m11*y + ty`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileTransform {
    m00: f64,
    m10: f64,
    m01: f64,
    m11: f64,
    tx: f64,
    ty: f64,
}

impl TileTransform {
    /// Build the transform placing one piece of artwork into the slot whose
    /// top-left corner is `(x, y)`.
    ///
    /// Scaling happens about the origin, which drags the artwork toward the
    /// top-left; the `shift` terms recenter it inside the slot.
    pub fn new(position: TilePosition, scale: f64, x: u32, y: u32) -> Self {
        let real_scale = scale / 2.0;
        let shift_h = TILE_HEIGHT as f64 * (1.0 - scale) / 2.0;
        let shift_w = TILE_WIDTH as f64 * (1.0 - scale) / 2.0;
        let x = x as f64;
        let y = y as f64;

        match position {
            TilePosition::Normal => Self {
                m00: real_scale,
                m10: 0.0,
                m01: 0.0,
                m11: real_scale,
                tx: x + shift_w,
                ty: y + shift_h,
            },
            TilePosition::Rotated => Self {
                m00: 0.0,
                m10: -real_scale,
                m01: real_scale,
                m11: 0.0,
                tx: x + shift_h,
                ty: y + TILE_WIDTH as f64 - shift_w,
            },
            TilePosition::RotatedShifted => Self {
                m00: 0.0,
                m10: real_scale,
                m01: real_scale,
                m11: 0.0,
                tx: x + shift_h,
                ty: y + shift_w,
            },
        }
    }

    fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.m00 * x + self.m01 * y + self.tx,
            self.m10 * x + self.m11 * y + self.ty,
        )
    }

    /// Map a canvas point back into source coordinates.
    fn apply_inverse(&self, x: f64, y: f64) -> (f64, f64) {
        let det = self.m00 * self.m11 - self.m01 * self.m10;
        let dx = x - self.tx;
        let dy = y - self.ty;
        (
            (self.m11 * dx - self.m01 * dy) / det,
            (self.m00 * dy - self.m10 * dx) / det,
        )
    }

    /// Axis-aligned canvas bounding box of the transformed source rectangle,
    /// clamped to the canvas.
    fn dest_bounds(&self, src_w: u32, src_h: u32, canvas: &RgbaImage) -> (u32, u32, u32, u32) {
        let w = src_w as f64;
        let h = src_h as f64;
        let corners = [
            self.apply(0.0, 0.0),
            self.apply(w, 0.0),
            self.apply(0.0, h),
            self.apply(w, h),
        ];
        let min_x = corners.iter().map(|c| c.0).fold(f64::INFINITY, f64::min);
        let min_y = corners.iter().map(|c| c.1).fold(f64::INFINITY, f64::min);
        let max_x = corners.iter().map(|c| c.0).fold(f64::NEG_INFINITY, f64::max);
        let max_y = corners.iter().map(|c| c.1).fold(f64::NEG_INFINITY, f64::max);

        let x0 = min_x.floor().max(0.0) as u32;
        let y0 = min_y.floor().max(0.0) as u32;
        let x1 = (max_x.ceil().max(0.0) as u32).min(canvas.width());
        let y1 = (max_y.ceil().max(0.0) as u32).min(canvas.height());
        (x0, y0, x1, y1)
    }
}

/// Draw `src` onto `canvas` through `transform`, alpha-compositing source
/// over destination.
///
/// Destination pixels are mapped back through the inverse transform and
/// sampled nearest-neighbor; the transforms used here are all axis-aligned
/// quarter turns, so nearest sampling is exact.
pub fn draw_transformed(canvas: &mut RgbaImage, src: &RgbaImage, transform: &TileTransform) {
    let (x0, y0, x1, y1) = transform.dest_bounds(src.width(), src.height(), canvas);

    for dy in y0..y1 {
        for dx in x0..x1 {
            let (sx, sy) = transform.apply_inverse(dx as f64 + 0.5, dy as f64 + 0.5);
            let sx = sx.floor();
            let sy = sy.floor();
            if sx < 0.0 || sy < 0.0 || sx >= src.width() as f64 || sy >= src.height() as f64 {
                continue;
            }
            let pixel = *src.get_pixel(sx as u32, sy as u32);
            if pixel[3] == 0 {
                continue;
            }
            let blended = blend_over(pixel, *canvas.get_pixel(dx, dy));
            canvas.put_pixel(dx, dy, blended);
        }
    }
}

/// Source-over alpha compositing of one pixel.
fn blend_over(src: Rgba<u8>, dst: Rgba<u8>) -> Rgba<u8> {
    let src_a = src[3] as f32 / 255.0;
    if src_a >= 1.0 {
        return src;
    }
    let dst_a = dst[3] as f32 / 255.0;
    let out_a = src_a + dst_a * (1.0 - src_a);
    if out_a == 0.0 {
        return Rgba([0, 0, 0, 0]);
    }

    let mut out = [0u8; 4];
    for c in 0..3 {
        let s = src[c] as f32 / 255.0;
        let d = dst[c] as f32 / 255.0;
        let blended = (s * src_a + d * dst_a * (1.0 - src_a)) / out_a;
        out[c] = (blended * 255.0).round() as u8;
    }
    out[3] = (out_a * 255.0).round() as u8;
    Rgba(out)
}
