//! Compositing a laid-out hand onto one RGBA canvas.

use image::RgbaImage;

use crate::catalog::TileSet;
use crate::layout::Layout;
use crate::models::{Hand, Suite};
use crate::transform::{draw_transformed, TileTransform, SYMBOL_SCALE};

/// Draw every tile of `hand` onto a fresh canvas sized by `layout`.
///
/// Draw order is strictly left to right, group by group. Each face-up tile
/// gets its frame first, drawn with the rotation inverted so the frame sits
/// upright relative to the slot, then its face art with the actual rotation.
/// Face-down tiles (`Any`) draw only the tile back, at full scale.
pub fn composite(hand: &Hand, layout: &Layout, tiles: &TileSet) -> RgbaImage {
    let mut canvas = RgbaImage::new(layout.width, layout.height);

    for (tile, placement) in hand.tiles().zip(&layout.placements) {
        if tile.suite != Suite::Any {
            let frame = TileTransform::new(
                tile.position.inverted(),
                1.0,
                placement.x,
                placement.y,
            );
            draw_transformed(&mut canvas, tiles.frame(), &frame);
        }

        let scale = if tile.suite == Suite::Any { 1.0 } else { SYMBOL_SCALE };
        let face = TileTransform::new(tile.position, scale, placement.x, placement.y);
        draw_transformed(&mut canvas, tiles.face(tile), &face);
    }

    canvas
}
