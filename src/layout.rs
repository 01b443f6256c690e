//! Canvas measurement and per-tile placement.
//!
//! Layout runs in two passes over the same half-slot walk: one to measure
//! group widths (and thus the canvas), one to assign per-tile offsets. A
//! tile's vertical anchor depends only on its own position, but its
//! horizontal offset depends on how every tile before it packed into
//! half-slots, so measuring must complete before placing.

use crate::models::{Hand, Tile, TilePosition};

/// Upright tile footprint, pixels.
pub const TILE_WIDTH: u32 = 300;
pub const TILE_HEIGHT: u32 = 400;
/// Horizontal gap between groups.
pub const GROUP_SKIP: u32 = 100;

/// Top-left target offset for one tile's slot on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub x: u32,
    pub y: u32,
}

/// Canvas dimensions plus per-tile placements in draw order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub width: u32,
    pub height: u32,
    pub placements: Vec<Placement>,
}

/// Walk one group's tiles, tracking the lower/upper half-slot flags, and
/// report each tile's horizontal offset within the group to `visit`.
/// Returns the group's total width.
///
/// A sideways tile is TILE_HEIGHT wide; two of them may share one half-slot
/// column (one lower, one stacked above it), so the cursor only advances
/// past a half-slot when it is already occupied or an upright tile closes it.
fn walk_group<F: FnMut(&Tile, u32)>(group: &[Tile], mut visit: F) -> u32 {
    let mut cursor = 0;
    let mut lower_pending = false;
    let mut upper_pending = false;

    for tile in group {
        match tile.position {
            TilePosition::Normal => {
                if lower_pending || upper_pending {
                    cursor += TILE_HEIGHT;
                    lower_pending = false;
                    upper_pending = false;
                }
                visit(tile, cursor);
                cursor += TILE_WIDTH;
            }
            TilePosition::Rotated => {
                if lower_pending {
                    cursor += TILE_HEIGHT;
                    lower_pending = false;
                }
                visit(tile, cursor);
                lower_pending = true;
            }
            TilePosition::RotatedShifted => {
                if upper_pending {
                    cursor += TILE_HEIGHT;
                    upper_pending = false;
                }
                visit(tile, cursor);
                upper_pending = true;
            }
        }
    }

    if lower_pending || upper_pending {
        cursor += TILE_HEIGHT;
    }
    cursor
}

fn group_width(group: &[Tile]) -> u32 {
    walk_group(group, |_, _| {})
}

fn vertical_offset(position: TilePosition, height: u32) -> u32 {
    match position {
        TilePosition::Normal => height - TILE_HEIGHT,
        TilePosition::Rotated => height - TILE_WIDTH,
        TilePosition::RotatedShifted => 0,
    }
}

/// Compute canvas dimensions and per-tile placements for a hand.
///
/// # Examples
///
/// ```
/// use tilepix::layout::{layout, TILE_WIDTH, TILE_HEIGHT};
/// use tilepix::models::TileStyle;
/// use tilepix::parser::parse_hand_description;
///
/// let hand = parse_hand_description("1m2m3m", TileStyle::Regular).unwrap();
/// let layout = layout(&hand);
/// assert_eq!(layout.width, 3 * TILE_WIDTH);
/// assert_eq!(layout.height, TILE_HEIGHT);
/// ```
pub fn layout(hand: &Hand) -> Layout {
    let height = if hand.has_shifted_tiles() {
        2 * TILE_WIDTH
    } else {
        TILE_HEIGHT
    };

    let widths: Vec<u32> = hand.groups.iter().map(|g| group_width(g)).collect();
    let width = GROUP_SKIP * hand.groups.len().saturating_sub(1) as u32
        + widths.iter().sum::<u32>();

    let mut placements = Vec::with_capacity(hand.tile_count());
    let mut group_start = 0;
    for (group, group_width) in hand.groups.iter().zip(widths) {
        walk_group(group, |tile, offset| {
            placements.push(Placement {
                x: group_start + offset,
                y: vertical_offset(tile.position, height),
            });
        });
        group_start += group_width + GROUP_SKIP;
    }

    Layout { width, height, placements }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Suite, TileStyle};
    use crate::parser::parse_hand_description;

    fn hand_of(description: &str) -> Hand {
        parse_hand_description(description, TileStyle::Regular).unwrap()
    }

    fn upright(n: usize) -> Vec<Tile> {
        vec![Tile::new(Suite::Souzu, 1, TilePosition::Normal); n]
    }

    #[test]
    fn test_width_upright_group() {
        let layout = layout(&hand_of("1m2m3m"));
        assert_eq!(layout.width, 3 * TILE_WIDTH);
        assert_eq!(layout.height, TILE_HEIGHT);
    }

    #[test]
    fn test_width_group_gap() {
        let layout = layout(&hand_of("1m_2p"));
        assert_eq!(layout.width, 2 * TILE_WIDTH + GROUP_SKIP);
    }

    #[test]
    fn test_empty_group_still_adds_gap() {
        let layout = layout(&hand_of("1m__2p"));
        assert_eq!(layout.width, 2 * TILE_WIDTH + 2 * GROUP_SKIP);
    }

    #[test]
    fn test_rotated_tile_width() {
        let layout = layout(&hand_of("1*s"));
        assert_eq!(layout.width, TILE_HEIGHT);
        assert_eq!(layout.height, TILE_HEIGHT);
    }

    #[test]
    fn test_two_rotated_tiles_occupy_two_columns() {
        // Without an upper tile to pair with, each sideways tile closes the
        // previous lower half-slot and opens its own column.
        let layout = layout(&hand_of("1*2*s"));
        assert_eq!(layout.width, 2 * TILE_HEIGHT);
        assert_eq!(layout.placements[0].x, 0);
        assert_eq!(layout.placements[1].x, TILE_HEIGHT);
    }

    #[test]
    fn test_normal_after_rotated_closes_slot() {
        let layout = layout(&hand_of("1*s2s"));
        assert_eq!(layout.width, TILE_HEIGHT + TILE_WIDTH);
        assert_eq!(layout.placements[1].x, TILE_HEIGHT);
    }

    #[test]
    fn test_vertical_anchors_without_stacking() {
        let layout = layout(&hand_of("1s2*s"));
        // Upright tiles sit on the canvas bottom; sideways tiles leave
        // TILE_WIDTH of room below the top edge.
        assert_eq!(layout.placements[0].y, 0);
        assert_eq!(layout.placements[1].y, TILE_HEIGHT - TILE_WIDTH);
    }

    #[test]
    fn test_stacked_pair_shares_column() {
        let group = vec![
            Tile::new(Suite::Souzu, 1, TilePosition::Rotated),
            Tile::new(Suite::Souzu, 1, TilePosition::RotatedShifted),
        ];
        let hand = Hand::new(TileStyle::Regular, vec![group]);
        let layout = layout(&hand);

        assert_eq!(layout.width, TILE_HEIGHT);
        assert_eq!(layout.height, 2 * TILE_WIDTH);
        // Both tiles share x; the lower one bottom-aligns, the upper one
        // top-aligns.
        assert_eq!(layout.placements[0], Placement { x: 0, y: 2 * TILE_WIDTH - TILE_WIDTH });
        assert_eq!(layout.placements[1], Placement { x: 0, y: 0 });
    }

    #[test]
    fn test_shifted_tile_doubles_height_for_whole_hand() {
        let groups = vec![
            upright(2),
            vec![Tile::new(Suite::Souzu, 1, TilePosition::RotatedShifted)],
        ];
        let hand = Hand::new(TileStyle::Regular, groups);
        let layout = layout(&hand);

        assert_eq!(layout.height, 2 * TILE_WIDTH);
        // Upright tiles bottom-align against the taller canvas.
        assert_eq!(layout.placements[0].y, 2 * TILE_WIDTH - TILE_HEIGHT);
    }

    #[test]
    fn test_two_shifted_tiles_advance_upper_slot() {
        let group = vec![
            Tile::new(Suite::Souzu, 1, TilePosition::RotatedShifted),
            Tile::new(Suite::Souzu, 2, TilePosition::RotatedShifted),
        ];
        let hand = Hand::new(TileStyle::Regular, vec![group]);
        let layout = layout(&hand);

        assert_eq!(layout.width, 2 * TILE_HEIGHT);
        assert_eq!(layout.placements[1].x, TILE_HEIGHT);
    }

    #[test]
    fn test_placement_order_matches_draw_order() {
        let layout = layout(&hand_of("12m_3p"));
        assert_eq!(layout.placements.len(), 3);
        assert!(layout.placements[0].x < layout.placements[1].x);
        assert!(layout.placements[1].x < layout.placements[2].x);
    }

    #[test]
    fn test_open_meld_shape() {
        // Classic pon shape: upright, sideways, upright.
        let layout = layout(&hand_of("1s2*s3s"));
        assert_eq!(layout.width, TILE_WIDTH + TILE_HEIGHT + TILE_WIDTH);
        assert_eq!(layout.placements[2].x, TILE_WIDTH + TILE_HEIGHT);
    }
}
