//! Core hand model: suites, tile positions, tiles, styles, and hands.

use serde::{Deserialize, Serialize};

/// Tile family.
///
/// `Unknown` is a transient state used only while parsing, before a suite
/// letter has been seen. A [`Hand`] handed to the renderer never contains it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suite {
    Manzu,
    Pinzu,
    Souzu,
    Honor,
    /// Generic face-down tile (rendered as the tile back)
    Any,
    /// Parse-time placeholder, resolved by a trailing suite letter
    Unknown,
}

impl Suite {
    /// Whether `value` is legal for this suite.
    ///
    /// Numbered suites accept 0-9 (0 encodes the red-five variant), honors
    /// accept 1-7. `Any` ignores its value entirely.
    pub fn accepts_value(self, value: u8) -> bool {
        match self {
            Suite::Manzu | Suite::Pinzu | Suite::Souzu => value <= 9,
            Suite::Honor => value >= 1 && value <= 7,
            Suite::Any => true,
            Suite::Unknown => false,
        }
    }
}

impl std::fmt::Display for Suite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Suite::Manzu => "manzu",
            Suite::Pinzu => "pinzu",
            Suite::Souzu => "souzu",
            Suite::Honor => "honor",
            Suite::Any => "any",
            Suite::Unknown => "unknown",
        };
        write!(f, "{}", name)
    }
}

/// Tile orientation within its group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TilePosition {
    /// Upright tile
    #[default]
    Normal,
    /// Turned 90 degrees, occupying the lower half-slot
    Rotated,
    /// Turned 90 degrees, stacked in the upper half-slot above a lower one
    RotatedShifted,
}

impl TilePosition {
    /// The position with the rotation direction inverted.
    ///
    /// Used when drawing the tile frame, which sits upright relative to the
    /// slot while the face art carries the actual rotation.
    pub fn inverted(self) -> TilePosition {
        match self {
            TilePosition::Normal => TilePosition::Normal,
            TilePosition::Rotated => TilePosition::RotatedShifted,
            TilePosition::RotatedShifted => TilePosition::Rotated,
        }
    }
}

/// A single tile in a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub suite: Suite,
    pub value: u8,
    pub position: TilePosition,
}

impl Tile {
    pub fn new(suite: Suite, value: u8, position: TilePosition) -> Self {
        Self { suite, value, position }
    }
}

/// Artwork catalog variant used when rendering a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileStyle {
    #[default]
    Regular,
    Black,
}

impl TileStyle {
    /// Directory name of this style's artwork catalog.
    pub fn catalog_dir(self) -> &'static str {
        match self {
            TileStyle::Regular => "regular",
            TileStyle::Black => "black",
        }
    }
}

/// An ordered cluster of tiles separated from its neighbors by a fixed gap.
/// Grouping is purely visual and carries no game meaning.
pub type Group = Vec<Tile>;

/// A parsed hand: an artwork style plus ordered tile groups.
///
/// Built once by the parser, consumed by layout and compositing, then
/// discarded; it is never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    pub style: TileStyle,
    pub groups: Vec<Group>,
}

impl Hand {
    pub fn new(style: TileStyle, groups: Vec<Group>) -> Self {
        Self { style, groups }
    }

    /// Total number of tiles across all groups.
    pub fn tile_count(&self) -> usize {
        self.groups.iter().map(|g| g.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.tile_count() == 0
    }

    /// Iterate tiles in draw order: group by group, left to right.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.groups.iter().flatten()
    }

    /// Whether any tile occupies an upper half-slot, which doubles the
    /// canvas height.
    pub fn has_shifted_tiles(&self) -> bool {
        self.tiles().any(|t| t.position == TilePosition::RotatedShifted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_value_numbered_suites() {
        for suite in [Suite::Manzu, Suite::Pinzu, Suite::Souzu] {
            assert!(suite.accepts_value(0), "{} should accept red five", suite);
            assert!(suite.accepts_value(9));
            assert!(!suite.accepts_value(10));
        }
    }

    #[test]
    fn test_accepts_value_honor() {
        assert!(!Suite::Honor.accepts_value(0));
        assert!(Suite::Honor.accepts_value(1));
        assert!(Suite::Honor.accepts_value(7));
        assert!(!Suite::Honor.accepts_value(8));
    }

    #[test]
    fn test_accepts_value_any_and_unknown() {
        assert!(Suite::Any.accepts_value(200));
        assert!(!Suite::Unknown.accepts_value(1));
    }

    #[test]
    fn test_position_inverted() {
        assert_eq!(TilePosition::Normal.inverted(), TilePosition::Normal);
        assert_eq!(TilePosition::Rotated.inverted(), TilePosition::RotatedShifted);
        assert_eq!(TilePosition::RotatedShifted.inverted(), TilePosition::Rotated);
    }

    #[test]
    fn test_hand_tile_count() {
        let hand = Hand::new(
            TileStyle::Regular,
            vec![
                vec![
                    Tile::new(Suite::Manzu, 1, TilePosition::Normal),
                    Tile::new(Suite::Manzu, 2, TilePosition::Normal),
                ],
                vec![],
                vec![Tile::new(Suite::Honor, 1, TilePosition::Rotated)],
            ],
        );
        assert_eq!(hand.tile_count(), 3);
        assert!(!hand.is_empty());
        assert_eq!(hand.tiles().count(), 3);
    }

    #[test]
    fn test_has_shifted_tiles() {
        let mut hand = Hand::new(
            TileStyle::Regular,
            vec![vec![Tile::new(Suite::Souzu, 3, TilePosition::Rotated)]],
        );
        assert!(!hand.has_shifted_tiles());
        hand.groups[0].push(Tile::new(Suite::Souzu, 3, TilePosition::RotatedShifted));
        assert!(hand.has_shifted_tiles());
    }

    #[test]
    fn test_style_catalog_dir() {
        assert_eq!(TileStyle::Regular.catalog_dir(), "regular");
        assert_eq!(TileStyle::Black.catalog_dir(), "black");
    }
}
