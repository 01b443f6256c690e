//! Artwork catalog: tile-to-artwork resolution and the embedded tile sets.
//!
//! Each style ships a full catalog of 600x800 PNGs compiled into the binary.
//! `TileSet::load` decodes one style's catalog into memory once; the
//! compositor borrows images from it for every draw.

use std::collections::HashMap;

use image::RgbaImage;

use crate::models::{Suite, Tile, TileStyle};

/// Resolve a tile to its artwork basename within a style catalog.
///
/// `Any` maps to the tile back; honor values 1-7 map to the named wind and
/// dragon tiles; value 0 on a numbered suite selects the red-five variant.
///
/// # Examples
///
/// ```
/// use tilepix::catalog::artwork_basename;
/// use tilepix::models::{Suite, Tile, TilePosition};
///
/// let tile = Tile::new(Suite::Pinzu, 0, TilePosition::Normal);
/// assert_eq!(artwork_basename(&tile), "Pin5-Dora");
///
/// let tile = Tile::new(Suite::Honor, 1, TilePosition::Normal);
/// assert_eq!(artwork_basename(&tile), "Ton");
/// ```
pub fn artwork_basename(tile: &Tile) -> String {
    match tile.suite {
        Suite::Any => "Back".to_string(),
        Suite::Honor => honor_basename(tile.value).to_string(),
        Suite::Manzu | Suite::Pinzu | Suite::Souzu => {
            let prefix = suite_prefix(tile.suite);
            if tile.value == 0 {
                format!("{}5-Dora", prefix)
            } else {
                format!("{}{}", prefix, tile.value)
            }
        }
        // The parser never lets an unresolved tile out of a hand.
        Suite::Unknown => unreachable!("unresolved tile suite reached artwork resolution"),
    }
}

fn suite_prefix(suite: Suite) -> &'static str {
    match suite {
        Suite::Manzu => "Man",
        Suite::Pinzu => "Pin",
        Suite::Souzu => "Sou",
        _ => unreachable!("suite {} has no numbered artwork", suite),
    }
}

fn honor_basename(value: u8) -> &'static str {
    match value {
        1 => "Ton",
        2 => "Nan",
        3 => "Shaa",
        4 => "Pei",
        5 => "Haku",
        6 => "Hatsu",
        7 => "Chun",
        _ => unreachable!("honor value {} escaped parser validation", value),
    }
}

macro_rules! tile_art {
    ($dir:literal, $name:literal) => {
        (
            $name,
            include_bytes!(concat!("../assets/tiles/", $dir, "/", $name, ".png")),
        )
    };
}

macro_rules! style_catalog {
    ($dir:literal) => {
        &[
            tile_art!($dir, "Front"),
            tile_art!($dir, "Back"),
            tile_art!($dir, "Man1"),
            tile_art!($dir, "Man2"),
            tile_art!($dir, "Man3"),
            tile_art!($dir, "Man4"),
            tile_art!($dir, "Man5"),
            tile_art!($dir, "Man5-Dora"),
            tile_art!($dir, "Man6"),
            tile_art!($dir, "Man7"),
            tile_art!($dir, "Man8"),
            tile_art!($dir, "Man9"),
            tile_art!($dir, "Pin1"),
            tile_art!($dir, "Pin2"),
            tile_art!($dir, "Pin3"),
            tile_art!($dir, "Pin4"),
            tile_art!($dir, "Pin5"),
            tile_art!($dir, "Pin5-Dora"),
            tile_art!($dir, "Pin6"),
            tile_art!($dir, "Pin7"),
            tile_art!($dir, "Pin8"),
            tile_art!($dir, "Pin9"),
            tile_art!($dir, "Sou1"),
            tile_art!($dir, "Sou2"),
            tile_art!($dir, "Sou3"),
            tile_art!($dir, "Sou4"),
            tile_art!($dir, "Sou5"),
            tile_art!($dir, "Sou5-Dora"),
            tile_art!($dir, "Sou6"),
            tile_art!($dir, "Sou7"),
            tile_art!($dir, "Sou8"),
            tile_art!($dir, "Sou9"),
            tile_art!($dir, "Ton"),
            tile_art!($dir, "Nan"),
            tile_art!($dir, "Shaa"),
            tile_art!($dir, "Pei"),
            tile_art!($dir, "Haku"),
            tile_art!($dir, "Hatsu"),
            tile_art!($dir, "Chun"),
        ]
    };
}

static REGULAR_ART: &[(&str, &[u8])] = style_catalog!("regular");
static BLACK_ART: &[(&str, &[u8])] = style_catalog!("black");

fn catalog_table(style: TileStyle) -> &'static [(&'static str, &'static [u8])] {
    match style {
        TileStyle::Regular => REGULAR_ART,
        TileStyle::Black => BLACK_ART,
    }
}

/// One style's artwork catalog, decoded and ready to draw.
pub struct TileSet {
    images: HashMap<&'static str, RgbaImage>,
}

impl TileSet {
    /// Decode the embedded catalog for `style`.
    pub fn load(style: TileStyle) -> Result<Self, image::ImageError> {
        let table = catalog_table(style);
        let mut images = HashMap::with_capacity(table.len());
        for (name, bytes) in table {
            images.insert(*name, image::load_from_memory(bytes)?.to_rgba8());
        }
        Ok(Self { images })
    }

    /// The frame drawn behind every face-up tile.
    pub fn frame(&self) -> &RgbaImage {
        self.image("Front")
    }

    /// The artwork for a tile's face (or back, for `Any`).
    pub fn face(&self, tile: &Tile) -> &RgbaImage {
        self.image(&artwork_basename(tile))
    }

    fn image(&self, name: &str) -> &RgbaImage {
        match self.images.get(name) {
            Some(image) => image,
            None => unreachable!("artwork '{}' missing from embedded catalog", name),
        }
    }
}
