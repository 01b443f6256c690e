//! The full rendering pipeline: parse, lay out, composite.

use std::collections::HashMap;

use image::RgbaImage;
use thiserror::Error;

use crate::catalog::TileSet;
use crate::compositor::composite;
use crate::layout::layout;
use crate::models::{Hand, TileStyle};
use crate::parser::{parse_command_tokens, parse_hand_description, GrammarError};

/// Failure anywhere in the rendering pipeline.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Grammar(#[from] GrammarError),
    #[error("failed to decode tile artwork: {0}")]
    Artwork(#[from] image::ImageError),
}

/// Render an already-parsed hand.
///
/// Loads the hand's style catalog for the call; when rendering several
/// hands, prefer [`render_command`], which shares catalogs across hands.
pub fn render(hand: &Hand) -> Result<RgbaImage, RenderError> {
    let tiles = TileSet::load(hand.style)?;
    Ok(composite(hand, &layout(hand), &tiles))
}

/// Parse one hand description and render it.
///
/// # Examples
///
/// ```
/// use tilepix::models::TileStyle;
/// use tilepix::render::render_hand;
///
/// let image = render_hand("1m2m3m", TileStyle::Regular).unwrap();
/// assert_eq!(image.dimensions(), (900, 400));
/// ```
pub fn render_hand(description: &str, style: TileStyle) -> Result<RgbaImage, RenderError> {
    let hand = parse_hand_description(description, style)?;
    render(&hand)
}

/// Process a whole command's tokens and render every hand in token order.
///
/// The first failing token aborts the command; no images are returned for
/// a partially-valid command.
pub fn render_command<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<RgbaImage>, RenderError> {
    let hands = parse_command_tokens(tokens)?;

    let mut catalogs: HashMap<TileStyle, TileSet> = HashMap::new();
    let mut images = Vec::with_capacity(hands.len());
    for hand in &hands {
        if !catalogs.contains_key(&hand.style) {
            catalogs.insert(hand.style, TileSet::load(hand.style)?);
        }
        images.push(composite(hand, &layout(hand), &catalogs[&hand.style]));
    }
    Ok(images)
}
