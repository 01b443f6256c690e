//! Hand description grammar and command token processing.
//!
//! A hand description is scanned left to right with one character of
//! lookahead for the trailing `*` rotation modifier:
//!
//! - `0`-`9` opens a tile whose suite is not known yet; a later suite letter
//!   (`m`, `p`, `s`, `z`) resolves every pending digit at once
//! - `?` is a face-down tile
//! - `_` closes the current group
//! - `E S W N w g r` emit honor tiles directly (East, South, West, North,
//!   white, green, red)
//!
//! Command tokens are processed left to right; `-w`/`-b` flags update the
//! style applied to subsequent hand tokens, and the first failing token
//! aborts the whole command.

use thiserror::Error;

use crate::models::{Group, Hand, Suite, Tile, TilePosition, TileStyle};

/// Hands with this many tiles or more are rejected.
pub const MAX_TILES: usize = 50;

/// A rejected command token, carrying the offending token text and the
/// reason it was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid token '{token}': {kind}")]
pub struct GrammarError {
    pub token: String,
    pub kind: GrammarErrorKind,
}

impl GrammarError {
    fn new(token: &str, kind: GrammarErrorKind) -> Self {
        Self { token: token.to_string(), kind }
    }
}

/// Why a token was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarErrorKind {
    #[error("malformed style flag")]
    MalformedStyleFlag,
    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),
    #[error("value {value} is out of range for {suite} tiles")]
    ValueOutOfRange { suite: Suite, value: u8 },
    #[error("tile has no suite letter")]
    UnresolvedSuite,
    #[error("hand contains no tiles")]
    EmptyHand,
    #[error("hand has too many tiles ({0})")]
    TooManyTiles(usize),
}

fn honor_value(c: char) -> Option<u8> {
    match c {
        'E' => Some(1),
        'S' => Some(2),
        'W' => Some(3),
        'N' => Some(4),
        'w' => Some(5),
        'g' => Some(6),
        'r' => Some(7),
        _ => None,
    }
}

fn suite_letter(c: char) -> Option<Suite> {
    match c {
        'm' => Some(Suite::Manzu),
        'p' => Some(Suite::Pinzu),
        's' => Some(Suite::Souzu),
        'z' => Some(Suite::Honor),
        _ => None,
    }
}

/// Parse one hand description into a [`Hand`] with the given style.
///
/// The returned hand is guaranteed to contain between 1 and 49 tiles, and no
/// tile with suite [`Suite::Unknown`].
///
/// # Examples
///
/// ```
/// use tilepix::models::{Suite, TilePosition, TileStyle};
/// use tilepix::parser::parse_hand_description;
///
/// let hand = parse_hand_description("123m_E?", TileStyle::Regular).unwrap();
/// assert_eq!(hand.groups.len(), 2);
/// assert_eq!(hand.tile_count(), 5);
/// assert_eq!(hand.groups[0][0].suite, Suite::Manzu);
///
/// // A digit with a trailing '*' is laid on its side.
/// let hand = parse_hand_description("5*s", TileStyle::Regular).unwrap();
/// assert_eq!(hand.groups[0][0].position, TilePosition::Rotated);
/// ```
pub fn parse_hand_description(
    description: &str,
    style: TileStyle,
) -> Result<Hand, GrammarError> {
    // Positions (group index, tile index) of tiles still waiting for their
    // suite letter. Resolution patches them in place and clears the list.
    let mut pending: Vec<(usize, usize)> = Vec::new();
    // The current group is always the last element.
    let mut groups: Vec<Group> = vec![Vec::new()];

    let mut chars = description.chars().peekable();
    while let Some(c) = chars.next() {
        if let Some(value) = c.to_digit(10) {
            let position = rotation_lookahead(&mut chars);
            let group = groups.len() - 1;
            groups[group].push(Tile::new(Suite::Unknown, value as u8, position));
            pending.push((group, groups[group].len() - 1));
        } else if c == '?' {
            let position = rotation_lookahead(&mut chars);
            let group = groups.len() - 1;
            groups[group].push(Tile::new(Suite::Any, 0, position));
        } else if c == '_' {
            groups.push(Vec::new());
        } else if let Some(suite) = suite_letter(c) {
            for (group, index) in pending.drain(..) {
                let tile = &mut groups[group][index];
                if !suite.accepts_value(tile.value) {
                    return Err(GrammarError::new(
                        description,
                        GrammarErrorKind::ValueOutOfRange { suite, value: tile.value },
                    ));
                }
                tile.suite = suite;
            }
        } else if let Some(value) = honor_value(c) {
            let position = rotation_lookahead(&mut chars);
            let group = groups.len() - 1;
            groups[group].push(Tile::new(Suite::Honor, value, position));
        } else {
            return Err(GrammarError::new(
                description,
                GrammarErrorKind::UnexpectedCharacter(c),
            ));
        }
    }

    if !pending.is_empty() {
        return Err(GrammarError::new(description, GrammarErrorKind::UnresolvedSuite));
    }
    // A trailing separator leaves an empty current group behind; only groups
    // closed by '_' may be empty.
    if groups.last().is_some_and(|g| g.is_empty()) {
        groups.pop();
    }

    let hand = Hand::new(style, groups);
    let count = hand.tile_count();
    if count == 0 {
        return Err(GrammarError::new(description, GrammarErrorKind::EmptyHand));
    }
    if count >= MAX_TILES {
        return Err(GrammarError::new(description, GrammarErrorKind::TooManyTiles(count)));
    }
    Ok(hand)
}

/// Consume a trailing `*` if present. The modifier belongs to the tile just
/// scanned and must not be rescanned as its own character.
fn rotation_lookahead(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> TilePosition {
    if chars.next_if_eq(&'*').is_some() {
        TilePosition::Rotated
    } else {
        TilePosition::Normal
    }
}

/// Process whitespace-split command tokens into hands.
///
/// Style flags (`-w` regular, `-b` black) update the style used for every
/// hand token after them. Tokens are processed strictly left to right and
/// the first failure aborts the whole command with no partial result.
///
/// # Examples
///
/// ```
/// use tilepix::models::TileStyle;
/// use tilepix::parser::parse_command_tokens;
///
/// let hands = parse_command_tokens(&["123m", "-b", "E?"]).unwrap();
/// assert_eq!(hands.len(), 2);
/// assert_eq!(hands[0].style, TileStyle::Regular);
/// assert_eq!(hands[1].style, TileStyle::Black);
/// ```
pub fn parse_command_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Hand>, GrammarError> {
    let mut style = TileStyle::default();
    let mut hands = Vec::new();

    for token in tokens {
        let token = token.as_ref();
        if token.starts_with('-') {
            style = parse_style_flag(token)?;
        } else {
            hands.push(parse_hand_description(token, style)?);
        }
    }

    Ok(hands)
}

fn parse_style_flag(token: &str) -> Result<TileStyle, GrammarError> {
    let mut chars = token.chars();
    let style = match (chars.next(), chars.next(), chars.next()) {
        (Some('-'), Some('w'), None) => TileStyle::Regular,
        (Some('-'), Some('b'), None) => TileStyle::Black,
        _ => {
            return Err(GrammarError::new(token, GrammarErrorKind::MalformedStyleFlag));
        }
    };
    Ok(style)
}
