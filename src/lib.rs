//! Tilepix - Library for compiling riichi hand notation and rendering tile images
//!
//! This library provides functionality to:
//! - Parse compact hand descriptions (e.g. `123m456p_E?`) into structured hands
//! - Lay out tile groups, including sideways and stacked tiles
//! - Composite per-tile artwork into a single RGBA canvas
//! - Encode the finished canvas as PNG

pub mod catalog;
pub mod cli;
pub mod compositor;
pub mod layout;
pub mod models;
pub mod output;
pub mod parser;
pub mod render;
pub mod transform;
