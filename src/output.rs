//! Output assembly for a whole run
//!
//! Text output concatenates one rendered block per orientation. JSON output
//! carries the same bitmaps as structured data for build scripts.

use serde::Serialize;

use crate::models::{Player, SpriteGrid};
use crate::orientation::Orientation;
use crate::renderer::{player_bitmap, render_block, RenderOptions};

/// One player's bitmap in JSON output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerExport {
    pub label: String,
    /// Row bytes, first pixel in the most significant bit
    pub bytes: Vec<u8>,
    /// The same bytes as `%`-prefixed binary literals
    pub literals: Vec<String>,
}

/// One orientation's bitmaps in JSON output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockExport {
    pub orientation: &'static str,
    /// Human-readable summary of the flip
    pub description: &'static str,
    pub player_a: PlayerExport,
    pub player_b: PlayerExport,
}

/// Top-level JSON document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpriteExport {
    pub rows: usize,
    pub blocks: Vec<BlockExport>,
}

fn export_player(
    grid: &SpriteGrid,
    orientation: Orientation,
    player: Player,
    options: &RenderOptions,
) -> PlayerExport {
    let bytes = player_bitmap(grid, player, orientation.traversal());
    let literals = bytes.iter().map(|b| format!("%{:08b}", b)).collect();
    PlayerExport { label: options.label(player).to_string(), bytes, literals }
}

/// Build the structured export for every requested orientation.
pub fn build_export(
    grid: &SpriteGrid,
    orientations: &[Orientation],
    options: &RenderOptions,
) -> SpriteExport {
    let blocks = orientations
        .iter()
        .map(|&orientation| BlockExport {
            orientation: orientation.name(),
            description: orientation.describe(),
            player_a: export_player(grid, orientation, Player::A, options),
            player_b: export_player(grid, orientation, Player::B, options),
        })
        .collect();
    SpriteExport { rows: grid.len(), blocks }
}

/// Render every requested orientation as assembler text, in order.
pub fn render_text(grid: &SpriteGrid, orientations: &[Orientation], options: &RenderOptions) -> String {
    orientations
        .iter()
        .map(|orientation| render_block(grid, orientation.traversal(), options))
        .collect()
}

/// Render every requested orientation as a pretty-printed JSON document.
pub fn render_json(
    grid: &SpriteGrid,
    orientations: &[Orientation],
    options: &RenderOptions,
) -> Result<String, serde_json::Error> {
    let mut json = serde_json::to_string_pretty(&build_export(grid, orientations, options))?;
    json.push('\n');
    Ok(json)
}
