//! pmsprite - Library for converting ASCII-art player sprites to assembler data
//!
//! This library provides functionality to:
//! - Parse text pictures of two-player sprites into a fixed-width grid
//! - Render the grid as annotated binary literal declarations
//! - Mirror the output horizontally and/or vertically without copying data

pub mod cli;
pub mod config;
pub mod models;
pub mod orientation;
pub mod output;
pub mod parser;
pub mod renderer;
pub mod tokenizer;
