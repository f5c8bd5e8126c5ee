//! Spreadsheet structure extraction.
//!
//! Turns the raw cell grid of a suspension workbook into the normalized
//! point/parameter schema. Parsing is defensive: malformed cells degrade to
//! defaults and unrecognized blocks are ignored, so the only failures come
//! from opening the workbook itself.

pub mod blocks;
pub mod columns;
pub mod error;
pub mod points;
pub mod setup;
pub mod wheels;
pub mod workbook;

pub use blocks::{find_blocks, Block, BlockKind};
pub use error::WorkbookError;
pub use points::parse_points_block;
pub use setup::parse_reference_distance;
pub use wheels::parse_wheels_block;
pub use workbook::{extract_sheet, extract_workbook, is_setup_sheet, Workbook};
