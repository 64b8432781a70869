//! Station site layout and CSV loader.
//!
//! # CSV format
//!
//! One row per dock site.  Row order matters: the model assigns station IDs
//! in file order, so the first row becomes the lowest station ID.
//!
//! ```csv
//! x,y
//! 2,2
//! 2,7
//! 5,5
//! 7,2
//! 7,7
//! ```
//!
//! Coordinates are raw cell indices.  The model validates them against its
//! configured grid dimensions at build time rather than wrapping them, so a
//! typo'd site fails loudly instead of landing on an aliased cell.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use bikeshare_core::GridPos;

use crate::LayoutError;

/// The default five-dock downtown layout, sized for the default 10x10 grid.
pub const DEFAULT_SITES: [GridPos; 5] = [
    GridPos { x: 2, y: 2 },
    GridPos { x: 2, y: 7 },
    GridPos { x: 5, y: 5 },
    GridPos { x: 7, y: 2 },
    GridPos { x: 7, y: 7 },
];

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct SiteRecord {
    x: u32,
    y: u32,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load dock sites from a CSV file.
pub fn load_sites_csv(path: &Path) -> Result<Vec<GridPos>, LayoutError> {
    let file = std::fs::File::open(path).map_err(LayoutError::Io)?;
    load_sites_reader(file)
}

/// Like [`load_sites_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for layouts embedded in
/// a host binary.
pub fn load_sites_reader<R: Read>(reader: R) -> Result<Vec<GridPos>, LayoutError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut sites = Vec::new();

    for result in csv_reader.deserialize::<SiteRecord>() {
        let row = result.map_err(|e| LayoutError::Parse(e.to_string()))?;
        sites.push(GridPos::new(row.x, row.y));
    }

    Ok(sites)
}
