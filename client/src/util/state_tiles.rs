//! Tile-grid geometry for the state map.
//!
//! Each state or territory is one square on a 11x9 grid, placed roughly where
//! it sits geographically. Territories share the bottom row.

#[cfg(test)]
#[path = "state_tiles_test.rs"]
mod state_tiles_test;

pub const GRID_COLS: u32 = 11;
pub const GRID_ROWS: u32 = 9;
pub const TILE_SIZE: u32 = 40;
pub const TILE_GAP: u32 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StateTile {
    pub name: &'static str,
    pub abbr: &'static str,
    pub col: u32,
    pub row: u32,
}

impl StateTile {
    pub fn x(self) -> u32 {
        self.col * (TILE_SIZE + TILE_GAP)
    }

    pub fn y(self) -> u32 {
        self.row * (TILE_SIZE + TILE_GAP)
    }
}

const fn tile(name: &'static str, abbr: &'static str, col: u32, row: u32) -> StateTile {
    StateTile { name, abbr, col, row }
}

pub const STATE_TILES: [StateTile; 56] = [
    tile("Alaska", "AK", 0, 0),
    tile("Maine", "ME", 10, 0),
    tile("Vermont", "VT", 9, 1),
    tile("New Hampshire", "NH", 10, 1),
    tile("Washington", "WA", 0, 2),
    tile("Idaho", "ID", 1, 2),
    tile("Montana", "MT", 2, 2),
    tile("North Dakota", "ND", 3, 2),
    tile("Minnesota", "MN", 4, 2),
    tile("Illinois", "IL", 5, 2),
    tile("Wisconsin", "WI", 6, 2),
    tile("Michigan", "MI", 7, 2),
    tile("New York", "NY", 8, 2),
    tile("Rhode Island", "RI", 9, 2),
    tile("Massachusetts", "MA", 10, 2),
    tile("Oregon", "OR", 0, 3),
    tile("Nevada", "NV", 1, 3),
    tile("Wyoming", "WY", 2, 3),
    tile("South Dakota", "SD", 3, 3),
    tile("Iowa", "IA", 4, 3),
    tile("Indiana", "IN", 5, 3),
    tile("Ohio", "OH", 6, 3),
    tile("Pennsylvania", "PA", 7, 3),
    tile("New Jersey", "NJ", 8, 3),
    tile("Connecticut", "CT", 9, 3),
    tile("California", "CA", 0, 4),
    tile("Utah", "UT", 1, 4),
    tile("Colorado", "CO", 2, 4),
    tile("Nebraska", "NE", 3, 4),
    tile("Missouri", "MO", 4, 4),
    tile("Kentucky", "KY", 5, 4),
    tile("West Virginia", "WV", 6, 4),
    tile("Virginia", "VA", 7, 4),
    tile("Maryland", "MD", 8, 4),
    tile("Delaware", "DE", 9, 4),
    tile("Arizona", "AZ", 1, 5),
    tile("New Mexico", "NM", 2, 5),
    tile("Kansas", "KS", 3, 5),
    tile("Arkansas", "AR", 4, 5),
    tile("Tennessee", "TN", 5, 5),
    tile("North Carolina", "NC", 6, 5),
    tile("South Carolina", "SC", 7, 5),
    tile("District of Columbia", "DC", 8, 5),
    tile("Oklahoma", "OK", 3, 6),
    tile("Louisiana", "LA", 4, 6),
    tile("Mississippi", "MS", 5, 6),
    tile("Alabama", "AL", 6, 6),
    tile("Georgia", "GA", 7, 6),
    tile("Hawaii", "HI", 0, 7),
    tile("Texas", "TX", 3, 7),
    tile("Florida", "FL", 8, 7),
    tile("American Samoa", "AS", 0, 8),
    tile("Guam", "GU", 1, 8),
    tile("Northern Mariana Islands", "MP", 2, 8),
    tile("Puerto Rico", "PR", 8, 8),
    tile("U.S. Virgin Islands", "VI", 9, 8),
];

/// Pixel size of the whole grid, for the SVG `viewBox`.
pub fn grid_extent() -> (u32, u32) {
    (GRID_COLS * (TILE_SIZE + TILE_GAP) - TILE_GAP, GRID_ROWS * (TILE_SIZE + TILE_GAP) - TILE_GAP)
}

pub fn tile_for(name: &str) -> Option<StateTile> {
    STATE_TILES.iter().copied().find(|t| t.name == name)
}
