use std::collections::HashSet;

use shipments::US_STATES;

use super::*;

#[test]
fn every_known_state_has_exactly_one_tile() {
    for name in US_STATES {
        let count = STATE_TILES.iter().filter(|t| t.name == name).count();
        assert_eq!(count, 1, "{name}");
    }
    assert_eq!(STATE_TILES.len(), US_STATES.len());
}

#[test]
fn tiles_do_not_overlap_and_fit_the_grid() {
    let mut cells = HashSet::new();
    for t in STATE_TILES {
        assert!(t.col < GRID_COLS && t.row < GRID_ROWS, "{} out of grid", t.name);
        assert!(cells.insert((t.col, t.row)), "{} overlaps", t.name);
    }
}

#[test]
fn abbreviations_are_unique_two_letter_codes() {
    let abbrs: HashSet<&str> = STATE_TILES.iter().map(|t| t.abbr).collect();
    assert_eq!(abbrs.len(), STATE_TILES.len());
    assert!(abbrs.iter().all(|a| a.len() == 2));
}

#[test]
fn tile_positions_scale_by_tile_and_gap() {
    let texas = tile_for("Texas").unwrap();
    assert_eq!((texas.x(), texas.y()), (3 * 43, 7 * 43));
    assert_eq!(grid_extent(), (11 * 43 - 3, 9 * 43 - 3));
    assert!(tile_for("Atlantis").is_none());
}
