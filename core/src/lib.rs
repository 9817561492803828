#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod generator;
mod types;

/// Board dimensions and mine count, validated so that the first move can always be made safe.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameConfig")]
pub struct GameConfig {
    rows: Coord,
    columns: Coord,
    mines: CellCount,
}

#[derive(Deserialize)]
struct RawGameConfig {
    rows: Coord,
    columns: Coord,
    mines: CellCount,
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = GameError;

    fn try_from(raw: RawGameConfig) -> Result<Self> {
        Self::new(raw.rows, raw.columns, raw.mines)
    }
}

impl GameConfig {
    pub(crate) const fn new_unchecked(rows: Coord, columns: Coord, mines: CellCount) -> Self {
        Self {
            rows,
            columns,
            mines,
        }
    }

    pub fn new(rows: Coord, columns: Coord, mines: CellCount) -> Result<Self> {
        if rows == 0 || columns == 0 {
            return Err(ConfigIssue::EmptyBoard.into());
        }

        let max = Self::max_mines(rows, columns);
        if mines > max {
            return Err(ConfigIssue::TooManyMines {
                requested: mines,
                max,
            }
            .into());
        }

        Ok(Self::new_unchecked(rows, columns, mines))
    }

    /// Largest mine count for which every possible first move leaves room for all mines.
    ///
    /// The widest exclusion zone an anchor can produce is `min(3, rows) * min(3, columns)` cells.
    pub const fn max_mines(rows: Coord, columns: Coord) -> CellCount {
        let zone = mult(min_coord(rows, 3), min_coord(columns, 3));
        mult(rows, columns).saturating_sub(zone)
    }

    pub const fn rows(&self) -> Coord {
        self.rows
    }

    pub const fn columns(&self) -> Coord {
        self.columns
    }

    pub const fn size(&self) -> Coord2 {
        (self.rows, self.columns)
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.columns)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mines
    }
}

const fn min_coord(a: Coord, b: Coord) -> Coord {
    if a < b { a } else { b }
}

/// Final set of mine positions for one game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMineLayout")]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

#[derive(Deserialize)]
struct RawMineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl TryFrom<RawMineLayout> for MineLayout {
    type Error = GameError;

    fn try_from(raw: RawMineLayout) -> Result<Self> {
        let (rows, columns) = raw.mine_mask.dim();
        if rows == 0 || columns == 0 {
            return Err(ConfigIssue::EmptyBoard.into());
        }
        if rows > Coord::MAX.into() || columns > Coord::MAX.into() {
            return Err(ConfigIssue::OversizedBoard.into());
        }

        let layout = Self::from_mine_mask(raw.mine_mask);
        if layout.mine_count != raw.mine_count {
            return Err(ConfigIssue::MineCountMismatch {
                declared: raw.mine_count,
                actual: layout.mine_count,
            }
            .into());
        }
        Ok(layout)
    }
}

impl MineLayout {
    pub(crate) fn from_mine_mask(mine_mask: Array2<bool>) -> Self {
        let mine_count = mine_mask
            .iter()
            .filter(|&&is_mine| is_mine)
            .count()
            .try_into()
            .unwrap_or(CellCount::MAX);
        Self {
            mine_mask,
            mine_count,
        }
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            if !in_bounds(coords, size) {
                return Err(GameError::OutOfBounds);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Ok(Self::from_mine_mask(mine_mask))
    }

    pub fn size(&self) -> Coord2 {
        let (rows, columns) = self.mine_mask.dim();
        (rows as Coord, columns as Coord)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        mult(self.size().0, self.size().1).saturating_sub(self.mine_count)
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        Neighbors::around(coords, self.size())
            .filter(|&pos| self[pos])
            .count() as u8
    }

    pub fn mine_positions(&self) -> Vec<Coord2> {
        self.mine_mask
            .indexed_iter()
            .filter(|&(_, &is_mine)| is_mine)
            .map(|((i, j), _)| (i as Coord, j as Coord))
            .collect()
    }

    /// Cell values for the whole board, computed in a single pass over the final mine set.
    pub fn hint_grid(&self) -> Array2<Cell> {
        Array2::from_shape_fn(self.mine_mask.dim(), |(i, j)| {
            let pos = (i as Coord, j as Coord);
            if self[pos] {
                Cell::Mine
            } else {
                Cell::Safe(self.adjacent_mine_count(pos))
            }
        })
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}

/// Result of revealing one cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealOutcome {
    /// Newly revealed positions in reveal order, starting with the selected cell.
    Revealed(Vec<Coord2>),
    /// The cell was already revealed by an earlier move.
    NoChange,
    /// The selected cell held a mine; the game is lost.
    Exploded,
}

impl RevealOutcome {
    pub const fn has_update(&self) -> bool {
        !matches!(self, Self::NoChange)
    }

    pub fn revealed(&self) -> &[Coord2] {
        match self {
            Self::Revealed(cells) => cells,
            Self::NoChange | Self::Exploded => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn config_counts_cells() {
        let config = GameConfig::new(9, 9, 10).unwrap();
        assert_eq!(config.total_cells(), 81);
        assert_eq!(config.safe_cells(), 71);
    }

    #[test]
    fn config_rejects_empty_board() {
        assert_eq!(
            GameConfig::new(0, 5, 0),
            Err(GameError::InvalidConfiguration(ConfigIssue::EmptyBoard))
        );
    }

    #[test]
    fn config_rejects_center_anchor_that_cannot_fit() {
        // A 3x3 board has no cell outside the zone around its center.
        assert_eq!(
            GameConfig::new(3, 3, 1),
            Err(GameError::InvalidConfiguration(ConfigIssue::TooManyMines {
                requested: 1,
                max: 0
            }))
        );
        assert!(GameConfig::new(3, 3, 0).is_ok());
    }

    #[test]
    fn max_mines_shrinks_zone_on_narrow_boards() {
        assert_eq!(GameConfig::max_mines(1, 10), 7);
        assert_eq!(GameConfig::max_mines(2, 2), 0);
        assert_eq!(GameConfig::max_mines(16, 30), 471);
    }

    #[test]
    fn config_deserialize_validates() {
        let config: GameConfig =
            serde_json::from_str(r#"{"rows":9,"columns":9,"mines":10}"#).unwrap();
        assert_eq!(config, GameConfig::new(9, 9, 10).unwrap());

        let err = serde_json::from_str::<GameConfig>(r#"{"rows":3,"columns":3,"mines":1}"#);
        assert!(err.is_err());
    }

    #[test]
    fn layout_rejects_out_of_range_mine() {
        assert_eq!(
            MineLayout::from_mine_coords((2, 2), &[(2, 0)]),
            Err(GameError::OutOfBounds)
        );
    }

    #[test]
    fn layout_deserialize_recounts_mines() {
        let layout = MineLayout::from_mine_coords((2, 2), &[(0, 0)]).unwrap();
        let json = serde_json::to_value(&layout).unwrap();
        let restored: MineLayout = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(restored, layout);

        let mut forged = json;
        forged["mine_count"] = serde_json::json!(3);
        let err = serde_json::from_value::<MineLayout>(forged).unwrap_err();
        assert!(err.to_string().contains("declares 3 mines"), "{err}");
    }

    #[test]
    fn layout_deserialize_rejects_unrepresentable_sizes() {
        let mut json = serde_json::to_value(MineLayout::from_mine_coords((1, 1), &[]).unwrap())
            .unwrap();
        json["mine_mask"]["dim"] = serde_json::json!([1, 256]);
        json["mine_mask"]["data"] = serde_json::to_value(Vec::from([false; 256])).unwrap();
        assert!(serde_json::from_value::<MineLayout>(json.clone()).is_err());

        json["mine_mask"]["dim"] = serde_json::json!([0, 0]);
        json["mine_mask"]["data"] = serde_json::json!([]);
        json["mine_count"] = serde_json::json!(0);
        assert!(serde_json::from_value::<MineLayout>(json).is_err());
    }

    #[test]
    fn hint_grid_matches_adjacency() {
        let layout = MineLayout::from_mine_coords((3, 3), &[(0, 0), (2, 2)]).unwrap();
        let grid = layout.hint_grid();

        assert_eq!(grid[[0, 0]], Cell::Mine);
        assert_eq!(grid[[1, 1]], Cell::Safe(2));
        assert_eq!(grid[[0, 2]], Cell::Safe(0));
        assert_eq!(grid[[1, 0]], Cell::Safe(1));
        assert_eq!(layout.mine_positions(), [(0, 0), (2, 2)]);
    }
}
