use alloc::collections::{BTreeSet, VecDeque};
use alloc::vec;
use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// No move made yet; mines are not placed.
    NotInitialized,
    InProgress,
    Defeat,
    Victory,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Defeat | Self::Victory)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::NotInitialized
    }
}

/// Rules engine for a single game.
///
/// Mines are placed lazily on the first [`reveal`](Board::reveal), anchored on the selected
/// cell, so the opening move always lands on a cell with no adjacent mines. After placement the
/// grid is never written again; only the revealed mask and the safe-cell counter move.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    config: GameConfig,
    seed: u64,
    grid: Array2<Cell>,
    revealed: Array2<bool>,
    remaining_safe: CellCount,
    phase: GameStatus,
    triggered_mine: Option<Coord2>,
}

impl Board {
    pub fn new(config: GameConfig) -> Self {
        Self::with_seed(config, rand::random())
    }

    /// Board whose mine placement is fully determined by `seed` and the first move.
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        let size = config.size().to_nd_index();
        Self {
            config,
            seed,
            grid: Array2::default(size),
            revealed: Array2::default(size),
            remaining_safe: config.safe_cells(),
            phase: GameStatus::NotInitialized,
            triggered_mine: None,
        }
    }

    /// Board with mines already in place, skipping first-move placement.
    pub fn from_layout(layout: MineLayout) -> Self {
        let (rows, columns) = layout.size();
        let config = GameConfig::new_unchecked(rows, columns, layout.mine_count());
        Self {
            config,
            seed: 0,
            grid: layout.hint_grid(),
            revealed: Array2::default(layout.size().to_nd_index()),
            remaining_safe: layout.safe_cell_count(),
            phase: GameStatus::InProgress,
            triggered_mine: None,
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size()
    }

    pub fn remaining_safe_count(&self) -> CellCount {
        self.remaining_safe
    }

    pub fn status(&self) -> GameStatus {
        self.compute_status()
    }

    pub fn is_finished(&self) -> bool {
        self.status().is_finished()
    }

    /// Mine that ended the game, if it was lost.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn value_at(&self, coords: Coord2) -> Result<i8> {
        self.cell_at(coords).map(Cell::value)
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(self.grid[coords.to_nd_index()])
    }

    pub fn is_revealed(&self, coords: Coord2) -> Result<bool> {
        let coords = self.validate_coords(coords)?;
        Ok(self.revealed[coords.to_nd_index()])
    }

    /// Positions currently holding a mine; empty until the first move.
    pub fn mine_positions(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.grid
            .indexed_iter()
            .filter(|&(_, cell)| cell.is_mine())
            .map(|((i, j), _)| (i as Coord, j as Coord))
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.validate_coords(coords)?;
        self.check_not_finished()?;

        if self.phase == GameStatus::NotInitialized {
            self.place_mines(coords);
        }

        if self.revealed[coords.to_nd_index()] {
            return Ok(RevealOutcome::NoChange);
        }

        let cell = self.grid[coords.to_nd_index()];
        if cell.is_mine() {
            self.triggered_mine = Some(coords);
            self.phase = GameStatus::Defeat;
            return Ok(RevealOutcome::Exploded);
        }

        self.mark_revealed(coords);
        if !cell.is_empty() {
            return Ok(RevealOutcome::Revealed(vec![coords]));
        }

        Ok(RevealOutcome::Revealed(self.flood_fill(coords)))
    }

    fn place_mines(&mut self, anchor: Coord2) {
        let layout = RejectionSampler::new(self.seed, anchor).generate(self.config);
        self.grid = layout.hint_grid();
        self.phase = GameStatus::InProgress;
    }

    /// Breadth-first reveal outward from an empty `origin`, which must already be marked.
    ///
    /// Only empty cells expand; numbered cells on the border are revealed but stop the search.
    fn flood_fill(&mut self, origin: Coord2) -> Vec<Coord2> {
        let size = self.size();
        let mut unlocked = vec![origin];
        let mut visited = BTreeSet::from([origin]);
        let mut to_visit = VecDeque::from([origin]);

        while let Some(current) = to_visit.pop_front() {
            if !self.grid[current.to_nd_index()].is_empty() {
                continue;
            }

            for next in Neighbors::around(current, size) {
                if self.revealed[next.to_nd_index()] || !visited.insert(next) {
                    continue;
                }
                self.mark_revealed(next);
                unlocked.push(next);
                to_visit.push_back(next);
            }
        }

        log::debug!("flood fill from {:?} revealed {} cells", origin, unlocked.len());
        unlocked
    }

    fn mark_revealed(&mut self, coords: Coord2) {
        self.revealed[coords.to_nd_index()] = true;
        self.remaining_safe = self.remaining_safe.saturating_sub(1);
    }

    fn compute_status(&self) -> GameStatus {
        match self.phase {
            GameStatus::InProgress if self.remaining_safe == 0 => GameStatus::Victory,
            phase => phase,
        }
    }

    fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if in_bounds(coords, self.size()) {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.is_finished() {
            log::warn!("move rejected, game already ended as {:?}", self.status());
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
