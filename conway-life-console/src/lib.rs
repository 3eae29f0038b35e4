#![deny(clippy::all)]
#![forbid(unsafe_code)]

use log::debug;
use world_grid::{GridCell, Loc, Neighborhood, Random, StepOutcome, World, WorldGrid};

const LIVE_SEED_PROBABILITY: f64 = 0.5;

#[derive(Debug)]
pub struct ConwayWorld {
    grid: WorldGrid<ConwayGridCell>,
}

impl ConwayWorld {
    /// Builds a board with every cell independently alive or dead with
    /// equal probability.
    pub fn new(width: u32, height: u32, rand: Random) -> Self {
        let mut result = Self::new_empty(width, height);
        result.add_random_life(rand);
        result
    }

    pub fn new_empty(width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0);
        Self {
            grid: WorldGrid::new(width, height),
        }
    }

    fn add_random_life(&mut self, mut rand: Random) {
        for cell in self.grid.cells.cells_iter_mut() {
            cell.alive = rand.next_bool(LIVE_SEED_PROBABILITY);
        }
        debug!(
            "seeded {} of {} cells alive",
            self.population(),
            self.grid.num_cells()
        );
    }

    pub fn is_alive(&self, loc: Loc) -> bool {
        self.grid.cells[loc].alive
    }

    pub fn set_alive(&mut self, loc: Loc) {
        self.grid.cells[loc].alive = true;
    }

    /// Live cells in the current generation.
    pub fn population(&self) -> usize {
        self.grid.cells_iter().filter(|cell| cell.alive).count()
    }

    /// Live cells among the up-to-eight in-bounds neighbors of `loc`.
    pub fn num_live_neighbors(&self, loc: Loc) -> u32 {
        ConwayGridCell::num_live_neighbors(&Neighborhood::new(&self.grid.cells, loc))
    }
}

impl World for ConwayWorld {
    fn width(&self) -> u32 {
        self.grid.width()
    }

    fn height(&self) -> u32 {
        self.grid.height()
    }

    fn num_cells(&self) -> usize {
        self.grid.num_cells()
    }

    fn cells_iter(&self) -> impl DoubleEndedIterator<Item = &impl GridCell> + Clone {
        self.grid.cells_iter()
    }

    fn update(&mut self) -> StepOutcome {
        let outcome = self.grid.update();
        debug!("population {} after step ({outcome:?})", self.population());
        outcome
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ConwayGridCell {
    pub alive: bool,
}

impl ConwayGridCell {
    fn num_live_neighbors(neighborhood: &Neighborhood<ConwayGridCell>) -> u32 {
        let mut result = 0;
        neighborhood.for_neighbor_cells(|neighbor| {
            if neighbor.alive {
                result += 1;
            }
        });
        result
    }
}

impl GridCell for ConwayGridCell {
    fn glyph(&self) -> char {
        if self.alive {
            '1'
        } else {
            '0'
        }
    }

    fn update(&self, neighborhood: &Neighborhood<ConwayGridCell>, next_cell: &mut ConwayGridCell) {
        let neighbors = Self::num_live_neighbors(neighborhood);
        next_cell.alive = if self.alive {
            2 <= neighbors && neighbors <= 3
        } else {
            neighbors == 3
        };
    }
}
