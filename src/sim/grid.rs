//! Toroidal tile map
//!
//! A fixed `GRID_SIDE` x `GRID_SIDE` array of tiles. Chain cells carry their
//! link pointer inline, so the grid doubles as the chain's node storage.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::GRID_SIDE;
use crate::wrap_index;

/// A cell coordinate. Always in `0..GRID_SIDE` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Build a coordinate from any signed position, wrapping both axes
    pub fn wrapped(pos: IVec2) -> Self {
        Self {
            row: wrap_index(pos.y, GRID_SIDE),
            col: wrap_index(pos.x, GRID_SIDE),
        }
    }

    /// Position as a vector (x = column, y = row)
    #[inline]
    pub fn as_ivec2(self) -> IVec2 {
        IVec2::new(self.col as i32, self.row as i32)
    }

    #[inline]
    fn in_bounds(self) -> bool {
        self.row < GRID_SIDE && self.col < GRID_SIDE
    }
}

/// Movement directions. Rows grow southward, columns grow eastward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    West,
    East,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::East => Direction::West,
        }
    }

    /// Unit step (x = column, y = row)
    pub fn offset(self) -> IVec2 {
        match self {
            Direction::North => IVec2::NEG_Y,
            Direction::South => IVec2::Y,
            Direction::West => IVec2::NEG_X,
            Direction::East => IVec2::X,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::North => "North",
            Direction::South => "South",
            Direction::West => "West",
            Direction::East => "East",
        }
    }
}

/// Contents of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tile {
    #[default]
    Empty,
    /// Item waiting to be collected (a gift)
    Pickup,
    /// Delivery point, deadly when reached empty-handed (a house)
    Hazard,
    /// Carried item. `link` points at the neighbouring link one step closer
    /// to the head; `None` on a lone link.
    ChainLink { link: Option<Coord> },
}

impl Tile {
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Tile::Empty)
    }

    #[inline]
    pub fn is_chain_link(&self) -> bool {
        matches!(self, Tile::ChainLink { .. })
    }
}

/// The map
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Grid {
    cells: [[Tile; GRID_SIDE]; GRID_SIDE],
}

impl Grid {
    /// An all-empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Side length in cells
    #[inline]
    pub const fn side(&self) -> usize {
        GRID_SIDE
    }

    pub fn get(&self, at: Coord) -> Tile {
        assert!(at.in_bounds(), "grid read out of range: {:?}", at);
        self.cells[at.row][at.col]
    }

    pub fn set(&mut self, at: Coord, tile: Tile) {
        assert!(at.in_bounds(), "grid write out of range: {:?}", at);
        self.cells[at.row][at.col] = tile;
    }

    /// Cell one step from `at`, wrapping across edges
    pub fn neighbor(&self, at: Coord, direction: Direction) -> Coord {
        Coord::wrapped(at.as_ivec2() + direction.offset())
    }

    /// All cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Tile)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, tiles)| {
            tiles
                .iter()
                .enumerate()
                .map(move |(col, &tile)| (Coord::new(row, col), tile))
        })
    }

    /// Number of cells matching `pred`
    pub fn count(&self, pred: impl Fn(&Tile) -> bool) -> usize {
        self.iter().filter(|(_, tile)| pred(tile)).count()
    }

    /// One row of tiles, for renderers
    pub fn row(&self, row: usize) -> &[Tile; GRID_SIDE] {
        &self.cells[row]
    }
}
