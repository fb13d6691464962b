use thiserror::Error;

use crate::direction::Direction;

pub const WALL: char = '#';
pub const PELLET: char = '.';
pub const POWER_PELLET: char = 'o';

/// `h` and `p` are greasy food, `l` is a vegetable. `b` is plain floor.
pub const DEFAULT_MAZE: [&str; 15] = [
    "##############",
    "#....p.....h.#",
    "#.##.##.##.#.#",
    "#p##.......#h#",
    "#.##.#####...#",
    "#....l.......#",
    "##.##.###.#..#",
    "#.....b......#",
    "##.##.###.##.#",
    "#............#",
    "#.##.####.##.#",
    "#b##......##p#",
    "#.##.##.#.##.#",
    "#......l.....#",
    "##############",
];

/// Grid coordinate. Signed so that neighbours of border cells can be
/// expressed and then rejected by [`MazeGrid::is_wall`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    pub col: i32,
    pub row: i32,
}

impl Cell {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    pub fn step(self, dir: Direction) -> Cell {
        let (dx, dy) = dir.delta();
        Cell {
            col: self.col + dx,
            row: self.row + dy,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("maze layout has no rows")]
    Empty,
    #[error("maze layout row 0 has no cells")]
    ZeroWidth,
    #[error("maze row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("cell ({col}, {row}) already holds a collectible")]
    Stacked { col: i32, row: i32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    rows: Vec<Vec<char>>,
    width: usize,
}

impl Layout {
    pub fn parse<S: AsRef<str>>(lines: &[S]) -> Result<Self, LayoutError> {
        let rows: Vec<Vec<char>> = lines
            .iter()
            .map(|line| line.as_ref().chars().collect())
            .collect();
        let width = rows.first().ok_or(LayoutError::Empty)?.len();
        if width == 0 {
            return Err(LayoutError::ZeroWidth);
        }
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != width {
                return Err(LayoutError::Ragged {
                    row,
                    expected: width,
                    found: cells.len(),
                });
            }
        }
        Ok(Self { rows, width })
    }

    pub fn default_maze() -> Result<Self, LayoutError> {
        Self::parse(&DEFAULT_MAZE)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn glyph(&self, cell: Cell) -> Option<char> {
        let col = usize::try_from(cell.col).ok()?;
        let row = usize::try_from(cell.row).ok()?;
        self.rows.get(row)?.get(col).copied()
    }

    pub fn cells(&self) -> impl Iterator<Item = (Cell, char)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, &ch)| (Cell::new(x as i32, y as i32), ch))
        })
    }
}

#[derive(Debug, Clone)]
pub struct MazeGrid {
    columns: usize,
    rows: usize,
    walls: Vec<bool>,
}

impl MazeGrid {
    pub fn new(layout: &Layout) -> Self {
        let walls = layout.cells().map(|(_, ch)| ch == WALL).collect();
        Self {
            columns: layout.width(),
            rows: layout.height(),
            walls,
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.col >= 0
            && cell.row >= 0
            && (cell.col as usize) < self.columns
            && (cell.row as usize) < self.rows
    }

    pub fn is_wall(&self, cell: Cell) -> bool {
        if !self.contains(cell) {
            return true;
        }
        self.walls[cell.row as usize * self.columns + cell.col as usize]
    }

    pub fn open_neighbours(&self, cell: Cell) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|dir| !self.is_wall(cell.step(*dir)))
            .collect()
    }
}
