use core::fmt;
use std::str::FromStr;

use grid_util::grid::{BoolGrid, ValueGrid};
use grid_util::point::Point;
use log::debug;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

use crate::error::{DimensionFault, GridError};

/// Builds the [Point] for a row and column. Points use `x` for the column and `y` for the row.
pub fn cell(row: usize, col: usize) -> Point {
    Point::new(col as i32, row as i32)
}

/// The classification of a single cell as delivered by whatever produced the matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellTag {
    Free,
    Obstacle,
    Start,
    Goal,
}

impl CellTag {
    /// The symbol used by [Grid::parse] and the [Display](fmt::Display) impl of [Grid].
    pub fn symbol(self) -> char {
        match self {
            CellTag::Free => '.',
            CellTag::Obstacle => '#',
            CellTag::Start => 'S',
            CellTag::Goal => 'G',
        }
    }
}

impl TryFrom<char> for CellTag {
    type Error = char;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            '.' => Ok(CellTag::Free),
            '#' => Ok(CellTag::Obstacle),
            'S' => Ok(CellTag::Start),
            'G' => Ok(CellTag::Goal),
            other => Err(other),
        }
    }
}

/// Numeric codes as written by image samplers: 0 free, 1 obstacle, 2 start, 3 goal.
impl TryFrom<u8> for CellTag {
    type Error = u8;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(CellTag::Free),
            1 => Ok(CellTag::Obstacle),
            2 => Ok(CellTag::Start),
            3 => Ok(CellTag::Goal),
            other => Err(other),
        }
    }
}

/// [Grid] holds the immutable topology a search runs over: the blocked cells in a dense
/// [BoolGrid] (occupied is [true]), the unique start and goal, and the 4-connected components
/// of free cells in a [UnionFind] structure so unreachable goals are rejected without
/// flood-filling.
///
/// Searches never write to the grid, so one instance can be shared by reference between
/// any number of concurrent searches.
#[derive(Clone, Debug)]
pub struct Grid {
    blocked: BoolGrid,
    components: UnionFind<usize>,
    start: Point,
    goal: Point,
}

impl Grid {
    /// Builds a grid from a rectangular matrix of tags, indexed `rows[row][col]`.
    pub fn build<R: AsRef<[CellTag]>>(rows: &[R]) -> Result<Grid, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        if height == 0 || width == 0 {
            return Err(GridError::InvalidGridDimensions(DimensionFault::Empty));
        }
        if let Some((row, tags)) = rows
            .iter()
            .enumerate()
            .find(|(_, tags)| tags.as_ref().len() != width)
        {
            return Err(GridError::InvalidGridDimensions(DimensionFault::Ragged {
                row,
                expected: width,
                found: tags.as_ref().len(),
            }));
        }
        if i32::try_from(height).is_err() || i32::try_from(width).is_err() {
            return Err(GridError::InvalidGridDimensions(
                DimensionFault::TooLarge {
                    rows: height,
                    cols: width,
                },
            ));
        }

        let mut blocked = BoolGrid::new(width, height, false);
        let mut starts = Vec::new();
        let mut goals = Vec::new();
        for (row, tags) in rows.iter().enumerate() {
            for (col, tag) in tags.as_ref().iter().enumerate() {
                let point = cell(row, col);
                match tag {
                    CellTag::Obstacle => blocked.set(point.x, point.y, true),
                    CellTag::Start => starts.push(point),
                    CellTag::Goal => goals.push(point),
                    CellTag::Free => {}
                }
            }
        }
        let start = single_marker(CellTag::Start, starts)?;
        let goal = single_marker(CellTag::Goal, goals)?;

        let mut grid = Grid {
            blocked,
            components: UnionFind::new(width * height),
            start,
            goal,
        };
        grid.generate_components();
        debug!(
            "Built {}x{} grid with start {} and goal {}",
            height, width, start, goal
        );
        Ok(grid)
    }

    /// Parses one row per line using the symbols of [CellTag::symbol]. Blank lines and
    /// surrounding whitespace are ignored.
    pub fn parse(text: &str) -> Result<Grid, GridError> {
        let rows = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(row, line)| {
                line.chars()
                    .enumerate()
                    .map(|(col, symbol)| {
                        CellTag::try_from(symbol).map_err(|symbol| GridError::UnknownTag {
                            symbol: symbol.to_string(),
                            row,
                            col,
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Grid::build(&rows)
    }

    /// Builds a grid from the numeric encoding accepted by `CellTag::try_from(u8)`.
    pub fn from_codes<R: AsRef<[u8]>>(rows: &[R]) -> Result<Grid, GridError> {
        let rows = rows
            .iter()
            .enumerate()
            .map(|(row, codes)| {
                codes
                    .as_ref()
                    .iter()
                    .enumerate()
                    .map(|(col, &code)| {
                        CellTag::try_from(code).map_err(|code| GridError::UnknownTag {
                            symbol: code.to_string(),
                            row,
                            col,
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Grid::build(&rows)
    }

    pub fn rows(&self) -> usize {
        self.blocked.height()
    }

    pub fn cols(&self) -> usize {
        self.blocked.width()
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn goal(&self) -> Point {
        self.goal
    }

    pub fn in_bounds(&self, point: &Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.cols()
            && (point.y as usize) < self.rows()
    }

    /// Whether a search may step onto this cell.
    pub fn reachable(&self, point: &Point) -> bool {
        self.in_bounds(point) && !self.blocked.get(point.x, point.y)
    }

    pub fn tag(&self, point: &Point) -> Option<CellTag> {
        if !self.in_bounds(point) {
            None
        } else if *point == self.start {
            Some(CellTag::Start)
        } else if *point == self.goal {
            Some(CellTag::Goal)
        } else if self.blocked.get(point.x, point.y) {
            Some(CellTag::Obstacle)
        } else {
            Some(CellTag::Free)
        }
    }

    /// The in-bounds 4-neighbourhood of a cell, always in the order +row, -row, +col, -col.
    /// Obstacles are included; callers filter with [reachable](Self::reachable).
    pub fn neighbors(&self, point: &Point) -> SmallVec<[Point; 4]> {
        [
            Point::new(point.x, point.y + 1),
            Point::new(point.x, point.y - 1),
            Point::new(point.x + 1, point.y),
            Point::new(point.x - 1, point.y),
        ]
        .into_iter()
        .filter(|p| self.in_bounds(p))
        .collect()
    }

    /// Checks if both cells are free and on the same connected component.
    pub fn connected(&self, a: &Point, b: &Point) -> bool {
        self.reachable(a)
            && self.reachable(b)
            && self.components.equiv(self.index(a), self.index(b))
    }

    fn index(&self, point: &Point) -> usize {
        point.y as usize * self.cols() + point.x as usize
    }

    /// Links every free cell to its free +row and +col neighbours.
    fn generate_components(&mut self) {
        for row in 0..self.rows() {
            for col in 0..self.cols() {
                let point = cell(row, col);
                if !self.reachable(&point) {
                    continue;
                }
                let parent_ix = self.index(&point);
                for neighbor in [cell(row + 1, col), cell(row, col + 1)] {
                    if self.reachable(&neighbor) {
                        let ix = self.index(&neighbor);
                        self.components.union(parent_ix, ix);
                    }
                }
            }
        }
    }
}

fn single_marker(marker: CellTag, positions: Vec<Point>) -> Result<Point, GridError> {
    match positions.len() {
        0 if marker == CellTag::Start => Err(GridError::MissingStart),
        0 => Err(GridError::MissingGoal),
        1 => Ok(positions[0]),
        _ => Err(GridError::AmbiguousMarker { marker, positions }),
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grid::parse(s)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.rows() {
            let line = (0..self.cols())
                .filter_map(|col| self.tag(&cell(row, col)))
                .map(CellTag::symbol)
                .collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
