/// Static level geometry: a grid of wall and floor cells.
///
/// Text format, one row per line:
///   `#`        wall
///   `.` / ` `  floor
///   `P`        floor, player start (exactly one)

use glam::Vec2;

use crate::error::{GameError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Wall,
    Floor,
}

const BUILTIN: &str = "\
################
#P.....#.......#
#......#.......#
#..##......##..#
#..##......##..#
#..............#
#......##......#
####...##...####
#..............#
#..#........#..#
#..#...##...#..#
#......##......#
#..##......##..#
#..............#
#......#.......#
################";

/// Immutable once built: there are no mutating methods.
#[derive(Clone, Debug, PartialEq)]
pub struct Map {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    spawn: Vec2,
}

impl Map {
    pub fn parse(text: &str) -> Result<Map> {
        let rows: Vec<&str> = text
            .lines()
            .map(|l| l.trim_end_matches('\r'))
            .filter(|l| !l.is_empty())
            .collect();

        let height = rows.len();
        let width = rows.first().map(|r| r.chars().count()).unwrap_or(0);
        if width < 3 || height < 3 {
            return Err(GameError::MapShape(format!(
                "map must be at least 3x3, got {}x{}",
                width, height
            )));
        }

        let mut cells = Vec::with_capacity(width * height);
        let mut spawn = None;

        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(GameError::MapShape(format!(
                    "row {} has {} cells, expected {}",
                    y + 1,
                    row.chars().count(),
                    width
                )));
            }
            for (x, glyph) in row.chars().enumerate() {
                let cell = match glyph {
                    '#' => Cell::Wall,
                    '.' | ' ' => Cell::Floor,
                    'P' => {
                        if spawn.is_some() {
                            return Err(GameError::MapShape(
                                "more than one player start".to_string(),
                            ));
                        }
                        spawn = Some(Vec2::new(x as f32 + 0.5, y as f32 + 0.5));
                        Cell::Floor
                    }
                    found => {
                        return Err(GameError::MapParse {
                            line: y + 1,
                            column: x + 1,
                            found,
                        })
                    }
                };
                cells.push(cell);
            }
        }

        let spawn =
            spawn.ok_or_else(|| GameError::MapShape("no player start".to_string()))?;

        Ok(Map {
            width,
            height,
            cells,
            spawn,
        })
    }

    /// The arena shipped with the game.
    pub fn builtin() -> Result<Map> {
        Map::parse(BUILTIN)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Centre of the player-start cell.
    pub fn spawn(&self) -> Vec2 {
        self.spawn
    }

    pub fn cell(&self, x: i64, y: i64) -> Cell {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return Cell::Wall;
        }
        self.cells[y as usize * self.width + x as usize]
    }

    /// True when the cell containing `(x, y)` is a wall. Anything outside
    /// the grid counts as wall.
    pub fn is_wall(&self, x: f32, y: f32) -> bool {
        if !x.is_finite() || !y.is_finite() {
            return true;
        }
        self.cell(x.floor() as i64, y.floor() as i64) == Cell::Wall
    }

    pub fn is_wall_at(&self, p: Vec2) -> bool {
        self.is_wall(p.x, p.y)
    }

    /// Centres of every floor cell, row-major.
    pub fn floor_cells(&self) -> Vec<Vec2> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == Cell::Floor)
            .map(|(i, _)| {
                Vec2::new(
                    (i % self.width) as f32 + 0.5,
                    (i / self.width) as f32 + 0.5,
                )
            })
            .collect()
    }
}
